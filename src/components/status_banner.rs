use leptos::prelude::*;

/// Full-page placeholder shown instead of the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Loading,
    Error,
    Empty,
    Approved,
}

#[component]
pub fn StatusBanner(
    kind: BannerKind,
    /// Headline, e.g. "All items approved!"
    #[prop(into)]
    title: String,
    /// Optional supporting text
    #[prop(optional, into)]
    detail: Option<String>,
    /// Renders a "Try Again" button when set
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    let (icon, class) = match kind {
        BannerKind::Loading => ("", "status-banner banner-loading"),
        BannerKind::Error => ("\u{2717}", "status-banner banner-error"),
        BannerKind::Empty => ("\u{2014}", "status-banner banner-empty"),
        BannerKind::Approved => ("\u{2713}", "status-banner banner-approved"),
    };

    view! {
        <div class=class>
            {if kind == BannerKind::Loading {
                view! { <div class="spinner"></div> }.into_any()
            } else {
                view! { <span class="banner-icon">{icon}</span> }.into_any()
            }}
            <h3 class="banner-title">{title}</h3>
            {detail.map(|d| view! { <p class="banner-detail">{d}</p> })}
            {on_retry.map(|retry| view! {
                <button class="btn btn-primary" on:click=move |_| retry.run(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}
