use leptos::prelude::*;

/// Explanation for why an item was recommended. Only one is open at a time.
#[component]
pub fn ReasoningPanel(
    #[prop(into)]
    name: String,
    #[prop(into)]
    reasoning: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="reasoning-panel">
            <div class="reasoning-header">
                <span class="reasoning-title">{format!("Why {}?", name)}</span>
                <button
                    class="btn btn-small btn-ghost"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    "\u{2715}"
                </button>
            </div>
            <p class="reasoning-text">{reasoning}</p>
        </div>
    }
}
