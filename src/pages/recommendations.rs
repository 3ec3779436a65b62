//! Review page for one employee's recommended skills and competencies.
//!
//! Loads the recommendations once per visit and keeps every review
//! decision (level changes, rejections, bulk approval) in page-local
//! signals. Nothing is written back to the API.

use leptos::logging;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::recommendation_row::{RecommendationRow, RowActions};
use crate::components::status_banner::{BannerKind, StatusBanner};
use crate::config::ViewConfig;
use crate::model::RecommendationItem;
use crate::review::{Phase, ReviewSession};

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let config = StoredValue::new(use_context::<ViewConfig>().unwrap_or_default());
    let params = use_params_map();

    let session = RwSignal::new(ReviewSession::default());
    let approve_timer = StoredValue::new(None::<TimeoutHandle>);

    let start_load = move |employee_id: Option<String>| {
        cancel_timer(approve_timer);
        let url = config.with_value(|c| c.endpoint(employee_id.as_deref()));
        let generation = session
            .try_update(|s| s.begin_load())
            .unwrap_or_default();
        logging::log!("loading recommendations from {}", url);

        spawn_local(async move {
            let result = api::fetch_recommendations(&url).await;
            match &result {
                Ok(set) => logging::log!(
                    "loaded {} recommendations for {} ({})",
                    set.recommendations.len(),
                    set.employee_name,
                    set.employee_id
                ),
                Err(e) => logging::error!("recommendation fetch failed: {}", e),
            }

            // None once the page is gone; false when a newer load started
            let applied = session.try_update(|s| s.complete_load(generation, result));
            if applied == Some(false) {
                logging::log!("dropped response for superseded load {}", generation);
            }
        });
    };

    // Load on mount and whenever the routed employee changes
    Effect::new(move |_| {
        let employee_id = params.read().get("employee_id");
        start_load(employee_id);
    });

    let on_retry = Callback::new(move |_: ()| {
        start_load(params.read_untracked().get("employee_id"));
    });

    let on_approve_all = Callback::new(move |_: ()| {
        let started = session
            .try_update(|s| s.review.begin_approve_all())
            .unwrap_or(false);
        if !started {
            return;
        }

        let delay = config.with_value(|c| c.approve_delay);
        let finish = move || {
            approve_timer.set_value(None);
            session.update(|s| s.review.finish_approve_all());
            logging::log!("all recommendations approved");
        };
        match set_timeout_with_handle(finish, delay) {
            Ok(handle) => approve_timer.set_value(Some(handle)),
            Err(_) => {
                logging::warn!("could not schedule approval animation, approving immediately");
                session.update(|s| s.review.finish_approve_all());
            }
        }
    });

    on_cleanup(move || cancel_timer(approve_timer));

    let actions = RowActions {
        cycle_level: Callback::new(move |id: String| session.update(|s| s.review.cycle_level(&id))),
        reject: Callback::new(move |id: String| session.update(|s| s.review.reject(&id))),
        undo: Callback::new(move |id: String| session.update(|s| s.review.undo(&id))),
        toggle_reasoning: Callback::new(move |id: String| {
            session.update(|s| s.review.toggle_reasoning(&id))
        }),
        close_reasoning: Callback::new(move |_: ()| session.update(|s| s.review.close_reasoning())),
    };

    let phase = Memo::new(move |_| session.with(|s| s.phase()));

    view! {
        <div class="page recommendations-page">
            <style>{include_str!("recommendations.css")}</style>

            {move || match phase.get() {
                Phase::Loading => view! {
                    <StatusBanner kind=BannerKind::Loading title="Loading recommendations..." />
                }.into_any(),
                Phase::Error(message) => view! {
                    <StatusBanner kind=BannerKind::Error title=message on_retry=on_retry />
                }.into_any(),
                Phase::AllApproved => view! {
                    <div class="review">
                        <ReviewHeader session=session on_approve_all=on_approve_all />
                        <StatusBanner
                            kind=BannerKind::Approved
                            title="All items approved!"
                            detail="Your profile has been updated with the recommended skills and competencies."
                        />
                    </div>
                }.into_any(),
                Phase::Empty => view! {
                    <div class="review">
                        <ReviewHeader session=session on_approve_all=on_approve_all />
                        <StatusBanner
                            kind=BannerKind::Empty
                            title="No recommendations"
                            detail="There are no recommended skills or competencies to review right now."
                        />
                    </div>
                }.into_any(),
                Phase::Ready => view! {
                    <div class="review">
                        <ReviewHeader session=session on_approve_all=on_approve_all />
                        <div class="review-sections">
                            {move || session.with(|s| {
                                let r = &s.review;
                                let skills: Vec<RecommendationItem> = r.skills().cloned().collect();
                                let competencies: Vec<RecommendationItem> =
                                    r.competencies().cloned().collect();
                                let selected = r.selected.clone();
                                view! {
                                    <ItemSection
                                        title="Recommended Skills"
                                        items=skills
                                        selected=selected.clone()
                                        actions=actions
                                    />
                                    <ItemSection
                                        title="Recommended Competencies"
                                        items=competencies
                                        selected=selected
                                        actions=actions
                                    />
                                }
                            })}
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Title, subject and the Approve All control.
#[component]
fn ReviewHeader(session: RwSignal<ReviewSession>, on_approve_all: Callback<()>) -> impl IntoView {
    let summary = move || {
        session.with(|s| {
            let r = &s.review;
            if r.employee_name.is_empty() {
                r.review_summary()
            } else {
                format!("{} \u{2022} {}", r.employee_name, r.review_summary())
            }
        })
    };
    let approving = move || session.with(|s| s.review.approving);

    view! {
        <div class="review-header">
            <div class="review-heading">
                <h2>"Recommended Profile Updates"</h2>
                <p class="page-description">{summary}</p>
            </div>
            <Show when=move || session.with(|s| !s.review.all_approved && !s.review.items.is_empty())>
                <button
                    class="btn btn-primary approve-all"
                    on:click=move |_| on_approve_all.run(())
                    disabled=approving
                >
                    {move || if approving() { "Approving..." } else { "Approve All" }}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn ItemSection(
    title: &'static str,
    items: Vec<RecommendationItem>,
    /// Id of the item whose reasoning is open
    selected: Option<String>,
    actions: RowActions,
) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <section class="card rec-section">
                <h3 class="rec-section-title">{title}</h3>
                <div class="rec-list">
                    {items.into_iter().map(|item| {
                        let open = selected.as_deref() == Some(item.id.as_str());
                        view! { <RecommendationRow item=item reasoning_open=open actions=actions /> }
                    }).collect::<Vec<_>>()}
                </div>
            </section>
        }
    })
}

fn cancel_timer(timer: StoredValue<Option<TimeoutHandle>>) {
    if let Some(Some(handle)) = timer.try_update_value(|t| t.take()) {
        handle.clear();
    }
}
