//! A single recommendation in the review list.

use leptos::prelude::*;

use crate::components::level_badge::LevelBadge;
use crate::components::reasoning_panel::ReasoningPanel;
use crate::model::RecommendationItem;

/// Handlers a row reports to, each keyed by item id.
#[derive(Clone, Copy)]
pub struct RowActions {
    pub cycle_level: Callback<String>,
    pub reject: Callback<String>,
    pub undo: Callback<String>,
    pub toggle_reasoning: Callback<String>,
    pub close_reasoning: Callback<()>,
}

#[component]
pub fn RecommendationRow(
    item: RecommendationItem,
    /// Whether this row's reasoning panel is the open one
    reasoning_open: bool,
    actions: RowActions,
) -> impl IntoView {
    let confidence = item.confidence_label();
    let has_reasoning = item.has_reasoning();
    let RecommendationItem {
        id,
        name,
        level,
        reasoning,
        is_rejected,
        is_approved,
        ..
    } = item;

    let mut row_class = String::from("rec-row");
    if is_rejected {
        row_class.push_str(" rec-rejected");
    }
    if is_approved {
        row_class.push_str(" rec-approved");
    }
    let name_class = if is_rejected { "rec-name rec-name-struck" } else { "rec-name" };

    let id_for_cycle = id.clone();
    let id_for_reasoning = id.clone();
    let id_for_toggle = id.clone();
    let panel_name = name.clone();

    view! {
        <div class=row_class>
            <div class="rec-row-main">
                <span class=name_class>{name}</span>
                <div class="rec-row-controls">
                    {level.map(|lvl| {
                        let id = id_for_cycle.clone();
                        view! {
                            <LevelBadge
                                level=lvl
                                on_cycle=Callback::new(move |_| actions.cycle_level.run(id.clone()))
                            />
                        }
                    })}
                    <span class="rec-confidence">{confidence}</span>
                    {has_reasoning.then(|| view! {
                        <button
                            class="btn btn-small btn-ghost rec-why"
                            on:click=move |_| actions.toggle_reasoning.run(id_for_reasoning.clone())
                        >
                            {if reasoning_open { "Hide" } else { "Why?" }}
                        </button>
                    })}
                    {if is_rejected {
                        view! {
                            <button
                                class="btn btn-small btn-ghost rec-undo"
                                title="Undo"
                                on:click=move |_| actions.undo.run(id_for_toggle.clone())
                            >
                                "\u{21B6}"
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button
                                class="btn btn-small btn-ghost rec-reject"
                                title="Reject"
                                on:click=move |_| actions.reject.run(id_for_toggle.clone())
                            >
                                "\u{2715}"
                            </button>
                        }.into_any()
                    }}
                </div>
            </div>
            {(reasoning_open && has_reasoning).then(|| view! {
                <ReasoningPanel
                    name=panel_name
                    reasoning=reasoning.unwrap_or_default()
                    on_close=actions.close_reasoning
                />
            })}
        </div>
    }
}
