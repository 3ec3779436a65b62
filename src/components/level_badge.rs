use leptos::prelude::*;

use crate::model::Level;

/// Colour-coded proficiency badge. Clicking it advances to the next level.
#[component]
pub fn LevelBadge(
    level: Level,
    /// Invoked on click; the parent owns the level change
    on_cycle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=format!("level-badge {}", level.badge_class())
            title=format!("{} (click to change level)", level)
            on:click=move |_| on_cycle.run(())
        >
            {level.label()}
        </button>
    }
}
