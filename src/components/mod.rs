pub mod level_badge;
pub mod reasoning_panel;
pub mod recommendation_row;
pub mod status_banner;
