pub mod pagination_controls;
pub mod search_box;
pub mod stage_tabs;
pub mod status_badge;
