pub mod use_viewport;
pub mod use_week_navigation;
