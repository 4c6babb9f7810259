pub mod api;
pub mod browser_history;
pub mod logging;
pub mod page_context;
