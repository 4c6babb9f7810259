//! # Week Engine
//!
//! Headless core of the growth sessions week calendar.
//!
//! This crate holds the week navigation state machine and the scheduling
//! rules that decide what a viewer may do on each day. It performs no I/O of
//! its own: the server, the clock, the address bar and the random phrase
//! source are all reached through traits, so the same engine drives the Yew
//! frontend and the unit tests.
//!
//! ## Module Organization
//!
//! - **calendar_date**: Day-granular dates, parsing and formatting
//! - **clock**: Injectable source of "now"
//! - **week_bucket**: Groups a week's sessions into seven ordered day-slots
//! - **visibility**: Create/join/leave/edit/delete eligibility and narrow-screen day filtering
//! - **empty_state**: Placeholder phrases for empty days (the Nothingator)
//! - **history**: The `date` query parameter and browser history seam
//! - **session_api**: Server client seam
//! - **navigation**: The sans-IO week navigation controller
//! - **navigator**: Async driver pairing controller transitions with server calls
//! - **view**: Render model handed to the UI
//! - **config**: Page-supplied configuration
//!
//! ## Rules
//!
//! - Navigation moves the anchor by exactly seven days
//! - Only the newest fetch may change the displayed week
//! - Creating a session needs an authenticated viewer and a day not before today
//! - A narrow viewport renders a single day; the others stay in the model, hidden

pub mod calendar_date;
pub mod clock;
pub mod config;
pub mod empty_state;
pub mod error;
pub mod history;
pub mod navigation;
pub mod navigator;
pub mod session_api;
pub mod view;
pub mod visibility;
pub mod week_bucket;

#[cfg(test)]
mod test_utils;

pub use calendar_date::{parse_time_of_day, CalendarDate, WeekStart};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::WeekViewConfig;
pub use empty_state::{EmptyStateProvider, Nothingator};
pub use error::{ConfigError, FetchError, ParseError};
pub use history::{read_query_param, write_query_param, MemoryHistory, NavigationHistory};
pub use navigation::{FetchOutcome, FetchTicket, WeekNavigationController};
pub use navigator::WeekNavigator;
pub use session_api::SessionApi;
pub use view::{DayView, Phase, SessionView, WeekView};
pub use visibility::{allowed_actions, allowed_session_actions, is_day_visible, DayAction, SessionAction, Viewer, Viewport};
pub use week_bucket::{DaySlot, WeekBucket, DAYS_IN_WEEK};
