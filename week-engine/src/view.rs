//! Render model of the week view.
//!
//! Everything a template needs to draw the week, already run through the
//! visibility rules. Hidden days are kept in the list and flagged, never
//! removed.

use crate::calendar_date::CalendarDate;
use crate::visibility::{DayAction, SessionAction};
use shared::GrowthSession;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekView {
    /// Date the current navigation points at
    pub anchor: CalendarDate,
    /// First day of the displayed week
    pub week_of: CalendarDate,
    pub days: Vec<DayView>,
    pub phase: Phase,
    pub is_loading: bool,
    /// Non-fatal message, e.g. a failed fetch
    pub notice: Option<String>,
}

impl WeekView {
    /// Anchor the "previous week" button navigates to
    pub fn previous_anchor(&self) -> CalendarDate {
        self.anchor.add_days(-7)
    }

    pub fn next_anchor(&self) -> CalendarDate {
        self.anchor.add_days(7)
    }

    pub fn visible_days(&self) -> impl Iterator<Item = &DayView> {
        self.days.iter().filter(|day| !day.is_hidden)
    }

    /// Day-slot for a weekday name such as "Monday"
    pub fn day_named(&self, weekday: &str) -> Option<&DayView> {
        self.days.iter().find(|day| day.weekday == weekday)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub date: CalendarDate,
    pub weekday: String,
    pub is_today: bool,
    pub is_hidden: bool,
    pub actions: BTreeSet<DayAction>,
    pub sessions: Vec<SessionView>,
    /// Placeholder for a day without sessions
    pub empty_phrase: Option<String>,
}

impl DayView {
    pub fn can_create_session(&self) -> bool {
        self.actions.contains(&DayAction::CreateSession)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub session: GrowthSession,
    /// "03:30 pm", or the raw start time when it cannot be parsed
    pub start_time_label: String,
    pub actions: BTreeSet<SessionAction>,
}

impl SessionView {
    pub fn can(&self, action: SessionAction) -> bool {
        self.actions.contains(&action)
    }
}
