//! Week navigation state machine.
//!
//! The controller owns the anchor week and every state transition, but does
//! no I/O itself. Each transition that needs data returns a [`FetchTicket`];
//! the caller runs the fetch and hands the result back to
//! [`WeekNavigationController::apply_fetch`]. Tickets carry a generation
//! number so a response that resolves after a newer navigation is ignored.

use crate::calendar_date::{parse_time_of_day, CalendarDate};
use crate::clock::Clock;
use crate::config::WeekViewConfig;
use crate::empty_state::{EmptyStateProvider, Nothingator};
use crate::error::FetchError;
use crate::history::{read_query_param, write_query_param, NavigationHistory};
use crate::view::{DayView, Phase, SessionView, WeekView};
use crate::visibility::{allowed_actions, allowed_session_actions, is_day_visible, Viewer, Viewport};
use crate::week_bucket::WeekBucket;
use shared::GrowthSession;
use std::rc::Rc;

const DAYS_PER_NAVIGATION: i32 = 7;

/// A fetch the controller is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    anchor: CalendarDate,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    /// Date to send to the week endpoint
    pub fn anchor_iso_date(&self) -> String {
        self.anchor.to_date_string()
    }
}

/// What happened to a fetch result handed back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// New week is on display
    Applied,
    /// Fetch failed; the previous week stays on display with a notice
    Failed(FetchError),
    /// A newer navigation superseded this fetch; nothing changed
    Discarded,
}

pub struct WeekNavigationController {
    config: WeekViewConfig,
    clock: Rc<dyn Clock>,
    history: Rc<dyn NavigationHistory>,
    empty_state: Box<dyn EmptyStateProvider>,
    viewer: Viewer,
    anchor: CalendarDate,
    bucket: WeekBucket,
    /// One entry per day-slot, drawn when the slot is empty
    empty_phrases: Vec<Option<String>>,
    phase: Phase,
    notice: Option<String>,
    generation: u64,
}

impl WeekNavigationController {
    pub fn new(
        config: WeekViewConfig,
        viewer: Viewer,
        clock: Rc<dyn Clock>,
        history: Rc<dyn NavigationHistory>,
    ) -> Self {
        let today = CalendarDate::today(clock.as_ref());
        let bucket = WeekBucket::empty(today, config.week_start);
        let empty_phrases = vec![None; bucket.days().len()];

        Self {
            config,
            clock,
            history,
            empty_state: Box::new(Nothingator::new()),
            viewer,
            anchor: today,
            bucket,
            empty_phrases,
            phase: Phase::Initializing,
            notice: None,
            generation: 0,
        }
    }

    pub fn with_empty_state(mut self, empty_state: Box<dyn EmptyStateProvider>) -> Self {
        self.empty_state = empty_state;
        self
    }

    /// Pick the starting week from the URL, falling back to today
    pub fn initialize(&mut self) -> FetchTicket {
        let anchor = self.anchor_from_url();
        tracing::info!("🗓️ Initializing week view at {}", anchor);
        self.begin_loading(anchor)
    }

    pub fn previous_week(&mut self) -> FetchTicket {
        self.navigate_by(-DAYS_PER_NAVIGATION)
    }

    pub fn next_week(&mut self) -> FetchTicket {
        self.navigate_by(DAYS_PER_NAVIGATION)
    }

    /// The browser moved through its history; the URL has already changed.
    ///
    /// Never pushes a history entry.
    pub fn history_navigated(&mut self) -> FetchTicket {
        let anchor = self.anchor_from_url();
        tracing::info!("🗓️ History navigation to {}", anchor);
        self.begin_loading(anchor)
    }

    /// Fetch the current week again without touching the history
    pub fn reload(&mut self) -> FetchTicket {
        self.begin_loading(self.anchor)
    }

    /// Apply the result of a fetch started by `ticket`
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<GrowthSession>, FetchError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                "🗓️ Discarding stale response for {} (generation {}, current {})",
                ticket.anchor,
                ticket.generation,
                self.generation
            );
            return FetchOutcome::Discarded;
        }

        match result {
            Ok(sessions) => {
                self.bucket = WeekBucket::build(ticket.anchor, sessions, self.config.week_start);
                self.empty_phrases = vec![None; self.bucket.days().len()];
                self.refresh_empty_phrases();
                self.phase = Phase::Ready;
                self.notice = None;
                tracing::info!(
                    "✅ Week of {} ready with {} sessions",
                    self.bucket.first_day(),
                    self.bucket.sessions().count()
                );
                FetchOutcome::Applied
            }
            Err(error) => {
                tracing::warn!("❌ Failed to load week of {}: {}", ticket.anchor, error);
                self.phase = Phase::Error;
                self.notice = Some(format!(
                    "Could not load growth sessions for the week of {}: {}",
                    ticket.anchor, error
                ));
                FetchOutcome::Failed(error)
            }
        }
    }

    /// Show a session the server just created; false when it is in another week
    pub fn apply_created(&mut self, session: GrowthSession) -> bool {
        let inserted = self.bucket.insert(session);
        self.refresh_empty_phrases();
        inserted
    }

    /// Swap in the server's copy of a session after join/leave/edit
    pub fn apply_updated(&mut self, session: GrowthSession) -> bool {
        let replaced = self.bucket.replace(session);
        self.refresh_empty_phrases();
        replaced
    }

    /// Drop a deleted session from the displayed week
    pub fn apply_deleted(&mut self, session_id: u64) -> Option<GrowthSession> {
        let removed = self.bucket.remove(session_id);
        self.refresh_empty_phrases();
        removed
    }

    pub fn set_viewer(&mut self, viewer: Viewer) {
        self.viewer = viewer;
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    pub fn bucket(&self) -> &WeekBucket {
        &self.bucket
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Initializing | Phase::Loading)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn config(&self) -> &WeekViewConfig {
        &self.config
    }

    /// Look up a session of the displayed week
    pub fn session(&self, session_id: u64) -> Option<&GrowthSession> {
        self.bucket.sessions().find(|session| session.id == session_id)
    }

    /// Derive the render model; rules are evaluated against the clock's today
    pub fn view(&self, viewport: Viewport) -> WeekView {
        let today = CalendarDate::today(self.clock.as_ref());
        // A narrow viewport shows the slot with today's weekday, in any week
        let week_start = self.config.week_start;
        let focus = self
            .bucket
            .days()
            .iter()
            .map(|slot| slot.date())
            .find(|date| date.weekday_number(week_start) == today.weekday_number(week_start))
            .unwrap_or(today);

        let days = self
            .bucket
            .days()
            .iter()
            .zip(&self.empty_phrases)
            .map(|(slot, phrase)| {
                let date = slot.date();
                DayView {
                    date,
                    weekday: date.weekday_name(),
                    is_today: date.is_same_day(&today),
                    is_hidden: !is_day_visible(&date, viewport, &focus),
                    actions: allowed_actions(&date, &self.viewer, viewport, &today),
                    sessions: slot
                        .sessions()
                        .iter()
                        .map(|session| SessionView {
                            session: session.clone(),
                            start_time_label: start_time_label(session),
                            actions: allowed_session_actions(session, &self.viewer, &today),
                        })
                        .collect(),
                    empty_phrase: if slot.is_empty() { phrase.clone() } else { None },
                }
            })
            .collect();

        WeekView {
            anchor: self.anchor,
            week_of: self.bucket.first_day(),
            days,
            phase: self.phase,
            is_loading: self.is_loading(),
            notice: self.notice.clone(),
        }
    }

    fn navigate_by(&mut self, days: i32) -> FetchTicket {
        let anchor = self.anchor.add_days(days);
        let search = write_query_param(&self.history.search(), &self.config.date_param, &anchor.to_date_string());
        self.history.push_search(&search);
        tracing::info!("🗓️ Navigated to week of {}", anchor);
        self.begin_loading(anchor)
    }

    fn begin_loading(&mut self, anchor: CalendarDate) -> FetchTicket {
        self.anchor = anchor;
        self.generation += 1;
        self.phase = Phase::Loading;
        FetchTicket {
            generation: self.generation,
            anchor,
        }
    }

    fn anchor_from_url(&self) -> CalendarDate {
        let search = self.history.search();
        match read_query_param(&search, &self.config.date_param) {
            Some(raw) => CalendarDate::parse_by_date(&raw).unwrap_or_else(|error| {
                tracing::warn!("⚠️ Ignoring date parameter: {}", error);
                CalendarDate::today(self.clock.as_ref())
            }),
            None => CalendarDate::today(self.clock.as_ref()),
        }
    }

    fn refresh_empty_phrases(&mut self) {
        for (slot, phrase) in self.bucket.days().iter().zip(self.empty_phrases.iter_mut()) {
            if !slot.is_empty() {
                *phrase = None;
            } else if phrase.is_none() {
                *phrase = Some(self.empty_state.random());
            }
        }
    }
}

fn start_time_label(session: &GrowthSession) -> String {
    match parse_time_of_day(&session.start_time) {
        Ok(time) => CalendarDate::from_date_time(session.date.and_time(time)).to_time_string_12_hours(true),
        Err(_) => session.start_time.clone(),
    }
}
