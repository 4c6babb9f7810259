//! Shared fixtures for engine tests.
//!
//! The fixture week mirrors the sessions page as seen on Wednesday
//! 2020-01-15: sessions on Monday, Tuesday, Wednesday and Friday, nothing on
//! Thursday or the weekend.

use crate::calendar_date::{CalendarDate, WeekStart};
use crate::clock::{Clock, FixedClock};
use crate::config::WeekViewConfig;
use crate::empty_state::EmptyStateProvider;
use crate::error::FetchError;
use crate::history::{MemoryHistory, NavigationHistory};
use crate::navigation::WeekNavigationController;
use crate::navigator::WeekNavigator;
use crate::session_api::SessionApi;
use crate::visibility::Viewer;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{CreateGrowthSessionRequest, GrowthSession, User};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

pub const TODAY: &str = "2020-01-15";
pub const NOTHING_PHRASE: &str = "A random nothing";

/// Route engine logs through the test harness; RUST_LOG overrides the level
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("week_engine=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn date(iso: &str) -> CalendarDate {
    CalendarDate::parse_by_date(iso).unwrap()
}

pub fn user(id: u64) -> User {
    User {
        id,
        name: format!("Member {}", id),
        github_nickname: format!("member{}", id),
        avatar: format!("https://avatars.example.com/{}.png", id),
        email: Some(format!("member{}@example.com", id)),
    }
}

/// Session owned by user 1 with no attendees
pub fn session(id: u64, day: &str, start_time: &str) -> GrowthSession {
    GrowthSession {
        id,
        title: format!("Session {}", id),
        topic: format!("Topic of session {}", id),
        location: "Discord".to_string(),
        date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        start_time: start_time.to_string(),
        end_time: None,
        owner: user(1),
        attendees: Vec::new(),
        attendee_limit: None,
    }
}

pub fn fixture_week() -> Vec<GrowthSession> {
    vec![
        session(1, "2020-01-13", "10:00 am"),
        session(2, "2020-01-13", "03:30 pm"),
        session(3, "2020-01-14", "04:00 pm"),
        session(4, "2020-01-15", "15:30"),
        session(5, "2020-01-17", "12:00 pm"),
    ]
}

pub struct FixedPhrase(pub String);

impl EmptyStateProvider for FixedPhrase {
    fn random(&self) -> String {
        self.0.clone()
    }
}

/// In-memory stand-in for the growth sessions server
pub struct FakeSessionApi {
    sessions: RefCell<Vec<GrowthSession>>,
    acting_user: User,
    fetch_calls: RefCell<Vec<String>>,
    next_fetch_error: RefCell<Option<FetchError>>,
    fail_mutations: Cell<bool>,
}

impl FakeSessionApi {
    pub fn new(sessions: Vec<GrowthSession>, acting_user: User) -> Self {
        Self {
            sessions: RefCell::new(sessions),
            acting_user,
            fetch_calls: RefCell::new(Vec::new()),
            next_fetch_error: RefCell::new(None),
            fail_mutations: Cell::new(false),
        }
    }

    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.borrow().clone()
    }

    pub fn fail_next_fetch(&self, error: FetchError) {
        *self.next_fetch_error.borrow_mut() = Some(error);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.set(fail);
    }

    fn check_mutation(&self) -> Result<(), FetchError> {
        if self.fail_mutations.get() {
            return Err(FetchError::Status {
                status: 403,
                message: "This action is unauthorized.".to_string(),
            });
        }
        Ok(())
    }

    fn update(&self, id: u64, change: impl FnOnce(&mut GrowthSession)) -> Result<GrowthSession, FetchError> {
        self.check_mutation()?;
        let mut sessions = self.sessions.borrow_mut();
        let session = sessions.iter_mut().find(|s| s.id == id).ok_or(FetchError::Status {
            status: 404,
            message: "Not Found".to_string(),
        })?;
        change(session);
        Ok(session.clone())
    }
}

#[async_trait(?Send)]
impl SessionApi for FakeSessionApi {
    async fn fetch_week(&self, anchor_iso_date: &str) -> Result<Vec<GrowthSession>, FetchError> {
        self.fetch_calls.borrow_mut().push(anchor_iso_date.to_string());
        // Let overlapping requests interleave like real network calls
        tokio::task::yield_now().await;

        if let Some(error) = self.next_fetch_error.borrow_mut().take() {
            return Err(error);
        }
        let anchor = CalendarDate::parse_by_date(anchor_iso_date).map_err(|e| FetchError::Status {
            status: 422,
            message: e.to_string(),
        })?;
        let first = anchor.start_of_week(WeekStart::Monday).date();
        let last = anchor.start_of_week(WeekStart::Monday).add_days(6).date();
        Ok(self
            .sessions
            .borrow()
            .iter()
            .filter(|s| s.date >= first && s.date <= last)
            .cloned()
            .collect())
    }

    async fn create(&self, request: &CreateGrowthSessionRequest) -> Result<GrowthSession, FetchError> {
        self.check_mutation()?;
        let mut sessions = self.sessions.borrow_mut();
        let id = sessions.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let created = GrowthSession {
            id,
            title: request.title.clone(),
            topic: request.topic.clone(),
            location: request.location.clone(),
            date: request.date,
            start_time: request.start_time.clone(),
            end_time: request.end_time.clone(),
            owner: self.acting_user.clone(),
            attendees: Vec::new(),
            attendee_limit: request.attendee_limit,
        };
        sessions.push(created.clone());
        Ok(created)
    }

    async fn join(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError> {
        let user = self.acting_user.clone();
        self.update(session.id, |s| s.attendees.push(user))
    }

    async fn leave(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError> {
        let user_id = self.acting_user.id;
        self.update(session.id, |s| s.attendees.retain(|a| a.id != user_id))
    }

    async fn delete(&self, session: &GrowthSession) -> Result<(), FetchError> {
        self.check_mutation()?;
        self.sessions.borrow_mut().retain(|s| s.id != session.id);
        Ok(())
    }
}

/// Controller on a clock pinned to [`TODAY`] with an in-memory history
pub struct ControllerFixture {
    pub controller: WeekNavigationController,
    pub clock: Rc<FixedClock>,
    pub history: Rc<MemoryHistory>,
}

impl ControllerFixture {
    pub fn new(search: &str, viewer: Viewer) -> Self {
        init_test_logging();
        let clock = Rc::new(FixedClock::at_date(date(TODAY).date()));
        let history = Rc::new(MemoryHistory::with_search(search));
        let controller = WeekNavigationController::new(
            WeekViewConfig::default(),
            viewer,
            clock.clone() as Rc<dyn Clock>,
            history.clone() as Rc<dyn NavigationHistory>,
        )
        .with_empty_state(Box::new(FixedPhrase(NOTHING_PHRASE.to_string())));

        Self {
            controller,
            clock,
            history,
        }
    }
}

/// Navigator over a [`FakeSessionApi`] seeded with [`fixture_week`]
pub struct NavigatorFixture {
    pub navigator: WeekNavigator,
    pub api: Rc<FakeSessionApi>,
    pub clock: Rc<FixedClock>,
    pub history: Rc<MemoryHistory>,
}

impl NavigatorFixture {
    pub fn new(search: &str, viewer: Viewer) -> Self {
        let acting_user = viewer.user().cloned().unwrap_or_else(|| user(1));
        let ControllerFixture {
            controller,
            clock,
            history,
        } = ControllerFixture::new(search, viewer);
        let api = Rc::new(FakeSessionApi::new(fixture_week(), acting_user));
        let navigator = WeekNavigator::new(controller, api.clone() as Rc<dyn SessionApi>);

        Self {
            navigator,
            api,
            clock,
            history,
        }
    }
}
