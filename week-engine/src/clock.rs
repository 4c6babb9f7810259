//! Time sources for "today".
//!
//! Everything that needs the current day asks a [`Clock`] instead of reading
//! the system time directly, so tests can pin the calendar to a known day
//! without touching shared state.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::cell::Cell;

/// Source of the current local date and time
pub trait Clock {
    /// Current local date and time in the viewer's reference timezone
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the real local clock at every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, movable by the owning test
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Pin the clock to midnight of `date`
    pub fn at_date(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::MIN))
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    /// Move the pinned instant by whole days
    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
