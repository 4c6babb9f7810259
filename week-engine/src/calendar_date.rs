//! Calendar-day arithmetic and formatting.
//!
//! A [`CalendarDate`] is a local calendar day with an optional time of day
//! (midnight for values built from a date). Navigation and comparisons only
//! look at the day; the time is kept for session start-time labels.

use crate::clock::Clock;
use crate::error::ParseError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// First day of a displayed week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Position of `weekday` in a week starting on this day (0-6)
    pub fn offset_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Sunday => weekday.num_days_from_sunday(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    value: NaiveDateTime,
}

impl CalendarDate {
    /// Midnight of the given day
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            value: date.and_time(NaiveTime::MIN),
        }
    }

    pub fn from_date_time(value: NaiveDateTime) -> Self {
        Self { value }
    }

    /// Parse a `YYYY-MM-DD` string
    pub fn parse_by_date(input: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT)
            .map(Self::from_date)
            .map_err(|_| ParseError::InvalidDate(input.to_string()))
    }

    /// Parse a clock time on today's date.
    ///
    /// A trailing am/pm marker selects the 12-hour format, otherwise the input
    /// is read as 24-hour `HH:MM` or `HH:MM:SS`.
    pub fn parse_by_time(input: &str, clock: &dyn Clock) -> Result<Self, ParseError> {
        let time = parse_time_of_day(input)?;
        Ok(Self {
            value: clock.today().and_time(time),
        })
    }

    pub fn today(clock: &dyn Clock) -> Self {
        Self::from_date(clock.today())
    }

    /// Shift by `days` calendar days, saturating at chrono's representable range.
    ///
    /// `add_days(n).add_days(-n)` returns the starting day only while the
    /// shifted value stays inside that range; use [`Self::checked_add_days`]
    /// to detect overflow instead.
    pub fn add_days(self, days: i32) -> Self {
        self.checked_add_days(days).unwrap_or(Self {
            value: if days < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            },
        })
    }

    /// Shift by `days` calendar days, `None` outside chrono's representable range
    pub fn checked_add_days(self, days: i32) -> Option<Self> {
        self.value
            .checked_add_signed(Duration::days(i64::from(days)))
            .map(|value| Self { value })
    }

    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        self.date() == other.date()
    }

    /// Strictly before `other`'s calendar day
    pub fn is_before_day(&self, other: &CalendarDate) -> bool {
        self.date() < other.date()
    }

    /// Strictly before today's calendar day; today itself is not in the past
    pub fn is_in_past(&self, clock: &dyn Clock) -> bool {
        self.date() < clock.today()
    }

    pub fn date(&self) -> NaiveDate {
        self.value.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.value.time()
    }

    /// First day of the week containing this date, at midnight
    pub fn start_of_week(&self, week_start: WeekStart) -> Self {
        let offset = self.weekday_number(week_start) as i32;
        Self::from_date(self.date()).add_days(-offset)
    }

    /// `YYYY-MM-DD`
    pub fn to_date_string(&self) -> String {
        self.value.format(ISO_DATE_FORMAT).to_string()
    }

    /// `YYYY-MM-DDTHH:MM:SS`
    pub fn to_iso_string(&self) -> String {
        self.value.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// English weekday name, e.g. "Wednesday"
    pub fn weekday_name(&self) -> String {
        self.value.format("%A").to_string()
    }

    pub fn weekday_number(&self, week_start: WeekStart) -> u32 {
        week_start.offset_of(self.value.weekday())
    }

    /// 12-hour clock label, e.g. "03:30 pm"
    pub fn to_time_string_12_hours(&self, with_am_pm: bool) -> String {
        if with_am_pm {
            self.value.format("%I:%M %P").to_string()
        } else {
            self.value.format("%I:%M").to_string()
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_date_string())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_by_date(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Parse a session start time in either 12-hour or 24-hour notation
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, ParseError> {
    let invalid = || ParseError::InvalidTime(input.to_string());
    let normalized = input.trim().to_ascii_lowercase();

    let (clock_part, is_pm) = if let Some(rest) = normalized.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = normalized.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (normalized.as_str(), None)
    };

    match is_pm {
        Some(is_pm) => {
            let time = NaiveTime::parse_from_str(clock_part, "%H:%M").map_err(|_| invalid())?;
            let hour = match (time.hour(), is_pm) {
                (hour, _) if hour == 0 || hour > 12 => return Err(invalid()),
                (12, false) => 0,
                (12, true) => 12,
                (hour, false) => hour,
                (hour, true) => hour + 12,
            };
            NaiveTime::from_hms_opt(hour, time.minute(), 0).ok_or_else(invalid)
        }
        None => NaiveTime::parse_from_str(clock_part, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(clock_part, "%H:%M"))
            .map_err(|_| invalid()),
    }
}
