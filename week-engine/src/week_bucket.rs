//! Groups a week's growth sessions into day-slots.

use crate::calendar_date::{parse_time_of_day, CalendarDate, WeekStart};
use chrono::NaiveTime;
use shared::GrowthSession;

pub const DAYS_IN_WEEK: usize = 7;

/// Sessions scheduled on one day of the displayed week
#[derive(Debug, Clone, PartialEq)]
pub struct DaySlot {
    date: CalendarDate,
    sessions: Vec<GrowthSession>,
}

impl DaySlot {
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Sessions in start-time order
    pub fn sessions(&self) -> &[GrowthSession] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn sort_by_start_time(&mut self) {
        // Stable: ties keep the order the server sent them in
        self.sessions.sort_by_key(start_time_key);
    }
}

/// Seven day-slots for the week containing an anchor date
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    anchor: CalendarDate,
    days: Vec<DaySlot>,
}

impl WeekBucket {
    /// A week with no sessions
    pub fn empty(anchor: CalendarDate, week_start: WeekStart) -> Self {
        let first_day = anchor.start_of_week(week_start);
        let days = (0..DAYS_IN_WEEK as i32)
            .map(|offset| DaySlot {
                date: first_day.add_days(offset),
                sessions: Vec::new(),
            })
            .collect();

        Self { anchor, days }
    }

    /// Place every session into the slot matching its date.
    ///
    /// Sessions dated outside the anchor's week are dropped: the server decides
    /// which week a fetch covers, so anything else is stale data.
    pub fn build(anchor: CalendarDate, sessions: Vec<GrowthSession>, week_start: WeekStart) -> Self {
        let mut bucket = Self::empty(anchor, week_start);
        let mut dropped = 0usize;

        for session in sessions {
            match bucket.slot_index(&CalendarDate::from_date(session.date)) {
                Some(index) => bucket.days[index].sessions.push(session),
                None => {
                    tracing::debug!(
                        "🗓️ Dropping session {} dated {} outside week of {}",
                        session.id,
                        session.date,
                        anchor
                    );
                    dropped += 1;
                }
            }
        }

        for day in &mut bucket.days {
            day.sort_by_start_time();
        }

        tracing::debug!(
            "🗓️ Built week of {} with {} sessions ({} dropped)",
            anchor,
            bucket.sessions().count(),
            dropped
        );
        bucket
    }

    pub fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    pub fn days(&self) -> &[DaySlot] {
        &self.days
    }

    pub fn first_day(&self) -> CalendarDate {
        self.days[0].date
    }

    pub fn day(&self, date: &CalendarDate) -> Option<&DaySlot> {
        self.slot_index(date).map(|index| &self.days[index])
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.slot_index(date).is_some()
    }

    /// All sessions of the week in display order
    pub fn sessions(&self) -> impl Iterator<Item = &GrowthSession> {
        self.days.iter().flat_map(|day| day.sessions.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DaySlot::is_empty)
    }

    /// Add a session created locally; returns false when it belongs to another week
    pub(crate) fn insert(&mut self, session: GrowthSession) -> bool {
        match self.slot_index(&CalendarDate::from_date(session.date)) {
            Some(index) => {
                let slot = &mut self.days[index];
                slot.sessions.push(session);
                slot.sort_by_start_time();
                true
            }
            None => false,
        }
    }

    /// Swap in the server's latest copy of a session already on display
    pub(crate) fn replace(&mut self, session: GrowthSession) -> bool {
        if self.remove(session.id).is_none() {
            return false;
        }
        self.insert(session)
    }

    pub(crate) fn remove(&mut self, session_id: u64) -> Option<GrowthSession> {
        self.days.iter_mut().find_map(|day| {
            let position = day.sessions.iter().position(|s| s.id == session_id)?;
            Some(day.sessions.remove(position))
        })
    }

    fn slot_index(&self, date: &CalendarDate) -> Option<usize> {
        let first = self.days[0].date.date();
        let offset = (date.date() - first).num_days();
        if (0..DAYS_IN_WEEK as i64).contains(&offset) {
            Some(offset as usize)
        } else {
            None
        }
    }
}

/// Parseable start times first, in ascending order
fn start_time_key(session: &GrowthSession) -> (bool, Option<NaiveTime>) {
    let time = parse_time_of_day(&session.start_time).ok();
    (time.is_none(), time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, session};

    #[test]
    fn test_empty_week_spans_monday_to_sunday() {
        let bucket = WeekBucket::empty(date("2020-01-15"), WeekStart::Monday);
        let dates: Vec<String> = bucket.days().iter().map(|d| d.date().to_date_string()).collect();

        assert_eq!(
            dates,
            vec!["2020-01-13", "2020-01-14", "2020-01-15", "2020-01-16", "2020-01-17", "2020-01-18", "2020-01-19"]
        );
        assert_eq!(bucket.anchor().to_date_string(), "2020-01-15");
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_sunday_start_week() {
        let bucket = WeekBucket::empty(date("2020-01-15"), WeekStart::Sunday);
        assert_eq!(bucket.first_day().to_date_string(), "2020-01-12");
        assert_eq!(bucket.days()[6].date().to_date_string(), "2020-01-18");
    }

    #[test]
    fn test_sessions_land_in_matching_day() {
        let sessions = vec![
            session(1, "2020-01-13", "10:00 am"),
            session(2, "2020-01-15", "03:30 pm"),
            session(3, "2020-01-19", "09:00"),
        ];

        let bucket = WeekBucket::build(date("2020-01-15"), sessions, WeekStart::Monday);

        for slot in bucket.days() {
            for s in slot.sessions() {
                assert!(CalendarDate::from_date(s.date).is_same_day(&slot.date()));
            }
        }
        assert_eq!(bucket.day(&date("2020-01-13")).unwrap().sessions()[0].id, 1);
        assert_eq!(bucket.day(&date("2020-01-15")).unwrap().sessions()[0].id, 2);
        assert_eq!(bucket.day(&date("2020-01-19")).unwrap().sessions()[0].id, 3);
        assert!(bucket.day(&date("2020-01-16")).unwrap().is_empty());
        assert_eq!(bucket.sessions().count(), 3);
    }

    #[test]
    fn test_sessions_outside_week_are_dropped() {
        let sessions = vec![
            session(1, "2020-01-12", "10:00 am"),
            session(2, "2020-01-14", "10:00 am"),
            session(3, "2020-01-20", "10:00 am"),
        ];

        let bucket = WeekBucket::build(date("2020-01-15"), sessions, WeekStart::Monday);

        let ids: Vec<u64> = bucket.sessions().map(|s| s.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(bucket.day(&date("2020-01-12")).is_none());
        assert!(!bucket.contains(&date("2020-01-20")));
    }

    #[test]
    fn test_day_sorted_by_start_time_with_stable_ties() {
        let sessions = vec![
            session(1, "2020-01-15", "03:30 pm"),
            session(2, "2020-01-15", "09:00 am"),
            session(3, "2020-01-15", "15:30"),
            session(4, "2020-01-15", "whenever"),
            session(5, "2020-01-15", "12:00 pm"),
        ];

        let bucket = WeekBucket::build(date("2020-01-15"), sessions, WeekStart::Monday);
        let ids: Vec<u64> = bucket
            .day(&date("2020-01-15"))
            .unwrap()
            .sessions()
            .iter()
            .map(|s| s.id)
            .collect();

        assert_eq!(ids, vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn test_local_mutations_keep_slots_sorted() {
        let mut bucket = WeekBucket::build(
            date("2020-01-15"),
            vec![session(1, "2020-01-15", "03:30 pm")],
            WeekStart::Monday,
        );

        assert!(bucket.insert(session(2, "2020-01-15", "09:00 am")));
        assert!(!bucket.insert(session(3, "2020-01-22", "09:00 am")));
        let ids: Vec<u64> = bucket.sessions().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let mut moved = session(1, "2020-01-16", "10:00 am");
        moved.title = "Moved".to_string();
        assert!(bucket.replace(moved));
        assert_eq!(bucket.day(&date("2020-01-16")).unwrap().sessions()[0].title, "Moved");
        assert!(!bucket.replace(session(99, "2020-01-16", "10:00 am")));

        assert_eq!(bucket.remove(2).map(|s| s.id), Some(2));
        assert_eq!(bucket.remove(2), None);
        assert_eq!(bucket.sessions().count(), 1);
    }
}
