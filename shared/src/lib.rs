use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A member of the group, as the growth sessions server exposes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    /// GitHub handle used for the login flow
    pub github_nickname: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A short collaborative work session scheduled on a calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSession {
    pub id: u64,
    pub title: String,
    pub topic: String,
    pub location: String,
    /// Calendar day of the session (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Start time as sent by the server, either "hh:mm am" or "HH:MM[:SS]"
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub owner: User,
    #[serde(default)]
    pub attendees: Vec<User>,
    /// Maximum number of attendees, `None` means unlimited
    #[serde(default)]
    pub attendee_limit: Option<u32>,
}

impl GrowthSession {
    /// Whether the given user created this session
    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner.id == user_id
    }

    /// Whether the given user already joined this session
    pub fn is_attendee(&self, user_id: u64) -> bool {
        self.attendees.iter().any(|attendee| attendee.id == user_id)
    }

    /// Whether the attendee limit has been reached
    pub fn is_full(&self) -> bool {
        match self.attendee_limit {
            Some(limit) => self.attendees.len() >= limit as usize,
            None => false,
        }
    }
}

/// Response of the week endpoint: sessions keyed by their calendar day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekGrowthSessions {
    pub days: BTreeMap<String, Vec<GrowthSession>>,
}

impl WeekGrowthSessions {
    /// Flatten into a single list, days in ascending order, server order within a day
    pub fn into_sessions(self) -> Vec<GrowthSession> {
        self.days.into_values().flatten().collect()
    }
}

/// Request to schedule a new growth session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGrowthSessionRequest {
    pub title: String,
    pub topic: String,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: Option<String>,
    pub attendee_limit: Option<u32>,
}

/// Error body returned by the server on validation or authorization failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64) -> User {
        User {
            id,
            name: format!("User {}", id),
            github_nickname: format!("user{}", id),
            avatar: String::new(),
            email: None,
        }
    }

    #[test]
    fn test_week_response_flattens_in_day_order() {
        let json = r#"{
            "2020-01-14": [{"id": 2, "title": "B", "topic": "b", "location": "Zoom",
                "date": "2020-01-14", "start_time": "10:00 am",
                "owner": {"id": 1, "name": "Jack", "github_nickname": "jack"}}],
            "2020-01-13": [{"id": 1, "title": "A", "topic": "a", "location": "Zoom",
                "date": "2020-01-13", "start_time": "03:30 pm",
                "owner": {"id": 1, "name": "Jack", "github_nickname": "jack"},
                "attendee_limit": 4}],
            "2020-01-15": []
        }"#;

        let week: WeekGrowthSessions = serde_json::from_str(json).unwrap();
        let sessions = week.into_sessions();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, 1);
        assert_eq!(sessions[0].attendee_limit, Some(4));
        assert_eq!(sessions[1].id, 2);
        assert!(sessions[1].attendees.is_empty());
        assert_eq!(sessions[1].date, NaiveDate::from_ymd_opt(2020, 1, 14).unwrap());
    }

    #[test]
    fn test_membership_helpers() {
        let session = GrowthSession {
            id: 7,
            title: "Pairing".to_string(),
            topic: "Rust lifetimes".to_string(),
            location: "Room 1".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            start_time: "04:00 pm".to_string(),
            end_time: None,
            owner: user(1),
            attendees: vec![user(2)],
            attendee_limit: Some(1),
        };

        assert!(session.is_owner(1));
        assert!(!session.is_owner(2));
        assert!(session.is_attendee(2));
        assert!(!session.is_attendee(3));
        assert!(session.is_full());
    }
}
