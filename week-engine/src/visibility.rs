//! Which affordances a viewer gets on a given day.
//!
//! These rules only decide what to render. The server enforces the same
//! rules independently on every request.

use crate::calendar_date::CalendarDate;
use shared::{GrowthSession, User};
use std::collections::BTreeSet;

/// Who is looking at the calendar, as supplied by the hosting page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Guest,
    Authenticated(User),
}

impl Viewer {
    /// `None` means guest
    pub fn from_user(user: Option<User>) -> Self {
        user.map(Viewer::Authenticated).unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Viewer::Guest => None,
            Viewer::Authenticated(user) => Some(user),
        }
    }
}

/// Display density derived from window width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Single-day display
    Narrow,
    /// Full week display
    Wide,
}

impl Viewport {
    /// Widths strictly below `breakpoint` are narrow
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayAction {
    CreateSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionAction {
    Join,
    Leave,
    Edit,
    Delete,
}

/// Day-level affordances.
///
/// Creating a session needs an authenticated viewer and a day that is not
/// before today. The viewport never changes eligibility, only which days are
/// rendered (see [`is_day_visible`]).
pub fn allowed_actions(
    day: &CalendarDate,
    viewer: &Viewer,
    _viewport: Viewport,
    today: &CalendarDate,
) -> BTreeSet<DayAction> {
    let mut actions = BTreeSet::new();
    if viewer.is_authenticated() && !day.is_before_day(today) {
        actions.insert(DayAction::CreateSession);
    }
    actions
}

/// Per-session rendering hints for join/leave/edit/delete buttons
pub fn allowed_session_actions(
    session: &GrowthSession,
    viewer: &Viewer,
    today: &CalendarDate,
) -> BTreeSet<SessionAction> {
    let mut actions = BTreeSet::new();
    let Some(user) = viewer.user() else {
        return actions;
    };
    let is_past = CalendarDate::from_date(session.date).is_before_day(today);

    if session.is_owner(user.id) {
        actions.insert(SessionAction::Edit);
        actions.insert(SessionAction::Delete);
    } else if session.is_attendee(user.id) {
        if !is_past {
            actions.insert(SessionAction::Leave);
        }
    } else if !is_past && !session.is_full() {
        actions.insert(SessionAction::Join);
    }

    actions
}

/// Whether a day-slot is shown or only present-but-hidden.
///
/// `focus` is the single day a narrow viewport shows.
pub fn is_day_visible(day: &CalendarDate, viewport: Viewport, focus: &CalendarDate) -> bool {
    match viewport {
        Viewport::Wide => true,
        Viewport::Narrow => day.is_same_day(focus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, session, user};

    fn member() -> Viewer {
        Viewer::Authenticated(user(987))
    }

    #[test]
    fn test_guests_never_create() {
        let today = date("2020-01-15");
        for offset in [-3, 0, 1, 10] {
            for viewport in [Viewport::Narrow, Viewport::Wide] {
                assert!(allowed_actions(&today.add_days(offset), &Viewer::Guest, viewport, &today).is_empty());
            }
        }
    }

    #[test]
    fn test_members_create_from_today_on() {
        let today = date("2020-01-15");

        assert!(allowed_actions(&date("2020-01-13"), &member(), Viewport::Wide, &today).is_empty());
        assert!(allowed_actions(&date("2020-01-14"), &member(), Viewport::Wide, &today).is_empty());

        for day in ["2020-01-15", "2020-01-16", "2020-01-17", "2020-02-01"] {
            assert!(
                allowed_actions(&date(day), &member(), Viewport::Wide, &today).contains(&DayAction::CreateSession),
                "create should be allowed on {}",
                day
            );
        }
    }

    #[test]
    fn test_viewport_does_not_change_eligibility() {
        let today = date("2020-01-15");
        for offset in [-1, 0, 1] {
            let day = today.add_days(offset);
            assert_eq!(
                allowed_actions(&day, &member(), Viewport::Narrow, &today),
                allowed_actions(&day, &member(), Viewport::Wide, &today)
            );
        }
    }

    #[test]
    fn test_session_actions_for_owner_attendee_and_others() {
        let today = date("2020-01-15");
        let mut growth_session = session(1, "2020-01-16", "10:00 am");
        growth_session.owner = user(1);
        growth_session.attendees = vec![user(2)];

        let owner = Viewer::Authenticated(user(1));
        let attendee = Viewer::Authenticated(user(2));
        let other = Viewer::Authenticated(user(3));

        assert_eq!(
            allowed_session_actions(&growth_session, &owner, &today),
            BTreeSet::from([SessionAction::Edit, SessionAction::Delete])
        );
        assert_eq!(
            allowed_session_actions(&growth_session, &attendee, &today),
            BTreeSet::from([SessionAction::Leave])
        );
        assert_eq!(
            allowed_session_actions(&growth_session, &other, &today),
            BTreeSet::from([SessionAction::Join])
        );
        assert!(allowed_session_actions(&growth_session, &Viewer::Guest, &today).is_empty());
    }

    #[test]
    fn test_no_joining_full_or_past_sessions() {
        let today = date("2020-01-15");
        let other = Viewer::Authenticated(user(3));

        let mut full = session(1, "2020-01-16", "10:00 am");
        full.attendees = vec![user(2)];
        full.attendee_limit = Some(1);
        assert!(allowed_session_actions(&full, &other, &today).is_empty());

        let mut past = session(2, "2020-01-14", "10:00 am");
        past.attendees = vec![user(3)];
        assert!(allowed_session_actions(&past, &other, &today).is_empty());
        assert!(allowed_session_actions(&session(3, "2020-01-14", "10:00 am"), &other, &today).is_empty());
    }

    #[test]
    fn test_narrow_viewport_shows_only_focus_day() {
        let focus = date("2020-01-15");
        assert!(is_day_visible(&focus, Viewport::Narrow, &focus));
        assert!(!is_day_visible(&focus.add_days(1), Viewport::Narrow, &focus));
        assert!(is_day_visible(&focus.add_days(1), Viewport::Wide, &focus));
    }

    #[test]
    fn test_viewport_from_width() {
        assert_eq!(Viewport::from_width(300.0, 768.0), Viewport::Narrow);
        assert_eq!(Viewport::from_width(768.0, 768.0), Viewport::Wide);
        assert_eq!(Viewport::from_width(1440.0, 768.0), Viewport::Wide);
    }

    #[test]
    fn test_viewer_from_page_user() {
        assert_eq!(Viewer::from_user(None), Viewer::Guest);
        assert!(Viewer::from_user(Some(user(5))).is_authenticated());
        assert_eq!(Viewer::from_user(Some(user(5))).user().map(|u| u.id), Some(5));
    }
}
