//! Section Loading
//!
//! What a section container shows after a fetch, and the counts its badges read.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::format::{parse_date, same_month};
use crate::models::{Assignment, Meeting};

/// Contents of a section container
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    /// Nothing fetched yet
    #[default]
    NotLoaded,
    /// No club id on the page; no request was made
    Unavailable,
    Ready(Vec<T>),
}

/// What a section container renders for its current state
#[derive(Clone, Debug, PartialEq)]
pub enum ViewPlan<T> {
    Blank,
    /// `Error: Club information is unavailable ...`
    Unavailable,
    /// A single empty-state placeholder
    Placeholder,
    /// One card per item, never empty
    Cards(Vec<T>),
}

impl<T> LoadState<T> {
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn into_plan(self) -> ViewPlan<T> {
        match self {
            LoadState::NotLoaded => ViewPlan::Blank,
            LoadState::Unavailable => ViewPlan::Unavailable,
            LoadState::Ready(items) if items.is_empty() => ViewPlan::Placeholder,
            LoadState::Ready(items) => ViewPlan::Cards(items),
        }
    }

    /// New state after a fetch; failures leave the previous contents in place
    pub fn apply_result(self, result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => LoadState::Ready(items),
            Err(_) => self,
        }
    }
}

/// Next step of a section loader after its reload version changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchPlan {
    /// Never asked to load
    Idle,
    /// No club id on the page; show the unavailable message without a request
    Unavailable,
    Fetch { club_id: String },
}

pub fn plan_fetch(version: u32, club_id: Option<String>) -> FetchPlan {
    match (version, club_id) {
        (0, _) => FetchPlan::Idle,
        (_, None) => FetchPlan::Unavailable,
        (_, Some(club_id)) => FetchPlan::Fetch { club_id },
    }
}

pub fn active_assignments(items: &[Assignment]) -> usize {
    items.iter().filter(|a| a.is_active()).count()
}

/// Meetings dated in `today`'s calendar month and year
pub fn meetings_in_month(items: &[Meeting], today: NaiveDate) -> usize {
    items
        .iter()
        .filter_map(|m| parse_date(&m.meeting_date))
        .filter(|date| same_month(*date, today))
        .count()
}

/// Inline text shown when a section cannot load without a club id
pub fn unavailable_message(noun: &str) -> String {
    format!("Error: Club information is unavailable to load {}.", noun)
}

/// Leader-only controls on a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardActions {
    pub can_delete: bool,
    pub can_edit: bool,
}

impl CardActions {
    pub fn new(is_leader: bool, editable: bool) -> Self {
        Self {
            can_delete: is_leader,
            can_edit: is_leader && editable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Reply;
    use serde_json::json;

    fn meeting(id: u32, date: &str) -> Meeting {
        Meeting {
            id,
            title: format!("Meeting {}", id),
            description: None,
            meeting_date: date.to_string(),
            start_time: "15:00".to_string(),
            end_time: None,
            location: None,
            meeting_link: None,
        }
    }

    #[test]
    fn test_assignments_example_renders_one_card() {
        let reply = Reply {
            status: 200,
            body: json!({"assignments": [
                {"id": 1, "title": "X", "status": "active", "for_all_members": true}
            ]}),
        };
        let state = LoadState::NotLoaded.apply_result(reply.into_collection::<Assignment>("assignments"));
        assert_eq!(active_assignments(state.items()), 1);
        match state.into_plan() {
            ViewPlan::Cards(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].title, "X");
            }
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_empty_collection_one_placeholder_zero_count() {
        let state: LoadState<Assignment> = LoadState::NotLoaded.apply_result(Ok(vec![]));
        assert_eq!(active_assignments(state.items()), 0);
        assert_eq!(state.into_plan(), ViewPlan::Placeholder);

        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let meetings: LoadState<Meeting> = LoadState::NotLoaded.apply_result(Ok(vec![]));
        assert_eq!(meetings_in_month(meetings.items(), today), 0);
        assert_eq!(meetings.into_plan(), ViewPlan::Placeholder);
    }

    #[test]
    fn test_failure_keeps_previous_content() {
        let before = LoadState::Ready(vec![meeting(1, "2024-05-02")]);
        let after = before
            .clone()
            .apply_result(Err(ApiError::Network("offline".into())));
        assert_eq!(after, before);

        let untouched: LoadState<Meeting> =
            LoadState::NotLoaded.apply_result(Err(ApiError::Decode("bad".into())));
        assert_eq!(untouched, LoadState::NotLoaded);
        assert_eq!(untouched.into_plan(), ViewPlan::Blank);
    }

    #[test]
    fn test_meetings_counted_in_current_month_only() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let items = vec![
            meeting(1, "2024-05-01"),
            meeting(2, "2024-05-31T18:00:00"),
            meeting(3, "2024-06-01"),
            meeting(4, "2023-05-10"),
            meeting(5, "someday"),
        ];
        assert_eq!(meetings_in_month(&items, today), 2);
        assert!(matches!(LoadState::Ready(items).into_plan(), ViewPlan::Cards(cards) if cards.len() == 5));
    }

    #[test]
    fn test_active_assignments_ignores_others() {
        let items: Vec<Assignment> = serde_json::from_value(json!([
            {"id": 1, "title": "A", "status": "active"},
            {"id": 2, "title": "B", "status": "completed"},
            {"id": 3, "title": "C", "status": "active"}
        ]))
        .unwrap();
        assert_eq!(active_assignments(&items), 2);
    }

    #[test]
    fn test_leader_controls() {
        assert_eq!(CardActions::new(true, true), CardActions { can_delete: true, can_edit: true });
        assert_eq!(CardActions::new(true, false), CardActions { can_delete: true, can_edit: false });
        assert_eq!(CardActions::new(false, true), CardActions { can_delete: false, can_edit: false });
    }

    #[test]
    fn test_unavailable_message() {
        assert_eq!(
            unavailable_message("assignments"),
            "Error: Club information is unavailable to load assignments."
        );
        let state: LoadState<Meeting> = LoadState::Unavailable;
        assert_eq!(state.into_plan(), ViewPlan::Unavailable);
    }

    #[test]
    fn test_plan_fetch() {
        assert_eq!(plan_fetch(0, Some("7".into())), FetchPlan::Idle);
        assert_eq!(plan_fetch(0, None), FetchPlan::Idle);
        assert_eq!(plan_fetch(1, None), FetchPlan::Unavailable);
        assert_eq!(plan_fetch(3, Some("7".into())), FetchPlan::Fetch { club_id: "7".into() });
    }
}
