//! Assignment Bindings

use serde::Serialize;
use crate::error::ApiError;
use crate::models::Assignment;
use super::{club_path, fetch_collection, mutate, mutate_empty, Method, MutationReply};

// ========================
// Argument Structs
// ========================

#[derive(Serialize, Debug, PartialEq)]
pub struct CreateAssignmentArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// null when the date input is blank
    pub due_date: Option<&'a str>,
    pub for_all_members: bool,
}

impl<'a> CreateAssignmentArgs<'a> {
    pub fn new(title: &'a str, description: &'a str, due_date: &'a str, for_all_members: bool) -> Self {
        let due_date = due_date.trim();
        Self {
            title: title.trim(),
            description: description.trim(),
            due_date: (!due_date.is_empty()).then_some(due_date),
            for_all_members,
        }
    }
}

// ========================
// Assignment Commands
// ========================

pub async fn list_assignments(club_id: &str) -> Result<Vec<Assignment>, ApiError> {
    fetch_collection(&club_path(club_id, "assignments"), "assignments").await
}

pub async fn create_assignment(club_id: &str, args: &CreateAssignmentArgs<'_>) -> Result<MutationReply, ApiError> {
    mutate(Method::Post, &club_path(club_id, "assignments"), args).await
}

pub async fn delete_assignment(club_id: &str, assignment_id: u32) -> Result<MutationReply, ApiError> {
    mutate_empty(Method::Delete, &club_path(club_id, &format!("assignments/{}", assignment_id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_due_date_is_null() {
        let args = CreateAssignmentArgs::new("Build a bot", "Use Rust", "  ", true);
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"title": "Build a bot", "description": "Use Rust", "due_date": null, "for_all_members": true})
        );
        let dated = CreateAssignmentArgs::new("T", "D", "2024-06-01", false);
        assert_eq!(dated.due_date, Some("2024-06-01"));
    }
}
