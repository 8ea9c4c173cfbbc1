//! Meeting Bindings

use serde::Serialize;
use crate::error::ApiError;
use crate::models::Meeting;
use super::{club_path, fetch_collection, mutate, mutate_empty, Method, MutationReply};

// ========================
// Argument Structs
// ========================

/// Shared by create (POST) and update (PUT)
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct MeetingArgs {
    pub title: String,
    pub description: String,
    pub meeting_date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub meeting_link: String,
}

impl MeetingArgs {
    /// Form fields pre-filled from an existing meeting
    pub fn from_meeting(meeting: &Meeting) -> Self {
        Self {
            title: meeting.title.clone(),
            description: meeting.description.clone().unwrap_or_default(),
            meeting_date: meeting.meeting_date.clone(),
            start_time: meeting.start_time.clone(),
            end_time: meeting.end_time.clone().unwrap_or_default(),
            location: meeting.location.clone().unwrap_or_default(),
            meeting_link: meeting.meeting_link.clone().unwrap_or_default(),
        }
    }
}

// ========================
// Meeting Commands
// ========================

pub async fn list_meetings(club_id: &str) -> Result<Vec<Meeting>, ApiError> {
    fetch_collection(&club_path(club_id, "meetings"), "meetings").await
}

pub async fn create_meeting(club_id: &str, args: &MeetingArgs) -> Result<MutationReply, ApiError> {
    mutate(Method::Post, &club_path(club_id, "meetings"), args).await
}

pub async fn update_meeting(club_id: &str, meeting_id: u32, args: &MeetingArgs) -> Result<MutationReply, ApiError> {
    mutate(Method::Put, &club_path(club_id, &format!("meetings/{}", meeting_id)), args).await
}

pub async fn delete_meeting(club_id: &str, meeting_id: u32) -> Result<MutationReply, ApiError> {
    mutate_empty(Method::Delete, &club_path(club_id, &format!("meetings/{}", meeting_id))).await
}
