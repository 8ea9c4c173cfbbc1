//! Grant Bindings
//!
//! Pizza grant submissions and the screenshot upload that precedes them.

use serde::Serialize;
use web_sys::{File, FormData};
use crate::error::ApiError;
use crate::format::hours_from_seconds;
use crate::models::{GrantSubmission, HackatimeProject};
use super::{club_path, fetch_collection, mutate, upload, Method, MutationReply, API_ROOT};

// ========================
// Argument Structs
// ========================

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct GrantApplication {
    pub member_id: String,
    pub project_name: String,
    pub project_hours: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthday: String,
    pub project_description: String,
    pub github_url: String,
    pub live_url: String,
    pub learning: String,
    pub doing_well: String,
    pub improve: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub screenshot_url: String,
    pub is_in_person_meeting: bool,
}

/// Hours claimed for the selected Hackatime project, "0" without one
pub fn project_hours(project: Option<&HackatimeProject>) -> String {
    match project {
        Some(project) => hours_from_seconds(project.total_seconds),
        None => "0".to_string(),
    }
}

// ========================
// Grant Commands
// ========================

pub async fn list_grant_submissions(club_id: &str) -> Result<Vec<GrantSubmission>, ApiError> {
    fetch_collection(&club_path(club_id, "pizza-grants"), "submissions").await
}

pub async fn submit_grant(club_id: &str, app: &GrantApplication) -> Result<MutationReply, ApiError> {
    mutate(Method::Post, &club_path(club_id, "pizza-grants"), app).await
}

/// Upload the screenshot and return its hosted URL
pub async fn upload_screenshot(file: &File) -> Result<String, ApiError> {
    let form = FormData::new().map_err(ApiError::network)?;
    form.append_with_blob("screenshot", file)
        .map_err(ApiError::network)?;
    let reply = upload(&format!("{}/upload-screenshot", API_ROOT), &form).await?;
    screenshot_url(reply)
}

fn screenshot_url(reply: MutationReply) -> Result<String, ApiError> {
    match (reply.success, reply.url) {
        (Some(true), Some(url)) if !url.is_empty() => Ok(url),
        _ => Err(ApiError::Server {
            status: reply.status,
            message: reply
                .error
                .unwrap_or_else(|| "Failed to upload screenshot".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_hours() {
        let project: HackatimeProject = serde_json::from_value(json!({
            "name": "bot", "total_seconds": 5400, "formatted_time": "1h 30m"
        }))
        .unwrap();
        assert_eq!(project_hours(Some(&project)), "1.50");
        assert_eq!(project_hours(None), "0");
    }

    #[test]
    fn test_screenshot_reply() {
        let ok: MutationReply = serde_json::from_value(json!({"success": true, "url": "https://cdn/x.png"})).unwrap();
        assert_eq!(screenshot_url(ok), Ok("https://cdn/x.png".to_string()));

        let refused: MutationReply = serde_json::from_value(json!({"success": false, "error": "Too large"})).unwrap();
        assert_eq!(screenshot_url(refused).unwrap_err().to_string(), "Too large");

        let bare: MutationReply = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(screenshot_url(bare).unwrap_err().to_string(), "Failed to upload screenshot");
    }
}
