//! Frontend Models
//!
//! Data structures matching backend JSON records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a string or a number and keep its display text
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept a number or a numeric string ("$12.50" included)
pub(crate) fn loose_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_start_matches('$').parse().ok(),
        _ => None,
    })
}

/// Icon for resources saved without one; also the form's preselected choice
pub const DEFAULT_RESOURCE_ICON: &str = "book";

fn default_icon() -> String {
    DEFAULT_RESOURCE_ICON.to_string()
}

// ========================
// Stream
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(default)]
    pub id: u32,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub content: String,
    pub created_at: String,
    pub user: PostAuthor,
}

// ========================
// Assignments
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub for_all_members: bool,
    #[serde(default)]
    pub status: String,
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

// ========================
// Meetings
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub meeting_date: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
}

// ========================
// Resources
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
}

// ========================
// Projects
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOwner {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: ProjectOwner,
    pub updated_at: String,
    #[serde(default)]
    pub featured: bool,
}

// ========================
// Grants & Purchases
// ========================

/// Review state shared by grant submissions and purchase requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
    Fulfilled,
}

impl ReviewStatus {
    /// Unknown or missing values read as Pending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Approved") => ReviewStatus::Approved,
            Some("Rejected") => ReviewStatus::Rejected,
            Some("Fulfilled") => ReviewStatus::Fulfilled,
            _ => ReviewStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
            ReviewStatus::Fulfilled => "Fulfilled",
        }
    }

    /// Badge class suffix
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "status-badge pending",
            ReviewStatus::Approved => "status-badge approved",
            ReviewStatus::Rejected => "status-badge rejected",
            ReviewStatus::Fulfilled => "status-badge fulfilled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantSubmission {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub grant_amount: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub hours: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
    #[serde(default)]
    pub playable_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl GrantSubmission {
    pub fn review_status(&self) -> ReviewStatus {
        ReviewStatus::parse(self.status.as_deref())
    }

    /// Full name when both parts exist, else the GitHub handle
    pub fn submitter(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                format!("{} {}", first, last)
            }
            _ => self
                .github_username
                .clone()
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub purchase_type: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose_f64")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub fulfillment_method: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PurchaseRequest {
    pub fn review_status(&self) -> ReviewStatus {
        ReviewStatus::parse(self.status.as_deref())
    }
}

// ========================
// Members & Club
// ========================

/// Club role as reported by the info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberRole {
    Leader,
    CoLeader,
    #[serde(other)]
    Member,
}

impl MemberRole {
    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Leader => "Leader",
            MemberRole::CoLeader => "Co-Leader",
            MemberRole::Member => "Member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: MemberRole,
    #[serde(default)]
    pub joined_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub join_code: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub is_leader: bool,
}

/// Club balance snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubBalance {
    pub balance: f64,
    #[serde(default)]
    pub club_name: Option<String>,
}

/// Member profile used to prefill the grant form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackatimeProject {
    pub name: String,
    #[serde(default)]
    pub total_seconds: f64,
    #[serde(default)]
    pub formatted_time: String,
    #[serde(default)]
    pub percent: Option<f64>,
}

/// Hackatime lookup reply (username plus projects)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HackatimeProjects {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub projects: Vec<HackatimeProject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignment_defaults_and_active() {
        let a: Assignment = serde_json::from_value(json!({
            "id": 1, "title": "X", "status": "active", "for_all_members": true
        }))
        .unwrap();
        assert!(a.is_active());
        assert!(a.due_date.is_none());
        assert_eq!(a.description, "");

        let b: Assignment = serde_json::from_value(json!({"id": 2, "title": "Y", "status": "closed"})).unwrap();
        assert!(!b.is_active());
    }

    #[test]
    fn test_grant_submission_loose_fields() {
        let s: GrantSubmission = serde_json::from_value(json!({
            "project_name": "Game",
            "grant_amount": "$10",
            "hours": 3.5,
            "github_username": "octo"
        }))
        .unwrap();
        assert_eq!(s.grant_amount.as_deref(), Some("$10"));
        assert_eq!(s.hours.as_deref(), Some("3.5"));
        assert_eq!(s.submitter(), "octo");
        assert_eq!(s.review_status(), ReviewStatus::Pending);
    }

    #[test]
    fn test_submitter_prefers_full_name() {
        let s: GrantSubmission = serde_json::from_value(json!({
            "first_name": "Ada", "last_name": "Lovelace", "github_username": "ada"
        }))
        .unwrap();
        assert_eq!(s.submitter(), "Ada Lovelace");

        let anon: GrantSubmission = serde_json::from_value(json!({})).unwrap();
        assert_eq!(anon.submitter(), "Unknown");
    }

    #[test]
    fn test_purchase_amount_from_string() {
        let p: PurchaseRequest = serde_json::from_value(json!({
            "purchase_type": "Pizza", "amount": "25.5", "status": "Fulfilled"
        }))
        .unwrap();
        assert_eq!(p.amount, Some(25.5));
        assert_eq!(p.review_status(), ReviewStatus::Fulfilled);
    }

    #[test]
    fn test_member_role_parsing() {
        let m: Member = serde_json::from_value(json!({
            "id": 4, "username": "sam", "role": "co-leader"
        }))
        .unwrap();
        assert_eq!(m.role, MemberRole::CoLeader);

        let other: Member = serde_json::from_value(json!({
            "id": 5, "username": "kim", "role": "member"
        }))
        .unwrap();
        assert_eq!(other.role, MemberRole::Member);
    }

    #[test]
    fn test_resource_default_icon() {
        let r: Resource = serde_json::from_value(json!({
            "id": 1, "title": "Docs", "url": "https://example.com"
        }))
        .unwrap();
        assert_eq!(r.icon, DEFAULT_RESOURCE_ICON);
        assert_eq!(r.icon, crate::api::ResourceArgs::default().icon);
    }
}
