//! Project Bindings

use crate::error::ApiError;
use crate::models::Project;
use super::{club_path, fetch_collection};

pub async fn list_projects(club_id: &str) -> Result<Vec<Project>, ApiError> {
    fetch_collection(&club_path(club_id, "projects"), "projects").await
}
