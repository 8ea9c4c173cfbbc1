//! User Bindings
//!
//! Member lookups that feed the grant form.

use crate::error::ApiError;
use crate::models::{HackatimeProjects, MemberProfile};
use super::{get, API_ROOT};

pub async fn member_profile(user_id: &str) -> Result<MemberProfile, ApiError> {
    get(&format!("{}/user/{}", API_ROOT, user_id)).await?.into_object()
}

pub async fn hackatime_projects(user_id: &str) -> Result<HackatimeProjects, ApiError> {
    get(&format!("{}/hackatime/projects/{}", API_ROOT, user_id)).await?.into_object()
}
