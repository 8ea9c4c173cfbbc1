//! Resource Bindings

use serde::Serialize;
use crate::error::ApiError;
use crate::models::{Resource, DEFAULT_RESOURCE_ICON};
use super::{club_path, fetch_collection, mutate, mutate_empty, Method, MutationReply};

// ========================
// Argument Structs
// ========================

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ResourceArgs {
    pub title: String,
    pub url: String,
    pub description: String,
    pub icon: String,
}

impl Default for ResourceArgs {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: String::new(),
            description: String::new(),
            icon: DEFAULT_RESOURCE_ICON.to_string(),
        }
    }
}

impl ResourceArgs {
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            title: resource.title.clone(),
            url: resource.url.clone(),
            description: resource.description.clone().unwrap_or_default(),
            icon: resource.icon.clone(),
        }
    }
}

// ========================
// Resource Commands
// ========================

pub async fn list_resources(club_id: &str) -> Result<Vec<Resource>, ApiError> {
    fetch_collection(&club_path(club_id, "resources"), "resources").await
}

pub async fn create_resource(club_id: &str, args: &ResourceArgs) -> Result<MutationReply, ApiError> {
    mutate(Method::Post, &club_path(club_id, "resources"), args).await
}

pub async fn update_resource(club_id: &str, resource_id: u32, args: &ResourceArgs) -> Result<MutationReply, ApiError> {
    mutate(Method::Put, &club_path(club_id, &format!("resources/{}", resource_id)), args).await
}

pub async fn delete_resource(club_id: &str, resource_id: u32) -> Result<MutationReply, ApiError> {
    mutate_empty(Method::Delete, &club_path(club_id, &format!("resources/{}", resource_id))).await
}
