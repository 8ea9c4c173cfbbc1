//! Post Bindings
//!
//! Club stream: list, create, delete.

use serde::Serialize;
use crate::error::ApiError;
use crate::models::Post;
use super::{club_path, fetch_collection, mutate, mutate_empty, Method, MutationReply};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreatePostArgs<'a> {
    pub content: &'a str,
}

// ========================
// Post Commands
// ========================

pub async fn list_posts(club_id: &str) -> Result<Vec<Post>, ApiError> {
    fetch_collection(&club_path(club_id, "posts"), "posts").await
}

pub async fn create_post(club_id: &str, content: &str) -> Result<MutationReply, ApiError> {
    let args = CreatePostArgs { content };
    mutate(Method::Post, &club_path(club_id, "posts"), &args).await
}

pub async fn delete_post(club_id: &str, post_id: u32) -> Result<MutationReply, ApiError> {
    mutate_empty(Method::Delete, &club_path(club_id, &format!("posts/{}", post_id))).await
}
