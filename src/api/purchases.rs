//! Purchase Bindings
//!
//! Shop purchase requests and the club balance they draw from.

use serde::Serialize;
use crate::error::ApiError;
use crate::models::{ClubBalance, PurchaseRequest};
use super::{club_path, fetch_collection, get, mutate, Method, MutationReply};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PurchaseArgs {
    pub leader_first_name: String,
    pub leader_last_name: String,
    pub leader_email: String,
    pub purchase_type: String,
    pub description: String,
    pub reason: String,
    pub fulfillment_method: String,
    pub amount: f64,
    pub club_name: String,
}

pub async fn list_purchase_requests(club_id: &str) -> Result<Vec<PurchaseRequest>, ApiError> {
    fetch_collection(&club_path(club_id, "purchase-requests"), "requests").await
}

pub async fn create_purchase_request(club_id: &str, args: &PurchaseArgs) -> Result<MutationReply, ApiError> {
    mutate(Method::Post, &club_path(club_id, "purchase-requests"), args).await
}

pub async fn club_balance(club_id: &str) -> Result<ClubBalance, ApiError> {
    get(&club_path(club_id, "balance")).await?.into_object()
}
