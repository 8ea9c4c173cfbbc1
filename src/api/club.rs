//! Club Bindings
//!
//! Club info, settings, join code, membership and leadership commands.

use serde::Serialize;
use crate::error::ApiError;
use crate::models::ClubInfo;
use crate::verification::{SettingsInput, StepRequest, StepUp};
use super::{club_path, get, mutate, mutate_empty, Method, MutationReply};

// ========================
// Argument Structs
// ========================

#[derive(Serialize, Debug, PartialEq)]
pub struct SettingsArgs<'a> {
    #[serde(flatten)]
    pub settings: &'a SettingsInput,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub email_verified: bool,
}

#[derive(Serialize)]
struct UserIdArgs {
    user_id: u32,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct VerifiedUserArgs {
    pub user_id: u32,
    pub email_verified: bool,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct VerifiedArgs {
    pub email_verified: bool,
}

#[derive(Serialize)]
struct TransferArgs {
    new_leader_id: u32,
}

// ========================
// Club Commands
// ========================

pub async fn club_info(club_id: &str) -> Result<ClubInfo, ApiError> {
    get(&club_path(club_id, "info")).await?.into_object()
}

pub async fn regenerate_join_code(club_id: &str) -> Result<MutationReply, ApiError> {
    mutate_empty(Method::Post, &club_path(club_id, "join-code")).await
}

pub async fn update_settings(club_id: &str, settings: &SettingsInput, step_up: StepUp) -> Result<MutationReply, ApiError> {
    let args = SettingsArgs {
        settings,
        email_verified: step_up.is_satisfied(),
    };
    mutate(Method::Put, &club_path(club_id, "settings"), &args).await
}

/// One step of the emailed-code protocol
pub async fn verification_step(request: &StepRequest) -> Result<MutationReply, ApiError> {
    mutate(Method::Put, &request.endpoint, &request.step).await
}

pub async fn transfer_leadership(club_id: &str, new_leader_id: u32) -> Result<MutationReply, ApiError> {
    let args = TransferArgs { new_leader_id };
    mutate(Method::Post, &club_path(club_id, "transfer-leadership"), &args).await
}

// ========================
// Membership Commands
// ========================

pub async fn remove_member(club_id: &str, user_id: u32) -> Result<MutationReply, ApiError> {
    mutate_empty(Method::Delete, &club_path(club_id, &format!("members/{}", user_id))).await
}

pub async fn assign_co_leader(club_id: &str, user_id: u32) -> Result<MutationReply, ApiError> {
    mutate(Method::Post, &club_path(club_id, "co-leader"), &UserIdArgs { user_id }).await
}

pub async fn revoke_co_leader(club_id: &str) -> Result<MutationReply, ApiError> {
    mutate_empty(Method::Delete, &club_path(club_id, "co-leader")).await
}

pub async fn make_co_leader(club_id: &str, user_id: u32, step_up: StepUp) -> Result<MutationReply, ApiError> {
    let args = VerifiedUserArgs {
        user_id,
        email_verified: step_up.is_satisfied(),
    };
    mutate(Method::Post, &club_path(club_id, "make-co-leader"), &args).await
}

pub async fn remove_co_leader(club_id: &str, step_up: StepUp) -> Result<MutationReply, ApiError> {
    let args = VerifiedArgs {
        email_verified: step_up.is_satisfied(),
    };
    mutate(Method::Post, &club_path(club_id, "remove-co-leader"), &args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_body_adds_flag_only_when_verified() {
        let settings = SettingsInput::new("Robotics", "Bots", "Room 4");
        let plain = SettingsArgs { settings: &settings, email_verified: false };
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({"name": "Robotics", "description": "Bots", "location": "Room 4"})
        );
        let verified = SettingsArgs { settings: &settings, email_verified: true };
        assert_eq!(serde_json::to_value(&verified).unwrap()["email_verified"], json!(true));
    }

    #[test]
    fn test_co_leader_bodies() {
        let args = VerifiedUserArgs { user_id: 9, email_verified: false };
        assert_eq!(serde_json::to_value(&args).unwrap(), json!({"user_id": 9, "email_verified": false}));
        let args = VerifiedArgs { email_verified: true };
        assert_eq!(serde_json::to_value(&args).unwrap(), json!({"email_verified": true}));
    }
}
