//! REST Bindings
//!
//! Frontend bindings to the club backend, organized by domain.

mod posts;
mod assignments;
mod meetings;
mod resources;
mod projects;
mod grants;
mod purchases;
mod club;
mod user;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use crate::error::ApiError;
use crate::verification::StepUp;

// Re-export all public items
pub use posts::*;
pub use assignments::*;
pub use meetings::*;
pub use resources::*;
pub use projects::*;
pub use grants::*;
pub use purchases::*;
pub use club::*;
pub use user::*;

pub const API_ROOT: &str = "/api";

// ========================
// Transport
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Path under the per-club namespace
pub fn club_path(club_id: &str, rest: &str) -> String {
    format!("{}/clubs/{}/{}", API_ROOT, club_id, rest)
}

/// HTTP status plus decoded JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    /// The body's `error` string, or a bare failing status
    pub fn server_error(&self) -> Option<ApiError> {
        if let Some(message) = self.body.get("error").and_then(Value::as_str) {
            return Some(ApiError::Server {
                status: self.status,
                message: message.to_string(),
            });
        }
        if self.status >= 400 {
            return Some(ApiError::Server {
                status: self.status,
                message: format!("HTTP {}", self.status),
            });
        }
        None
    }

    /// The array under `key`; a missing key reads as an empty collection
    pub fn into_collection<T: DeserializeOwned>(self, key: &str) -> Result<Vec<T>, ApiError> {
        if let Some(err) = self.server_error() {
            return Err(err);
        }
        let Reply { mut body, .. } = self;
        match body.get_mut(key).map(Value::take) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(items) => Ok(serde_json::from_value(items)?),
        }
    }

    /// The whole body as `T`, unless it carries an error
    pub fn into_object<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if let Some(err) = self.server_error() {
            return Err(err);
        }
        Ok(serde_json::from_value(self.body)?)
    }

    /// Mutation envelope; error fields are classified later, not raised here
    pub fn into_mutation(self) -> Result<MutationReply, ApiError> {
        let mut reply: MutationReply = serde_json::from_value(self.body)?;
        reply.status = self.status;
        Ok(reply)
    }
}

async fn send(method: Method, path: &str, json: Option<String>) -> Result<Reply, ApiError> {
    let init = RequestInit::new();
    init.set_method(method.as_str());
    if let Some(json) = json {
        let headers = Headers::new().map_err(ApiError::network)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(ApiError::network)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&json));
    }
    let request = Request::new_with_str_and_init(path, &init).map_err(ApiError::network)?;
    dispatch(request).await
}

async fn send_form(path: &str, form: &FormData) -> Result<Reply, ApiError> {
    let init = RequestInit::new();
    init.set_method(Method::Post.as_str());
    init.set_body(form);
    let request = Request::new_with_str_and_init(path, &init).map_err(ApiError::network)?;
    dispatch(request).await
}

async fn dispatch(request: Request) -> Result<Reply, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = response.dyn_into().map_err(ApiError::decode)?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(ApiError::decode)?)
        .await
        .map_err(ApiError::decode)?;
    let text = text.as_string().unwrap_or_default();
    let body = serde_json::from_str(&text)?;
    Ok(Reply { status, body })
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    Ok(serde_json::to_string(body)?)
}

pub(crate) async fn get(path: &str) -> Result<Reply, ApiError> {
    log::debug!("[API] GET {}", path);
    send(Method::Get, path, None).await
}

pub(crate) async fn fetch_collection<T: DeserializeOwned>(path: &str, key: &str) -> Result<Vec<T>, ApiError> {
    get(path).await?.into_collection(key)
}

pub(crate) async fn mutate<B: Serialize>(method: Method, path: &str, body: &B) -> Result<MutationReply, ApiError> {
    log::debug!("[API] {} {}", method.as_str(), path);
    send(method, path, Some(encode(body)?)).await?.into_mutation()
}

pub(crate) async fn mutate_empty(method: Method, path: &str) -> Result<MutationReply, ApiError> {
    log::debug!("[API] {} {}", method.as_str(), path);
    send(method, path, None).await?.into_mutation()
}

pub(crate) async fn upload(path: &str, form: &FormData) -> Result<MutationReply, ApiError> {
    log::debug!("[API] POST {} (multipart)", path);
    send_form(path, form).await?.into_mutation()
}

// ========================
// Mutation Replies
// ========================

/// Union of the fields mutation endpoints answer with
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MutationReply {
    #[serde(skip)]
    pub status: u16,
    pub message: Option<String>,
    pub success: Option<bool>,
    pub error: Option<String>,
    pub requires_verification: bool,
    pub verification_email: Option<String>,
    pub email_verified: bool,
    pub new_balance: Option<f64>,
    pub join_code: Option<String>,
    pub url: Option<String>,
}

/// Which field an endpoint uses to say "done"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ack {
    /// `message` present (create/update)
    Message,
    /// `message` or `success: true` (deletes)
    MessageOrSuccess,
    /// `success: true` only
    Success,
    /// no `error` and a non-failing status
    NoError,
}

/// Classified mutation result
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done(Option<String>),
    /// Step-up verification required; carries the address the code goes to
    NeedsVerification(String),
    /// Rejected, with the server's reason when it gave one
    Rejected(Option<String>),
}

impl MutationReply {
    pub fn is_acknowledged(&self, ack: Ack) -> bool {
        match ack {
            Ack::Message => self.message.is_some(),
            Ack::MessageOrSuccess => self.message.is_some() || self.success == Some(true),
            Ack::Success => self.success == Some(true),
            Ack::NoError => self.error.is_none() && self.status < 400,
        }
    }

    pub fn outcome(&self, ack: Ack, step_up: StepUp) -> Outcome {
        if self.requires_verification && step_up == StepUp::Pending {
            if let Some(email) = self.verification_email.clone() {
                return Outcome::NeedsVerification(email);
            }
        }
        if self.is_acknowledged(ack) {
            return Outcome::Done(self.message.clone());
        }
        let reason = match ack {
            // success-flag endpoints report failures in `message`
            Ack::Success => self.error.clone().or_else(|| self.message.clone()),
            _ => self.error.clone(),
        };
        Outcome::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;
    use serde_json::json;

    fn reply(status: u16, body: Value) -> Reply {
        Reply { status, body }
    }

    #[test]
    fn test_collection_extraction() {
        let r = reply(200, json!({"assignments": [
            {"id": 1, "title": "X", "status": "active", "for_all_members": true}
        ]}));
        let items: Vec<Assignment> = r.into_collection("assignments").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "X");
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let items: Vec<Assignment> = reply(200, json!({})).into_collection("assignments").unwrap();
        assert!(items.is_empty());
        let items: Vec<Assignment> = reply(200, json!({"assignments": null})).into_collection("assignments").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_error_body_is_server_error() {
        let err = reply(403, json!({"error": "Unauthorized"}))
            .into_collection::<Assignment>("assignments")
            .unwrap_err();
        assert_eq!(err, ApiError::Server { status: 403, message: "Unauthorized".into() });

        let err = reply(500, json!({})).into_collection::<Assignment>("assignments").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_bad_shape_is_decode_error() {
        let err = reply(200, json!({"assignments": [{"nope": true}]}))
            .into_collection::<Assignment>("assignments")
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_outcome_step_up_required() {
        let r = reply(403, json!({
            "requires_verification": true,
            "verification_email": "lead@example.com",
            "error": "Email verification required"
        }))
        .into_mutation()
        .unwrap();
        assert_eq!(
            r.outcome(Ack::NoError, StepUp::Pending),
            Outcome::NeedsVerification("lead@example.com".into())
        );
        // A replay that is still refused does not loop back into verification
        assert_eq!(
            r.outcome(Ack::NoError, StepUp::Satisfied),
            Outcome::Rejected(Some("Email verification required".into()))
        );
    }

    #[test]
    fn test_outcome_ack_variants() {
        let deleted = reply(200, json!({"success": true})).into_mutation().unwrap();
        assert_eq!(deleted.outcome(Ack::MessageOrSuccess, StepUp::Pending), Outcome::Done(None));
        assert_eq!(deleted.outcome(Ack::Message, StepUp::Pending), Outcome::Rejected(None));

        let refused = reply(200, json!({"success": false, "message": "Cannot remove leader"}))
            .into_mutation()
            .unwrap();
        assert_eq!(
            refused.outcome(Ack::Success, StepUp::Pending),
            Outcome::Rejected(Some("Cannot remove leader".into()))
        );

        let saved = reply(200, json!({"message": "Club settings updated successfully"}))
            .into_mutation()
            .unwrap();
        assert_eq!(
            saved.outcome(Ack::NoError, StepUp::Pending),
            Outcome::Done(Some("Club settings updated successfully".into()))
        );
    }

    #[test]
    fn test_club_path() {
        assert_eq!(club_path("7", "meetings/3"), "/api/clubs/7/meetings/3");
    }
}
