//! Error Types
//!
//! Transport/server failures and client-side form rejections.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch rejected (offline, CORS, aborted)
    #[error("network request failed: {0}")]
    Network(String),
    /// Body was not the JSON we expected
    #[error("could not decode response: {0}")]
    Decode(String),
    /// Backend answered with an `error` field or a failing status
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn network(err: JsValue) -> Self {
        ApiError::Network(js_message(&err))
    }

    pub fn decode(err: JsValue) -> Self {
        ApiError::Decode(js_message(&err))
    }

    /// Text suitable for a toast: server messages verbatim, the fallback otherwise
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Client-side rejection raised before any request is made
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please fill in: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("{0} must start with http:// or https://")]
    InvalidUrl(String),
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Amount cannot exceed club balance of ${balance:.2}")]
    ExceedsBalance { balance: f64 },
    #[error("Please enter the verification code")]
    EmptyCode,
    #[error("Please enter a valid 5-digit code")]
    CodeLength,
    #[error("You must confirm this project was worked on during an in-person meeting")]
    InPersonRequired,
    #[error("Club information is unavailable")]
    MissingClub,
    #[error("{0}")]
    NoSelection(String),
}

impl FormError {
    /// Toast title for this rejection
    pub fn title(&self) -> &'static str {
        match self {
            FormError::Missing(_) => "Missing Fields",
            FormError::ExceedsBalance { .. } => "Insufficient Balance",
            FormError::MissingClub => "Error",
            _ => "Validation Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_lists_fields() {
        let err = FormError::Missing(vec!["Title".into(), "Date".into()]);
        assert_eq!(err.to_string(), "Please fill in: Title, Date");
        assert_eq!(err.title(), "Missing Fields");
    }

    #[test]
    fn test_exceeds_balance_message() {
        let err = FormError::ExceedsBalance { balance: 30.0 };
        assert_eq!(err.to_string(), "Amount cannot exceed club balance of $30.00");
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let server = ApiError::Server { status: 400, message: "Content is required".into() };
        assert_eq!(server.user_message("Error creating post"), "Content is required");
        let network = ApiError::Network("offline".into());
        assert_eq!(network.user_message("Error creating post"), "Error creating post");
    }
}
