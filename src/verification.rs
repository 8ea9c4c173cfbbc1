//! Step-Up Email Verification
//!
//! State machine for the emailed one-time code that gates sensitive club
//! mutations. The flow holds a single pending action; starting a second
//! protected action while one is pending replaces it.
//!
//! ```text
//! Idle --begin--> CodeSent --accept--> Verified --finish--> Idle (replay)
//!                  |  ^ resend / wrong code
//!                  +--+
//! ```

use serde::Serialize;

use crate::api::{club_path, MutationReply};
use crate::error::FormError;

pub const VERIFICATION_CODE_LEN: usize = 5;

/// Pause between a successful verify and the replay, so the success notice is readable
pub const REPLAY_DELAY_MS: u32 = 1500;

/// Whether the caller has already passed step-up for this invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepUp {
    Pending,
    Satisfied,
}

impl StepUp {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, StepUp::Satisfied)
    }
}

/// Club settings as submitted, already trimmed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SettingsInput {
    pub name: String,
    pub description: String,
    pub location: String,
}

impl SettingsInput {
    pub fn new(name: &str, description: &str, location: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            location: location.trim().to_string(),
        }
    }
}

/// Mutations gated by step-up, with the parameters needed to replay them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtectedAction {
    UpdateSettings(SettingsInput),
    MakeCoLeader { user_id: u32 },
    RemoveCoLeader,
}

impl ProtectedAction {
    /// Endpoint that both performs the action and runs its verification steps
    pub fn endpoint(&self, club_id: &str) -> String {
        let rest = match self {
            ProtectedAction::UpdateSettings(_) => "settings",
            ProtectedAction::MakeCoLeader { .. } => "make-co-leader",
            ProtectedAction::RemoveCoLeader => "remove-co-leader",
        };
        club_path(club_id, rest)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ProtectedAction::UpdateSettings(_) => "update club settings",
            ProtectedAction::MakeCoLeader { .. } => "make co-leader",
            ProtectedAction::RemoveCoLeader => "remove co-leader",
        }
    }
}

/// Body of a verification request (`PUT <endpoint>`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum VerificationStep {
    SendVerification { email: String },
    VerifyEmail { verification_code: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRequest {
    pub endpoint: String,
    pub step: VerificationStep,
}

/// Inline message under the code input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VerificationState {
    #[default]
    Idle,
    CodeSent {
        action: ProtectedAction,
        email: String,
        endpoint: String,
    },
    /// Accepted; waiting out the replay delay
    Verified { action: ProtectedAction, email: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationFlow {
    pub state: VerificationState,
    /// A send-code or verify request is in flight
    pub busy: bool,
    pub notice: Option<Notice>,
}

impl VerificationFlow {
    pub fn is_open(&self) -> bool {
        !matches!(self.state, VerificationState::Idle)
    }

    pub fn email(&self) -> Option<&str> {
        match &self.state {
            VerificationState::CodeSent { email, .. } | VerificationState::Verified { email, .. } => Some(email.as_str()),
            VerificationState::Idle => None,
        }
    }

    /// Enter CodeSent for `action` and produce the initial send-code request
    pub fn begin(&mut self, action: ProtectedAction, email: String, club_id: &str) -> StepRequest {
        if let Some(previous) = self.pending_action() {
            log::warn!(
                "[VERIFY] '{}' replaces pending '{}'",
                action.describe(),
                previous.describe()
            );
        }
        let endpoint = action.endpoint(club_id);
        let request = StepRequest {
            endpoint: endpoint.clone(),
            step: VerificationStep::SendVerification { email: email.clone() },
        };
        self.state = VerificationState::CodeSent { action, email, endpoint };
        self.busy = true;
        self.notice = None;
        request
    }

    /// Same send-code request for the stored email
    pub fn resend(&mut self) -> Option<StepRequest> {
        if self.busy {
            return None;
        }
        let VerificationState::CodeSent { email, endpoint, .. } = &self.state else {
            return None;
        };
        let request = StepRequest {
            endpoint: endpoint.clone(),
            step: VerificationStep::SendVerification { email: email.clone() },
        };
        self.busy = true;
        self.notice = None;
        Some(request)
    }

    /// Verify request for `code`, or a local rejection that issues nothing
    pub fn submit_code(&mut self, code: &str) -> Result<Option<StepRequest>, FormError> {
        if self.busy {
            return Ok(None);
        }
        let VerificationState::CodeSent { endpoint, .. } = &self.state else {
            return Ok(None);
        };
        let code = code.trim();
        let rejection = if code.is_empty() {
            Some(FormError::EmptyCode)
        } else if code.chars().count() != VERIFICATION_CODE_LEN {
            Some(FormError::CodeLength)
        } else {
            None
        };
        if let Some(err) = rejection {
            self.notice = Some(Notice::Error(err.to_string()));
            return Err(err);
        }
        let request = StepRequest {
            endpoint: endpoint.clone(),
            step: VerificationStep::VerifyEmail {
                verification_code: code.to_string(),
            },
        };
        self.busy = true;
        self.notice = None;
        Ok(Some(request))
    }

    /// Result of a send-code request
    pub fn code_sent(&mut self, reply: Result<&MutationReply, ()>) {
        if !matches!(self.state, VerificationState::CodeSent { .. }) {
            return;
        }
        self.busy = false;
        self.notice = Some(match reply {
            Ok(reply) if reply.success == Some(true) => Notice::Success(
                reply
                    .message
                    .clone()
                    .unwrap_or_else(|| "Verification code sent".to_string()),
            ),
            Ok(reply) => Notice::Error(
                reply
                    .error
                    .clone()
                    .unwrap_or_else(|| "Failed to send verification code".to_string()),
            ),
            Err(()) => Notice::Error("Failed to send verification code".to_string()),
        });
    }

    /// Result of a verify request; true when the action should be replayed
    ///
    /// On acceptance the flow moves to Verified and stays busy until `finish`.
    pub fn accept(&mut self, reply: Result<&MutationReply, ()>) -> bool {
        let (action, email) = match &self.state {
            VerificationState::CodeSent { action, email, .. } => (action.clone(), email.clone()),
            _ => return false,
        };
        match reply {
            Ok(reply) if reply.success == Some(true) && reply.email_verified => {
                self.notice = Some(Notice::Success(
                    reply
                        .message
                        .clone()
                        .unwrap_or_else(|| "Email verified".to_string()),
                ));
                self.state = VerificationState::Verified { action, email };
                true
            }
            Ok(reply) => {
                self.busy = false;
                self.notice = Some(Notice::Error(
                    reply
                        .error
                        .clone()
                        .unwrap_or_else(|| "Verification failed".to_string()),
                ));
                false
            }
            Err(()) => {
                self.busy = false;
                self.notice = Some(Notice::Error("Verification failed".to_string()));
                false
            }
        }
    }

    /// Close after the replay delay, handing back the action to replay
    ///
    /// Returns None when the flow was cancelled or restarted meanwhile.
    pub fn finish(&mut self) -> Option<ProtectedAction> {
        match std::mem::take(&mut self.state) {
            VerificationState::Verified { action, .. } => {
                self.busy = false;
                self.notice = None;
                Some(action)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.state = VerificationState::Idle;
        self.busy = false;
        self.notice = None;
    }

    fn pending_action(&self) -> Option<&ProtectedAction> {
        match &self.state {
            VerificationState::Idle => None,
            VerificationState::CodeSent { action, .. } => Some(action),
            VerificationState::Verified { action, .. } => Some(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> ProtectedAction {
        ProtectedAction::UpdateSettings(SettingsInput::new(" Robotics ", "Builds bots", " Room 4 "))
    }

    fn reply(value: serde_json::Value) -> MutationReply {
        serde_json::from_value(value).unwrap()
    }

    fn sent(flow: &mut VerificationFlow) {
        flow.code_sent(Ok(&reply(json!({"success": true, "message": "Code sent"}))));
    }

    #[test]
    fn test_begin_addresses_verification_email() {
        let mut flow = VerificationFlow::default();
        let request = flow.begin(settings(), "lead@example.com".into(), "7");
        assert_eq!(request.endpoint, "/api/clubs/7/settings");
        assert_eq!(
            request.step,
            VerificationStep::SendVerification { email: "lead@example.com".into() }
        );
        assert!(flow.is_open());
        assert!(flow.busy);
        assert_eq!(flow.email(), Some("lead@example.com"));
    }

    #[test]
    fn test_step_body_shape() {
        let body = serde_json::to_value(VerificationStep::SendVerification { email: "a@b.c".into() }).unwrap();
        assert_eq!(body, json!({"step": "send_verification", "email": "a@b.c"}));
        let body = serde_json::to_value(VerificationStep::VerifyEmail { verification_code: "12345".into() }).unwrap();
        assert_eq!(body, json!({"step": "verify_email", "verification_code": "12345"}));
    }

    #[test]
    fn test_code_length_rejected_locally() {
        let mut flow = VerificationFlow::default();
        flow.begin(settings(), "lead@example.com".into(), "7");
        sent(&mut flow);

        assert_eq!(flow.submit_code("1234"), Err(FormError::CodeLength));
        assert_eq!(flow.submit_code("123456"), Err(FormError::CodeLength));
        assert_eq!(flow.submit_code("   "), Err(FormError::EmptyCode));
        assert!(!flow.busy);
        assert_eq!(
            flow.notice,
            Some(Notice::Error("Please enter the verification code".into()))
        );

        let request = flow.submit_code(" 12345 ").unwrap().unwrap();
        assert_eq!(
            request.step,
            VerificationStep::VerifyEmail { verification_code: "12345".into() }
        );
        assert!(flow.busy);
    }

    #[test]
    fn test_busy_blocks_resend_and_verify() {
        let mut flow = VerificationFlow::default();
        flow.begin(settings(), "lead@example.com".into(), "7");
        assert_eq!(flow.resend(), None);
        assert_eq!(flow.submit_code("12345"), Ok(None));
        sent(&mut flow);
        assert!(flow.resend().is_some());
    }

    #[test]
    fn test_successful_verification_replays_deferred_action() {
        let mut flow = VerificationFlow::default();
        let action = ProtectedAction::MakeCoLeader { user_id: 42 };
        flow.begin(action.clone(), "lead@example.com".into(), "7");
        sent(&mut flow);
        flow.submit_code("12345").unwrap();

        let ok = flow.accept(Ok(&reply(json!({
            "success": true, "email_verified": true, "message": "Email verified successfully"
        }))));
        assert!(ok);
        assert_eq!(flow.notice, Some(Notice::Success("Email verified successfully".into())));
        assert!(flow.is_open());
        // still shown while the replay is pending
        assert_eq!(flow.email(), Some("lead@example.com"));

        assert_eq!(flow.finish(), Some(action));
        assert_eq!(flow.state, VerificationState::Idle);
        assert!(!flow.busy);
    }

    #[test]
    fn test_wrong_code_stays_in_code_sent() {
        let mut flow = VerificationFlow::default();
        flow.begin(ProtectedAction::RemoveCoLeader, "lead@example.com".into(), "7");
        sent(&mut flow);
        flow.submit_code("99999").unwrap();

        assert!(!flow.accept(Ok(&reply(json!({"error": "Invalid or expired code"})))));
        assert_eq!(flow.notice, Some(Notice::Error("Invalid or expired code".into())));
        assert_eq!(flow.email(), Some("lead@example.com"));

        flow.submit_code("99999").unwrap();
        assert!(!flow.accept(Err(())));
        assert_eq!(flow.notice, Some(Notice::Error("Verification failed".into())));
        assert!(!flow.busy);
        assert_eq!(flow.finish(), None);
    }

    #[test]
    fn test_success_without_verified_flag_is_failure() {
        let mut flow = VerificationFlow::default();
        flow.begin(ProtectedAction::RemoveCoLeader, "lead@example.com".into(), "7");
        sent(&mut flow);
        flow.submit_code("12345").unwrap();
        assert!(!flow.accept(Ok(&reply(json!({"success": true})))));
        assert!(matches!(flow.state, VerificationState::CodeSent { .. }));
    }

    #[test]
    fn test_second_action_replaces_pending() {
        let mut flow = VerificationFlow::default();
        flow.begin(settings(), "lead@example.com".into(), "7");
        let request = flow.begin(ProtectedAction::RemoveCoLeader, "other@example.com".into(), "7");
        assert_eq!(request.endpoint, "/api/clubs/7/remove-co-leader");
        match &flow.state {
            VerificationState::CodeSent { action, email, .. } => {
                assert_eq!(action, &ProtectedAction::RemoveCoLeader);
                assert_eq!(email, "other@example.com");
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_cancel_during_replay_delay_drops_action() {
        let mut flow = VerificationFlow::default();
        flow.begin(settings(), "lead@example.com".into(), "7");
        sent(&mut flow);
        flow.submit_code("12345").unwrap();
        assert!(flow.accept(Ok(&reply(json!({"success": true, "email_verified": true})))));
        flow.cancel();
        assert_eq!(flow.finish(), None);
        assert!(!flow.is_open());
    }

    #[test]
    fn test_late_send_reply_after_cancel_is_ignored() {
        let mut flow = VerificationFlow::default();
        flow.begin(settings(), "lead@example.com".into(), "7");
        flow.cancel();
        sent(&mut flow);
        assert_eq!(flow, VerificationFlow::default());
    }

    #[test]
    fn test_send_failure_notice() {
        let mut flow = VerificationFlow::default();
        flow.begin(settings(), "lead@example.com".into(), "7");
        flow.code_sent(Err(()));
        assert_eq!(
            flow.notice,
            Some(Notice::Error("Failed to send verification code".into()))
        );
    }

    #[test]
    fn test_settings_input_trimmed() {
        let input = SettingsInput::new(" Robotics ", " ", " Room 4 ");
        assert_eq!(input.name, "Robotics");
        assert_eq!(input.description, "");
        assert_eq!(input.location, "Room 4");
    }
}
