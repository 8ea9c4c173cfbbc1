//! Protected Actions
//!
//! Runs step-up gated mutations, drives the emailed-code requests and replays
//! the deferred action once the code is accepted.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Ack, Outcome};
use crate::context::AppContext;
use crate::error::FormError;
use crate::navigation::Section;
use crate::store::{store_set_club_name, DashboardStore};
use crate::toast;
use crate::verification::{ProtectedAction, StepRequest, StepUp, REPLAY_DELAY_MS};

/// Run `action`, opening the verification flow if the backend asks for it
pub async fn run_protected(ctx: AppContext, store: DashboardStore, action: ProtectedAction, step_up: StepUp) {
    let Some(club_id) = ctx.club_id() else {
        toast::form_error(&FormError::MissingClub);
        return;
    };

    let (result, ack, fallback) = match &action {
        ProtectedAction::UpdateSettings(settings) => (
            api::update_settings(&club_id, settings, step_up).await,
            Ack::NoError,
            "Error updating club settings",
        ),
        ProtectedAction::MakeCoLeader { user_id } => (
            api::make_co_leader(&club_id, *user_id, step_up).await,
            Ack::Success,
            "Failed to promote user",
        ),
        ProtectedAction::RemoveCoLeader => (
            api::remove_co_leader(&club_id, step_up).await,
            Ack::Success,
            "Failed to remove co-leader",
        ),
    };

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("[ACTION] {} failed: {}", action.describe(), e);
            toast::error(&e.user_message(fallback), "Error");
            return;
        }
    };

    match reply.outcome(ack, step_up) {
        Outcome::NeedsVerification(email) => start_step_up(ctx, action, email, &club_id),
        Outcome::Done(message) => finish_action(ctx, store, action, message),
        Outcome::Rejected(reason) => {
            log::warn!("[ACTION] {} rejected: {:?}", action.describe(), reason);
            toast::error(&reason.unwrap_or_else(|| fallback.to_string()), "Error");
        }
    }
}

fn finish_action(ctx: AppContext, store: DashboardStore, action: ProtectedAction, message: Option<String>) {
    match action {
        ProtectedAction::UpdateSettings(settings) => {
            toast::success(
                &message.unwrap_or_else(|| "Club settings updated successfully!".to_string()),
                "Updated",
            );
            store_set_club_name(&store, settings.name);
        }
        ProtectedAction::MakeCoLeader { .. } | ProtectedAction::RemoveCoLeader => {
            toast::success(&message.unwrap_or_else(|| "Co-leader updated".to_string()), "Success");
            ctx.reload(Section::Members);
        }
    }
}

// ========================
// Verification Requests
// ========================

/// Enter the code flow for `action` and request the first code
pub fn start_step_up(ctx: AppContext, action: ProtectedAction, email: String, club_id: &str) {
    log::info!("[VERIFY] {} requires verification", action.describe());
    if let Some(request) = ctx
        .verification
        .try_update(|flow| flow.begin(action, email, club_id))
    {
        spawn_local(send_code(ctx, request));
    }
}

pub fn resend_code(ctx: AppContext) {
    if let Some(Some(request)) = ctx.verification.try_update(|flow| flow.resend()) {
        spawn_local(send_code(ctx, request));
    }
}

async fn send_code(ctx: AppContext, request: StepRequest) {
    match api::verification_step(&request).await {
        Ok(reply) => {
            ctx.verification.try_update(|flow| flow.code_sent(Ok(&reply)));
        }
        Err(e) => {
            log::error!("[VERIFY] Sending code failed: {}", e);
            ctx.verification.try_update(|flow| flow.code_sent(Err(())));
        }
    }
}

/// Check `code`; on acceptance wait briefly, close the flow and replay the action
pub fn verify_code(ctx: AppContext, store: DashboardStore, code: String) {
    let request = match ctx.verification.try_update(|flow| flow.submit_code(&code)) {
        Some(Ok(Some(request))) => request,
        // rejected locally, or a request is already in flight
        _ => return,
    };

    spawn_local(async move {
        let accepted = match api::verification_step(&request).await {
            Ok(reply) => ctx
                .verification
                .try_update(|flow| flow.accept(Ok(&reply)))
                .unwrap_or(false),
            Err(e) => {
                log::error!("[VERIFY] Verify request failed: {}", e);
                ctx.verification.try_update(|flow| flow.accept(Err(())));
                false
            }
        };
        if !accepted {
            return;
        }

        TimeoutFuture::new(REPLAY_DELAY_MS).await;
        if let Some(Some(action)) = ctx.verification.try_update(|flow| flow.finish()) {
            log::info!("[VERIFY] Replaying {}", action.describe());
            run_protected(ctx, store, action, StepUp::Satisfied).await;
        }
    });
}

pub fn cancel_verification(ctx: AppContext) {
    ctx.verification.update(|flow| flow.cancel());
}
