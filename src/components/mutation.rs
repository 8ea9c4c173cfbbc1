//! Mutation Feedback
//!
//! Toasting the result of create/update/delete calls and the confirm-then-delete flow.

use std::future::Future;

use leptos::task::spawn_local;

use crate::api::{Ack, MutationReply, Outcome};
use crate::context::AppContext;
use crate::error::{ApiError, FormError};
use crate::navigation::Section;
use crate::toast;
use crate::verification::StepUp;

/// Toast text for one kind of mutation
#[derive(Clone, Copy, Debug)]
pub struct Feedback {
    /// Success toast body; None shows the server's message
    pub success: Option<&'static str>,
    pub title: &'static str,
    /// Shown when the server refuses without an `error`
    pub rejected: &'static str,
    /// Shown when the request itself fails
    pub failed: &'static str,
}

/// Toast the outcome; returns the reply when the mutation went through
pub fn report(result: Result<MutationReply, ApiError>, ack: Ack, feedback: &Feedback) -> Option<MutationReply> {
    report_with(result, ack, feedback, |_, message| match feedback.success {
        Some(text) => text.to_string(),
        None => message.unwrap_or_else(|| feedback.title.to_string()),
    })
}

/// Like `report`, with the success text built from the reply
pub fn report_with(
    result: Result<MutationReply, ApiError>,
    ack: Ack,
    feedback: &Feedback,
    success_text: impl FnOnce(&MutationReply, Option<String>) -> String,
) -> Option<MutationReply> {
    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("[API] {} failed: {}", feedback.title, e);
            toast::error(&e.user_message(feedback.failed), "Error");
            return None;
        }
    };
    // Only protected actions intercept step-up; everything else reads it as a refusal
    match reply.outcome(ack, StepUp::Satisfied) {
        Outcome::Done(message) => {
            toast::success(&success_text(&reply, message), feedback.title);
            Some(reply)
        }
        Outcome::Rejected(reason) => {
            toast::error(&reason.unwrap_or_else(|| feedback.rejected.to_string()), "Error");
            None
        }
        Outcome::NeedsVerification(_) => {
            toast::error(feedback.rejected, "Error");
            None
        }
    }
}

/// Ask for confirmation, then delete and reload `section`
pub fn confirm_delete<F, Fut>(
    ctx: AppContext,
    section: Section,
    message: String,
    details: Option<String>,
    feedback: Feedback,
    delete: F,
) where
    F: Fn(String) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<MutationReply, ApiError>> + 'static,
{
    ctx.confirm(message, details, move || {
        let Some(club_id) = ctx.club_id() else {
            toast::form_error(&FormError::MissingClub);
            return;
        };
        spawn_local(async move {
            if report(delete(club_id).await, Ack::MessageOrSuccess, &feedback).is_some() {
                ctx.reload(section);
            }
        });
    });
}
