//! Leadership Transfer Component
//!
//! Hands the club to another member. The confirm button stays disabled until
//! the confirmation word is typed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::Modal;

use crate::api::{self, Ack};
use crate::components::mutation::{report, Feedback};
use crate::context::use_app_context;
use crate::dom;
use crate::error::FormError;
use crate::format::avatar_initial;
use crate::models::{Member, MemberRole};
use crate::toast;
use crate::validation::{transfer_confirmed, TRANSFER_CONFIRMATION};

/// Delay before leaving the page the new leader now owns
pub const REDIRECT_DELAY_MS: u32 = 2000;

const TRANSFERRED: Feedback = Feedback {
    success: Some("Leadership transferred successfully!"),
    title: "Success",
    rejected: "Failed to transfer leadership",
    failed: "Error transferring leadership",
};

#[component]
pub fn LeadershipTransfer(#[prop(into)] members: Signal<Vec<Member>>) -> impl IntoView {
    let ctx = use_app_context();
    let selected = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let open = RwSignal::new(false);
    let transferring = RwSignal::new(false);

    let candidate = move || {
        let id: u32 = selected.with(|s| s.parse().ok())?;
        members.with(|list| list.iter().find(|m| m.id == id).cloned())
    };

    let initiate = move |_| {
        if selected.with_untracked(String::is_empty) {
            toast::form_error(&FormError::NoSelection(
                "Please select a member to transfer leadership to".to_string(),
            ));
            return;
        }
        confirmation.set(String::new());
        open.set(true);
    };

    let confirm = move |_| {
        let Ok(new_leader_id) = selected.get_untracked().parse::<u32>() else {
            toast::error("No leader selected", "Error");
            return;
        };
        let Some(club_id) = ctx.club_id() else {
            toast::form_error(&FormError::MissingClub);
            return;
        };
        transferring.set(true);
        spawn_local(async move {
            let done = report(
                api::transfer_leadership(&club_id, new_leader_id).await,
                Ack::NoError,
                &TRANSFERRED,
            );
            transferring.try_set(false);
            if done.is_some() {
                open.try_set(false);
                log::info!("[LEADERSHIP] Transferred to {}, redirecting", new_leader_id);
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                dom::redirect("/dashboard");
            }
        });
    };

    view! {
        <div class="card danger-zone">
            <div class="card-header">
                <h3><i class="fas fa-crown"></i>" Transfer Leadership"</h3>
            </div>
            <div class="card-body">
                <p>"The new leader gets full control of the club. You will become a regular member."</p>
                <div class="form-group">
                    <select id="newLeaderSelect" class="form-control"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))>
                        <option value="">"Select a member"</option>
                        {move || members.get().into_iter()
                            .filter(|m| m.role != MemberRole::Leader)
                            .map(|m| {
                                let text = match m.email.as_deref() {
                                    Some(email) => format!("{} ({})", m.username, email),
                                    None => m.username.clone(),
                                };
                                view! { <option value=m.id.to_string()>{text}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <button class="btn btn-danger" on:click=initiate>
                    <i class="fas fa-exchange-alt"></i>
                    " Transfer Leadership"
                </button>
            </div>
            <Modal
                id="transferLeadershipModal"
                title="Transfer Leadership".to_string()
                open=open
                on_close=move |_| open.set(false)
            >
                <div class="modal-body">
                    {move || candidate().map(|m| view! {
                        <div class="member-preview">
                            <div class="member-avatar">{avatar_initial(&m.username)}</div>
                            <div>
                                <div class="member-name">{m.username.clone()}</div>
                                <div class="member-email">{m.email.clone().unwrap_or_default()}</div>
                            </div>
                        </div>
                    })}
                    <p>{format!("Type {} to confirm.", TRANSFER_CONFIRMATION)}</p>
                    <input id="transferConfirmationInput" type="text" class="form-control"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev)) />
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button
                        type="button"
                        id="confirmTransferButton"
                        class="btn btn-danger"
                        disabled=move || transferring.get() || !confirmation.with(|c| transfer_confirmed(c))
                        on:click=confirm
                    >
                        {move || if transferring.get() {
                            view! { <i class="fas fa-spinner fa-spin"></i>" Transferring..." }.into_any()
                        } else {
                            view! { <i class="fas fa-crown"></i>" Transfer Leadership" }.into_any()
                        }}
                    </button>
                </div>
            </Modal>
        </div>
    }
}
