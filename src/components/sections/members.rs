//! Members Section
//!
//! Member roster with leader controls, the Hackatime lookup, co-leader
//! management and the leadership transfer card.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::run_protected;
use crate::api::{self, Ack, MutationReply};
use crate::components::mutation::{report, Feedback};
use crate::components::{EmptyState, HackatimeLookup, LeadershipTransfer};
use crate::context::{use_app_context, AppContext};
use crate::error::{ApiError, FormError};
use crate::format::{avatar_initial, short_date};
use crate::loader::LoadState;
use crate::models::{Member, MemberRole};
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields, DashboardStore};
use crate::toast;
use crate::verification::{ProtectedAction, StepUp};
use super::{render_list, section_class, use_section_loader};

const REMOVED: Feedback = Feedback {
    success: Some("Member removed successfully"),
    title: "Member Removed",
    rejected: "Failed to remove member",
    failed: "Error removing member",
};

const ASSIGNED: Feedback = Feedback {
    success: None,
    title: "Co-Leader Assigned",
    rejected: "Failed to assign co-leader",
    failed: "Error assigning co-leader",
};

const REVOKED: Feedback = Feedback {
    success: None,
    title: "Co-Leader Removed",
    rejected: "Failed to remove co-leader",
    failed: "Error removing co-leader",
};

const CO_LEADER_DETAILS: &str =
    "Co-leaders have the same permissions as leaders except they cannot transfer leadership or remove the main leader.";

/// Confirm, then run a membership mutation and reload the roster
fn member_action<F, Fut>(
    ctx: AppContext,
    message: String,
    details: Option<String>,
    ack: Ack,
    feedback: Feedback,
    action: F,
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
            if report(action(club_id).await, ack, &feedback).is_some() {
                ctx.reload(Section::Members);
            }
        });
    });
}

/// Confirm, then run a step-up protected co-leader change
fn protected_action(ctx: AppContext, store: DashboardStore, message: &str, action: ProtectedAction) {
    ctx.confirm(message, None, move || {
        spawn_local(run_protected(ctx, store, action.clone(), StepUp::Pending));
    });
}

fn role_badge(role: &MemberRole) -> &'static str {
    match role {
        MemberRole::Leader => "role-badge leader",
        MemberRole::CoLeader => "role-badge co-leader",
        MemberRole::Member => "role-badge member",
    }
}

/// Make/remove co-leader through the verified endpoints
#[component]
fn CoLeaderCard(#[prop(into)] members: Signal<Vec<Member>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let selected = RwSignal::new(String::new());
    let has_co_leader = move || members.with(|list| list.iter().any(|m| m.role == MemberRole::CoLeader));

    let make = move |_| {
        let Ok(user_id) = selected.get_untracked().parse::<u32>() else {
            toast::form_error(&FormError::NoSelection("Please select a member".to_string()));
            return;
        };
        protected_action(
            ctx,
            store,
            "Are you sure you want to make this user a co-leader?",
            ProtectedAction::MakeCoLeader { user_id },
        );
    };

    let remove = move |_| {
        protected_action(
            ctx,
            store,
            "Are you sure you want to remove the co-leader?",
            ProtectedAction::RemoveCoLeader,
        );
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h3><i class="fas fa-user-shield"></i>" Co-Leader"</h3>
            </div>
            <div class="card-body">
                <Show
                    when=has_co_leader
                    fallback=move || view! {
                        <div class="form-group">
                            <select class="form-control"
                                prop:value=move || selected.get()
                                on:change=move |ev| selected.set(event_target_value(&ev))>
                                <option value="">"Select a member"</option>
                                {move || members.get().into_iter()
                                    .filter(|m| m.role == MemberRole::Member)
                                    .map(|m| view! { <option value=m.id.to_string()>{m.username}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <button class="btn btn-primary" on:click=make>
                            <i class="fas fa-user-plus"></i>
                            " Make Co-Leader"
                        </button>
                    }
                >
                    <button class="btn btn-secondary" on:click=remove>
                        <i class="fas fa-user-minus"></i>
                        " Remove Co-Leader"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn MembersSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let roster = use_section_loader(Section::Members, "members", |club_id| async move {
        api::club_info(&club_id).await.map(|info| info.members)
    });
    let members = Signal::derive(move || roster.with(|state| state.items().to_vec()));

    let remove_member = move |member: Member| {
        let user_id = member.id;
        member_action(
            ctx,
            format!("Remove {} from the club?", member.username),
            Some("This action cannot be undone.".to_string()),
            Ack::Success,
            REMOVED,
            move |club_id| async move { api::remove_member(&club_id, user_id).await },
        );
    };

    let promote = move |member: Member| {
        let user_id = member.id;
        member_action(
            ctx,
            format!("Make {} a co-leader?", member.username),
            Some(CO_LEADER_DETAILS.to_string()),
            Ack::Message,
            ASSIGNED,
            move |club_id| async move { api::assign_co_leader(&club_id, user_id).await },
        );
    };

    let demote = move || {
        member_action(
            ctx,
            "Remove co-leader?".to_string(),
            Some("This will remove co-leader permissions from this member.".to_string()),
            Ack::Message,
            REVOKED,
            |club_id| async move { api::revoke_co_leader(&club_id).await },
        );
    };

    view! {
        <section id="members" class=section_class(ctx, Section::Members)>
            <div class="section-header">
                <h2>"Members"</h2>
                <span class="member-count">
                    {move || roster.with(|state| match state {
                        LoadState::Ready(items) => format!("{} members", items.len()),
                        _ => String::new(),
                    })}
                </span>
            </div>
            <div id="membersList" class="members-list">
                {move || render_list(
                    roster.get(),
                    "members",
                    || view! { <EmptyState icon="fas fa-users" title="No members yet" /> }.into_any(),
                    |member| {
                        let is_leader = store.is_leader().get();
                        let manageable = is_leader && member.role != MemberRole::Leader;
                        let can_promote = manageable && member.role == MemberRole::Member;
                        let can_demote = manageable && member.role == MemberRole::CoLeader;
                        let to_remove = member.clone();
                        let to_promote = member.clone();
                        view! {
                            <div class="member-row">
                                <div class="member-avatar">{avatar_initial(&member.username)}</div>
                                <div class="member-details">
                                    <div class="member-name">{member.username.clone()}</div>
                                    {member.email.clone().map(|e| view! { <div class="member-email">{e}</div> })}
                                    {member.joined_at.as_deref().map(short_date).map(|d| view! {
                                        <div class="member-joined">{format!("Joined {}", d)}</div>
                                    })}
                                </div>
                                <span class=role_badge(&member.role)>{member.role.label()}</span>
                                <div class="member-actions">
                                    {can_promote.then(|| view! {
                                        <button class="btn-icon" title="Make Co-Leader"
                                            on:click=move |_| promote(to_promote.clone())>
                                            <i class="fas fa-user-shield"></i>
                                        </button>
                                    })}
                                    {can_demote.then(|| view! {
                                        <button class="btn-icon" title="Remove Co-Leader"
                                            on:click=move |_| demote()>
                                            <i class="fas fa-user-minus"></i>
                                        </button>
                                    })}
                                    {manageable.then(|| view! {
                                        <button class="btn-icon delete-btn" title="Remove Member"
                                            on:click=move |_| remove_member(to_remove.clone())>
                                            <i class="fas fa-user-times"></i>
                                        </button>
                                    })}
                                </div>
                            </div>
                        }
                    },
                )}
            </div>
            <HackatimeLookup members=members />
            <Show when=move || store.is_leader().get()>
                <div class="leader-tools">
                    <CoLeaderCard members=members />
                    <LeadershipTransfer members=members />
                </div>
            </Show>
        </section>
    }
}
