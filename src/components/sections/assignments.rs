//! Assignments Section

use leptos::prelude::*;

use crate::api;
use crate::components::forms::AssignmentForm;
use crate::components::mutation::{confirm_delete, Feedback};
use crate::components::{DeleteButton, EmptyState};
use crate::context::use_app_context;
use crate::format::short_date;
use crate::loader::{active_assignments, CardActions, LoadState};
use crate::models::Assignment;
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use super::{render_list, section_class, use_section_loader};

const DELETED: Feedback = Feedback {
    success: Some("Assignment deleted successfully"),
    title: "Assignment Deleted",
    rejected: "Failed to delete assignment",
    failed: "Error deleting assignment",
};

#[component]
pub fn AssignmentsSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let assignments = use_section_loader(Section::Assignments, "assignments", |club_id| async move {
        api::list_assignments(&club_id).await
    });
    let form_open = RwSignal::new(false);

    // Overview badge
    Effect::new(move |_| {
        assignments.with(|state| {
            if let LoadState::Ready(items) = state {
                *store.active_assignments().write() = active_assignments(items);
            }
        });
    });

    let delete_assignment = move |assignment: Assignment| {
        let id = assignment.id;
        confirm_delete(
            ctx,
            Section::Assignments,
            format!("Delete \"{}\"?", assignment.title),
            Some("This action cannot be undone.".to_string()),
            DELETED,
            move |club_id| async move { api::delete_assignment(&club_id, id).await },
        );
    };

    view! {
        <section id="assignments" class=section_class(ctx, Section::Assignments)>
            <div class="section-header">
                <h2>"Assignments"</h2>
                <Show when=move || store.is_leader().get()>
                    <button class="btn btn-primary" on:click=move |_| form_open.set(true)>
                        <i class="fas fa-plus"></i>
                        " Create Assignment"
                    </button>
                </Show>
            </div>
            <div id="assignmentsList" class="assignments-list">
                {move || render_list(
                    assignments.get(),
                    "assignments",
                    || view! {
                        <EmptyState
                            icon="fas fa-clipboard-list"
                            title="No assignments yet"
                            description="Create your first assignment to get started!"
                        />
                    }.into_any(),
                    |assignment| {
                        let actions = CardActions::new(store.is_leader().get(), false);
                        let status_class = if assignment.is_active() { "status-badge active" } else { "status-badge" };
                        let audience = if assignment.for_all_members { " All members" } else { " Selected members" };
                        let due = assignment.due_date.as_deref().map(short_date);
                        let on_delete = assignment.clone();
                        view! {
                            <div class="card">
                                <div class="card-header">
                                    <div>
                                        <h3>{assignment.title.clone()}</h3>
                                        <span class=status_class>{assignment.status.clone()}</span>
                                    </div>
                                    {actions.can_delete.then(|| view! {
                                        <DeleteButton
                                            title="Delete Assignment"
                                            on_click=move |_| delete_assignment(on_delete.clone())
                                        />
                                    })}
                                </div>
                                <div class="card-body">
                                    <p>{assignment.description.clone()}</p>
                                    <div class="card-meta">
                                        {due.map(|due| view! {
                                            <span><i class="fas fa-calendar"></i>{format!(" Due: {}", due)}</span>
                                        })}
                                        <span><i class="fas fa-users"></i>{audience}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    },
                )}
            </div>
            <AssignmentForm open=form_open />
        </section>
    }
}
