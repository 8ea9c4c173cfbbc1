//! Schedule Section

use chrono::Local;
use leptos::prelude::*;
use leptos_modal::ModalState;

use crate::api;
use crate::components::forms::{edit_meeting, schedule_meeting, MeetingFields, MeetingForm};
use crate::components::mutation::{confirm_delete, Feedback};
use crate::components::{DeleteButton, EmptyState};
use crate::context::use_app_context;
use crate::format::{short_date, time_range};
use crate::loader::{meetings_in_month, CardActions, LoadState};
use crate::models::Meeting;
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use super::{render_list, section_class, use_section_loader};

const DELETED: Feedback = Feedback {
    success: Some("Meeting deleted successfully"),
    title: "Meeting Deleted",
    rejected: "Failed to delete meeting",
    failed: "Error deleting meeting",
};

#[component]
pub fn ScheduleSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let meetings = use_section_loader(Section::Schedule, "meetings", |club_id| async move {
        api::list_meetings(&club_id).await
    });
    let modal = RwSignal::new(ModalState::<u32>::default());
    let fields = MeetingFields::new();

    Effect::new(move |_| {
        meetings.with(|state| {
            if let LoadState::Ready(items) = state {
                let today = Local::now().date_naive();
                *store.meetings_this_month().write() = meetings_in_month(items, today);
            }
        });
    });

    let delete_meeting = move |meeting: Meeting| {
        let id = meeting.id;
        confirm_delete(
            ctx,
            Section::Schedule,
            format!("Delete \"{}\"?", meeting.title),
            Some("This action cannot be undone.".to_string()),
            DELETED,
            move |club_id| async move { api::delete_meeting(&club_id, id).await },
        );
    };

    view! {
        <section id="schedule" class=section_class(ctx, Section::Schedule)>
            <div class="section-header">
                <h2>"Schedule"</h2>
                <Show when=move || store.is_leader().get()>
                    <button class="btn btn-primary" on:click=move |_| schedule_meeting(modal, fields)>
                        <i class="fas fa-calendar-plus"></i>
                        " Schedule Meeting"
                    </button>
                </Show>
            </div>
            <div id="meetingsList" class="meetings-list">
                {move || render_list(
                    meetings.get(),
                    "meetings",
                    || view! {
                        <EmptyState
                            icon="fas fa-calendar"
                            title="No meetings scheduled"
                            description="Schedule your first club meeting!"
                        />
                    }.into_any(),
                    |meeting| {
                        let actions = CardActions::new(store.is_leader().get(), true);
                        let when = format!(
                            " {} {}",
                            short_date(&meeting.meeting_date),
                            time_range(&meeting.start_time, meeting.end_time.as_deref()),
                        );
                        let to_edit = meeting.clone();
                        let to_delete = meeting.clone();
                        view! {
                            <div class="card">
                                <div class="card-header">
                                    <h3>{meeting.title.clone()}</h3>
                                    <div class="card-actions">
                                        {actions.can_edit.then(|| view! {
                                            <button
                                                class="btn-icon"
                                                title="Edit Meeting"
                                                on:click=move |_| edit_meeting(modal, fields, &to_edit)
                                            >
                                                <i class="fas fa-edit"></i>
                                            </button>
                                        })}
                                        {actions.can_delete.then(|| view! {
                                            <DeleteButton
                                                title="Delete Meeting"
                                                on_click=move |_| delete_meeting(to_delete.clone())
                                            />
                                        })}
                                    </div>
                                </div>
                                <div class="card-body">
                                    {meeting.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p>{d}</p> })}
                                    <div class="card-meta">
                                        <span><i class="fas fa-clock"></i>{when}</span>
                                        {meeting.location.clone().filter(|l| !l.is_empty()).map(|l| view! {
                                            <span><i class="fas fa-map-marker-alt"></i>{format!(" {}", l)}</span>
                                        })}
                                        {meeting.meeting_link.clone().filter(|l| !l.is_empty()).map(|l| view! {
                                            <a href=l target="_blank" rel="noopener">
                                                <i class="fas fa-external-link-alt"></i>
                                                " Visit Resource"
                                            </a>
                                        })}
                                    </div>
                                </div>
                            </div>
                        }
                    },
                )}
            </div>
            <MeetingForm modal=modal fields=fields />
        </section>
    }
}
