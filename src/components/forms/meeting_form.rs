//! Meeting Form Component
//!
//! Shared schedule/edit modal. The mode decides the header, the button and
//! whether submit POSTs or PUTs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::{Modal, ModalLabels, ModalMode, ModalState};

use crate::api::{self, Ack, MeetingArgs};
use crate::components::mutation::{report, Feedback};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::models::Meeting;
use crate::navigation::Section;
use crate::toast;
use crate::validation::require;

pub const MEETING_LABELS: ModalLabels = ModalLabels {
    create_title: "Schedule Meeting",
    edit_title: "Edit Meeting",
    create_action: "Schedule Meeting",
    edit_action: "Update Meeting",
    create_icon: "fas fa-calendar-plus",
    edit_icon: "fas fa-save",
};

const SCHEDULED: Feedback = Feedback {
    success: Some("Meeting scheduled successfully"),
    title: "Meeting Scheduled",
    rejected: "Failed to schedule meeting",
    failed: "Error scheduling meeting",
};

const UPDATED: Feedback = Feedback {
    success: Some("Meeting updated successfully"),
    title: "Meeting Updated",
    rejected: "Failed to update meeting",
    failed: "Error updating meeting",
};

/// Input signals of the meeting form
#[derive(Clone, Copy)]
pub struct MeetingFields {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub date: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub location: RwSignal<String>,
    pub link: RwSignal<String>,
}

impl MeetingFields {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            link: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, args: MeetingArgs) {
        self.title.set(args.title);
        self.description.set(args.description);
        self.date.set(args.meeting_date);
        self.start_time.set(args.start_time);
        self.end_time.set(args.end_time);
        self.location.set(args.location);
        self.link.set(args.meeting_link);
    }

    pub fn reset(&self) {
        self.fill(MeetingArgs::default());
    }

    fn read(&self) -> MeetingArgs {
        MeetingArgs {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            meeting_date: self.date.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            location: self.location.get_untracked(),
            meeting_link: self.link.get_untracked(),
        }
    }
}

/// Populate the form from `meeting` and switch the modal to edit mode
pub fn edit_meeting(modal: RwSignal<ModalState<u32>>, fields: MeetingFields, meeting: &Meeting) {
    fields.fill(MeetingArgs::from_meeting(meeting));
    modal.update(|m| m.enter_edit(meeting.id));
}

pub fn schedule_meeting(modal: RwSignal<ModalState<u32>>, fields: MeetingFields) {
    fields.reset();
    modal.update(|m| m.open_create());
}

#[component]
pub fn MeetingForm(modal: RwSignal<ModalState<u32>>, fields: MeetingFields) -> impl IntoView {
    let ctx = use_app_context();

    let close = move || {
        modal.update(|m| m.close());
        fields.reset();
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(club_id) = ctx.club_id() else {
            toast::form_error(&FormError::MissingClub);
            return;
        };
        let args = fields.read();
        if let Err(err) = require(&[
            ("Title", &args.title),
            ("Date", &args.meeting_date),
            ("Start time", &args.start_time),
        ]) {
            toast::form_error(&err);
            return;
        }
        let mode = modal.with_untracked(|m| m.mode);
        spawn_local(async move {
            let done = match mode {
                ModalMode::Create => report(api::create_meeting(&club_id, &args).await, Ack::Message, &SCHEDULED),
                ModalMode::Edit(id) => report(api::update_meeting(&club_id, id, &args).await, Ack::Message, &UPDATED),
            };
            if done.is_some() {
                if modal.try_update(|m| m.close()).is_some() {
                    fields.reset();
                }
                ctx.reload(Section::Schedule);
            }
        });
    };

    view! {
        <Modal
            id="createMeetingModal"
            title=Signal::derive(move || modal.with(|m| m.mode.title(&MEETING_LABELS)).to_string())
            open=Signal::derive(move || modal.with(|m| m.open))
            on_close=move |_| close()
        >
            <form id="createMeetingForm" on:submit=submit>
                <div class="form-group">
                    <label class="form-label">"Title"</label>
                    <input type="text" class="form-control"
                        prop:value=move || fields.title.get()
                        on:input=move |ev| fields.title.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label class="form-label">"Description"</label>
                    <textarea class="form-control"
                        prop:value=move || fields.description.get()
                        on:input=move |ev| fields.description.set(event_target_value(&ev))></textarea>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label class="form-label">"Date"</label>
                        <input type="date" class="form-control"
                            prop:value=move || fields.date.get()
                            on:input=move |ev| fields.date.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Start Time"</label>
                        <input type="time" class="form-control"
                            prop:value=move || fields.start_time.get()
                            on:input=move |ev| fields.start_time.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"End Time"</label>
                        <input type="time" class="form-control"
                            prop:value=move || fields.end_time.get()
                            on:input=move |ev| fields.end_time.set(event_target_value(&ev)) />
                    </div>
                </div>
                <div class="form-group">
                    <label class="form-label">"Location"</label>
                    <input type="text" class="form-control"
                        prop:value=move || fields.location.get()
                        on:input=move |ev| fields.location.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label class="form-label">"Meeting Link"</label>
                    <input type="url" class="form-control"
                        prop:value=move || fields.link.get()
                        on:input=move |ev| fields.link.set(event_target_value(&ev)) />
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="btn btn-primary">
                        <i class=move || modal.with(|m| m.mode.action_icon(&MEETING_LABELS))></i>
                        " "
                        {move || modal.with(|m| m.mode.action_label(&MEETING_LABELS))}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
