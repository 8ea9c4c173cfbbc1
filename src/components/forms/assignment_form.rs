//! Assignment Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::Modal;

use crate::api::{self, Ack, CreateAssignmentArgs};
use crate::components::mutation::{report, Feedback};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::navigation::Section;
use crate::toast;
use crate::validation::require;

const CREATED: Feedback = Feedback {
    success: Some("Assignment created successfully"),
    title: "Assignment Created",
    rejected: "Failed to create assignment",
    failed: "Error creating assignment",
};

/// "Create Assignment" modal
#[component]
pub fn AssignmentForm(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let for_all = RwSignal::new(true);

    let reset = move || {
        title.set(String::new());
        description.set(String::new());
        due_date.set(String::new());
        for_all.set(true);
    };
    let close = move || {
        open.set(false);
        reset();
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(club_id) = ctx.club_id() else {
            toast::form_error(&FormError::MissingClub);
            return;
        };
        let (t, d, due) = (title.get_untracked(), description.get_untracked(), due_date.get_untracked());
        if let Err(err) = require(&[("Title", &t), ("Description", &d)]) {
            toast::form_error(&err);
            return;
        }
        let all = for_all.get_untracked();
        spawn_local(async move {
            let args = CreateAssignmentArgs::new(&t, &d, &due, all);
            if report(api::create_assignment(&club_id, &args).await, Ack::Message, &CREATED).is_some() {
                open.try_set(false);
                title.try_set(String::new());
                description.try_set(String::new());
                due_date.try_set(String::new());
                for_all.try_set(true);
                ctx.reload(Section::Assignments);
            }
        });
    };

    view! {
        <Modal
            id="createAssignmentModal"
            title=Signal::derive(|| "Create Assignment".to_string())
            open=Signal::derive(move || open.get())
            on_close=move |_| close()
        >
            <form id="createAssignmentForm" on:submit=submit>
                <div class="form-group">
                    <label class="form-label">"Title"</label>
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label">"Description"</label>
                    <textarea
                        class="form-control"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label class="form-label">"Due Date"</label>
                    <input
                        type="date"
                        class="form-control"
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || for_all.get()
                            on:change=move |ev| for_all.set(event_target_checked(&ev))
                        />
                        " Assign to all members"
                    </label>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="btn btn-primary">"Create Assignment"</button>
                </div>
            </form>
        </Modal>
    }
}
