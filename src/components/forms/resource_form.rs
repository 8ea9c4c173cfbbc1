//! Resource Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::{Modal, ModalLabels, ModalMode, ModalState};

use crate::api::{self, Ack, ResourceArgs};
use crate::components::mutation::{report, Feedback};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::models::Resource;
use crate::navigation::Section;
use crate::toast;
use crate::validation::require;

pub const RESOURCE_LABELS: ModalLabels = ModalLabels {
    create_title: "Add Resource",
    edit_title: "Edit Resource",
    create_action: "Add Resource",
    edit_action: "Update Resource",
    create_icon: "fas fa-plus",
    edit_icon: "fas fa-save",
};

/// Font Awesome names offered for a resource card
const ICONS: [(&str, &str); 6] = [
    ("book", "Book"),
    ("video", "Video"),
    ("code", "Code"),
    ("link", "Link"),
    ("file-alt", "Document"),
    ("globe", "Website"),
];

const ADDED: Feedback = Feedback {
    success: Some("Resource added successfully"),
    title: "Resource Added",
    rejected: "Failed to add resource",
    failed: "Error adding resource",
};

const UPDATED: Feedback = Feedback {
    success: Some("Resource updated successfully"),
    title: "Resource Updated",
    rejected: "Failed to update resource",
    failed: "Error updating resource",
};

#[derive(Clone, Copy)]
pub struct ResourceFields {
    pub title: RwSignal<String>,
    pub url: RwSignal<String>,
    pub description: RwSignal<String>,
    pub icon: RwSignal<String>,
}

impl ResourceFields {
    pub fn new() -> Self {
        let blank = ResourceArgs::default();
        Self {
            title: RwSignal::new(blank.title),
            url: RwSignal::new(blank.url),
            description: RwSignal::new(blank.description),
            icon: RwSignal::new(blank.icon),
        }
    }

    fn fill(&self, args: ResourceArgs) {
        self.title.set(args.title);
        self.url.set(args.url);
        self.description.set(args.description);
        self.icon.set(args.icon);
    }

    pub fn reset(&self) {
        self.fill(ResourceArgs::default());
    }

    fn read(&self) -> ResourceArgs {
        ResourceArgs {
            title: self.title.get_untracked(),
            url: self.url.get_untracked(),
            description: self.description.get_untracked(),
            icon: self.icon.get_untracked(),
        }
    }
}

pub fn edit_resource(modal: RwSignal<ModalState<u32>>, fields: ResourceFields, resource: &Resource) {
    fields.fill(ResourceArgs::from_resource(resource));
    modal.update(|m| m.enter_edit(resource.id));
}

pub fn add_resource(modal: RwSignal<ModalState<u32>>, fields: ResourceFields) {
    fields.reset();
    modal.update(|m| m.open_create());
}

#[component]
pub fn ResourceForm(modal: RwSignal<ModalState<u32>>, fields: ResourceFields) -> impl IntoView {
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
        if let Err(err) = require(&[("Title", &args.title), ("URL", &args.url)]) {
            toast::form_error(&err);
            return;
        }
        let mode = modal.with_untracked(|m| m.mode);
        spawn_local(async move {
            let done = match mode {
                ModalMode::Create => report(api::create_resource(&club_id, &args).await, Ack::Message, &ADDED),
                ModalMode::Edit(id) => report(api::update_resource(&club_id, id, &args).await, Ack::Message, &UPDATED),
            };
            if done.is_some() {
                if modal.try_update(|m| m.close()).is_some() {
                    fields.reset();
                }
                ctx.reload(Section::Resources);
            }
        });
    };

    view! {
        <Modal
            id="createResourceModal"
            title=Signal::derive(move || modal.with(|m| m.mode.title(&RESOURCE_LABELS)).to_string())
            open=Signal::derive(move || modal.with(|m| m.open))
            on_close=move |_| close()
        >
            <form id="createResourceForm" on:submit=submit>
                <div class="form-group">
                    <label class="form-label">"Title"</label>
                    <input type="text" class="form-control"
                        prop:value=move || fields.title.get()
                        on:input=move |ev| fields.title.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label class="form-label">"URL"</label>
                    <input type="url" class="form-control"
                        prop:value=move || fields.url.get()
                        on:input=move |ev| fields.url.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label class="form-label">"Description"</label>
                    <textarea class="form-control"
                        prop:value=move || fields.description.get()
                        on:input=move |ev| fields.description.set(event_target_value(&ev))></textarea>
                </div>
                <div class="form-group">
                    <label class="form-label">"Icon"</label>
                    <select class="form-control"
                        prop:value=move || fields.icon.get()
                        on:change=move |ev| fields.icon.set(event_target_value(&ev))>
                        {ICONS.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="btn btn-primary">
                        <i class=move || modal.with(|m| m.mode.action_icon(&RESOURCE_LABELS))></i>
                        " "
                        {move || modal.with(|m| m.mode.action_label(&RESOURCE_LABELS))}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
