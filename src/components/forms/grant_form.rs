//! Grant Form Component
//!
//! Pizza grant application. Picking a member prefills their profile and
//! lists their Hackatime projects; submitting validates, uploads the
//! screenshot and only then posts the application.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::Modal;
use web_sys::File;

use crate::api::{self, project_hours, Ack, GrantApplication};
use crate::components::mutation::{report, Feedback};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::models::{HackatimeProject, Member, MemberProfile};
use crate::navigation::Section;
use crate::toast;
use crate::validation::validate_grant;

const SUBMITTED: Feedback = Feedback {
    success: None,
    title: "Grant Submitted",
    rejected: "Failed to submit grant",
    failed: "Error submitting grant",
};

/// Project dropdown contents for the selected member
#[derive(Clone, Debug, PartialEq)]
enum ProjectChoices {
    NoMember,
    Loading,
    Failed,
    Loaded(Vec<HackatimeProject>),
}

#[derive(Clone, Copy)]
struct GrantFields {
    member_id: RwSignal<String>,
    project: RwSignal<Option<usize>>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    birthday: RwSignal<String>,
    description: RwSignal<String>,
    github_url: RwSignal<String>,
    live_url: RwSignal<String>,
    learning: RwSignal<String>,
    doing_well: RwSignal<String>,
    improve: RwSignal<String>,
    address_1: RwSignal<String>,
    address_2: RwSignal<String>,
    city: RwSignal<String>,
    state: RwSignal<String>,
    zip: RwSignal<String>,
    country: RwSignal<String>,
    in_person: RwSignal<bool>,
}

impl GrantFields {
    fn new() -> Self {
        let text = || RwSignal::new(String::new());
        Self {
            member_id: text(),
            project: RwSignal::new(None),
            first_name: text(),
            last_name: text(),
            email: text(),
            birthday: text(),
            description: text(),
            github_url: text(),
            live_url: text(),
            learning: text(),
            doing_well: text(),
            improve: text(),
            address_1: text(),
            address_2: text(),
            city: text(),
            state: text(),
            zip: text(),
            country: text(),
            in_person: RwSignal::new(false),
        }
    }

    fn fill_profile(&self, profile: MemberProfile) {
        self.first_name.try_set(profile.first_name.unwrap_or_default());
        self.last_name.try_set(profile.last_name.unwrap_or_default());
        self.email.try_set(profile.email.unwrap_or_default());
        self.birthday.try_set(profile.birthday.unwrap_or_default());
    }

    fn reset(&self) {
        self.member_id.set(String::new());
        self.project.set(None);
        self.fill_profile(MemberProfile::default());
        for text in [
            self.description,
            self.github_url,
            self.live_url,
            self.learning,
            self.doing_well,
            self.improve,
            self.address_1,
            self.address_2,
            self.city,
            self.state,
            self.zip,
            self.country,
        ] {
            text.set(String::new());
        }
        self.in_person.set(false);
    }

    fn read(&self, project: Option<&HackatimeProject>) -> GrantApplication {
        GrantApplication {
            member_id: self.member_id.get_untracked(),
            project_name: project.map(|p| p.name.clone()).unwrap_or_default(),
            project_hours: project_hours(project),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            birthday: self.birthday.get_untracked(),
            project_description: self.description.get_untracked(),
            github_url: self.github_url.get_untracked(),
            live_url: self.live_url.get_untracked(),
            learning: self.learning.get_untracked(),
            doing_well: self.doing_well.get_untracked(),
            improve: self.improve.get_untracked(),
            address_1: self.address_1.get_untracked(),
            address_2: self.address_2.get_untracked(),
            city: self.city.get_untracked(),
            state: self.state.get_untracked(),
            zip: self.zip.get_untracked(),
            country: self.country.get_untracked(),
            screenshot_url: String::new(),
            is_in_person_meeting: self.in_person.get_untracked(),
        }
    }
}

fn text_field(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <input type=kind class="form-control"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev)) />
        </div>
    }
}

fn text_area(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <textarea class="form-control" rows="3"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))></textarea>
        </div>
    }
}

fn first_file(input: Option<web_sys::HtmlInputElement>) -> Option<File> {
    input?.files()?.get(0)
}

#[component]
pub fn GrantForm(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let fields = GrantFields::new();
    let members = RwSignal::new(Vec::<Member>::new());
    let projects = RwSignal::new(ProjectChoices::NoMember);
    let screenshot = NodeRef::<html::Input>::new();
    let submitting = RwSignal::new(false);

    // Member list is fetched each time the modal opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let Some(club_id) = ctx.club_id() else { return };
        spawn_local(async move {
            match api::club_info(&club_id).await {
                Ok(info) => {
                    members.try_set(info.members);
                }
                Err(e) => log::error!("[GRANT] Failed to load members: {}", e),
            }
        });
    });

    let select_member = move |user_id: String| {
        fields.member_id.set(user_id.clone());
        fields.project.set(None);
        if user_id.is_empty() {
            fields.fill_profile(MemberProfile::default());
            projects.set(ProjectChoices::NoMember);
            return;
        }
        projects.set(ProjectChoices::Loading);
        spawn_local(async move {
            match api::member_profile(&user_id).await {
                Ok(profile) => fields.fill_profile(profile),
                Err(e) => {
                    log::warn!("[GRANT] Profile lookup failed for {}: {}", user_id, e);
                    fields.fill_profile(MemberProfile::default());
                }
            }
            let choices = match api::hackatime_projects(&user_id).await {
                Ok(found) => ProjectChoices::Loaded(found.projects),
                Err(e) => {
                    log::warn!("[GRANT] Hackatime lookup failed for {}: {}", user_id, e);
                    ProjectChoices::Failed
                }
            };
            projects.try_set(choices);
        });
    };

    let close = move || {
        open.set(false);
        fields.reset();
        projects.set(ProjectChoices::NoMember);
        if let Some(input) = screenshot.get_untracked() {
            input.set_value("");
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(club_id) = ctx.club_id() else {
            toast::form_error(&FormError::MissingClub);
            return;
        };
        let Some(file) = first_file(screenshot.get_untracked()) else {
            toast::error("Please upload a screenshot", "Validation Error");
            return;
        };
        let mut app = projects.with_untracked(|choices| {
            let selected = match (choices, fields.project.get_untracked()) {
                (ProjectChoices::Loaded(list), Some(i)) => list.get(i),
                _ => None,
            };
            fields.read(selected)
        });
        if let Err(err) = validate_grant(&app) {
            toast::form_error(&err);
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match api::upload_screenshot(&file).await {
                Ok(url) => app.screenshot_url = url,
                Err(e) => {
                    log::error!("[GRANT] Screenshot upload failed: {}", e);
                    toast::error(&e.user_message("Failed to upload screenshot"), "Upload Error");
                    submitting.try_set(false);
                    return;
                }
            }
            let done = report(api::submit_grant(&club_id, &app).await, Ack::Message, &SUBMITTED);
            submitting.try_set(false);
            if done.is_some() {
                if open.try_get_untracked().is_some() {
                    close();
                }
                ctx.reload(Section::Pizza);
            }
        });
    };

    view! {
        <Modal
            id="pizzaGrantModal"
            title="Submit Pizza Grant".to_string()
            open=open
            on_close=move |_| close()
        >
            <form id="pizzaGrantForm" on:submit=submit>
                <div class="form-group">
                    <label class="form-label">"Member"</label>
                    <select class="form-control"
                        prop:value=move || fields.member_id.get()
                        on:change=move |ev| select_member(event_target_value(&ev))>
                        <option value="">"Select a member"</option>
                        {move || members.get().into_iter().map(|m| view! {
                            <option value=m.id.to_string()>{m.username}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label class="form-label">"Project"</label>
                    {move || match projects.get() {
                        ProjectChoices::NoMember => view! {
                            <div class="empty-state-inline">"Select a member to see their Hackatime projects"</div>
                        }.into_any(),
                        ProjectChoices::Loading => view! {
                            <select class="form-control" disabled=true><option>"Loading projects..."</option></select>
                        }.into_any(),
                        ProjectChoices::Failed => view! {
                            <select class="form-control" disabled=true><option>"No Hackatime projects found"</option></select>
                        }.into_any(),
                        ProjectChoices::Loaded(list) if list.is_empty() => view! {
                            <select class="form-control" disabled=true><option>"No projects found"</option></select>
                        }.into_any(),
                        ProjectChoices::Loaded(list) => view! {
                            <select class="form-control"
                                on:change=move |ev| fields.project.set(event_target_value(&ev).parse().ok())>
                                <option value="">"Select your project"</option>
                                {list.into_iter().enumerate().map(|(i, p)| view! {
                                    <option value=i.to_string()>{format!("{} ({})", p.name, p.formatted_time)}</option>
                                }).collect_view()}
                            </select>
                        }.into_any(),
                    }}
                </div>
                <div class="form-row">
                    {text_field("First Name", "text", fields.first_name)}
                    {text_field("Last Name", "text", fields.last_name)}
                </div>
                <div class="form-row">
                    {text_field("Email", "email", fields.email)}
                    {text_field("Birthday", "date", fields.birthday)}
                </div>
                {text_area("Project Description", fields.description)}
                {text_field("GitHub URL", "url", fields.github_url)}
                {text_field("Live URL", "url", fields.live_url)}
                {text_area("What did you learn?", fields.learning)}
                {text_area("What are we doing well?", fields.doing_well)}
                {text_area("How can we improve?", fields.improve)}
                {text_field("Address Line 1", "text", fields.address_1)}
                {text_field("Address Line 2", "text", fields.address_2)}
                <div class="form-row">
                    {text_field("City", "text", fields.city)}
                    {text_field("State/Province", "text", fields.state)}
                    {text_field("ZIP/Postal Code", "text", fields.zip)}
                </div>
                {text_field("Country", "text", fields.country)}
                <div class="form-group">
                    <label class="form-label">"Screenshot"</label>
                    <input type="file" accept="image/*" class="form-control" node_ref=screenshot />
                </div>
                <div class="form-group">
                    <label class="checkbox-label">
                        <input type="checkbox"
                            prop:checked=move || fields.in_person.get()
                            on:change=move |ev| fields.in_person.set(event_target_checked(&ev)) />
                        " This project was worked on during an in-person club meeting"
                    </label>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        <i class="fas fa-paper-plane"></i>
                        {move || if submitting.get() { " Submitting..." } else { " Submit Grant" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
