//! Settings Section
//!
//! Club name, description and location. Saving may require email step-up.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::run_protected;
use crate::api;
use crate::context::use_app_context;
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::toast;
use crate::validation::require;
use crate::verification::{ProtectedAction, SettingsInput, StepUp};
use super::section_class;

#[component]
pub fn SettingsSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let name = RwSignal::new(store.club_name().get_untracked());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let prefilled = StoredValue::new(false);

    // Prefill from the club record the first time the tab is shown
    Effect::new(move |_| {
        if ctx.active_section.get() != Section::Settings || prefilled.get_value() {
            return;
        }
        let Some(club_id) = ctx.club_id() else { return };
        prefilled.set_value(true);
        spawn_local(async move {
            match api::club_info(&club_id).await {
                Ok(info) => {
                    name.try_set(info.name);
                    description.try_set(info.description.unwrap_or_default());
                    location.try_set(info.location.unwrap_or_default());
                }
                Err(e) => log::warn!("[SETTINGS] Could not prefill settings: {}", e),
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let settings = SettingsInput::new(
            &name.get_untracked(),
            &description.get_untracked(),
            &location.get_untracked(),
        );
        if let Err(err) = require(&[("Club name", &settings.name)]) {
            toast::form_error(&err);
            return;
        }
        saving.set(true);
        spawn_local(async move {
            run_protected(ctx, store, ProtectedAction::UpdateSettings(settings), StepUp::Pending).await;
            saving.try_set(false);
        });
    };

    view! {
        <section id="settings" class=section_class(ctx, Section::Settings)>
            <div class="section-header">
                <h2>"Settings"</h2>
            </div>
            <div class="card">
                <form id="clubSettingsForm" class="card-body" on:submit=submit>
                    <div class="form-group">
                        <label class="form-label">"Club Name"</label>
                        <input type="text" class="form-control"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Description"</label>
                        <textarea class="form-control" rows="4"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))></textarea>
                    </div>
                    <div class="form-group">
                        <label class="form-label">"Location"</label>
                        <input type="text" class="form-control"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev)) />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        <i class="fas fa-save"></i>
                        {move || if saving.get() { " Saving..." } else { " Save Settings" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
