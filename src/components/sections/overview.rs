//! Overview Section
//!
//! Landing tab: headline counts and the join code card.

use leptos::prelude::*;

use crate::components::JoinCodeCard;
use crate::context::use_app_context;
use crate::dom;
use crate::format::money;
use crate::navigation::Section;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use super::section_class;

#[component]
pub fn OverviewSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let stat = move |icon: &'static str, label: &'static str, value: Signal<String>, target: Section| {
        view! {
            <div class="stat-card" on:click=move |_| {
                ctx.open_section(target.id());
                dom::set_location_hash(target.id());
            }>
                <i class=icon></i>
                <div class="stat-value">{move || value.get()}</div>
                <div class="stat-label">{label}</div>
            </div>
        }
    };

    view! {
        <section id="dashboard" class=section_class(ctx, Section::Dashboard)>
            <div class="club-info">
                <h1>{move || store.club_name().get()}</h1>
                <span class="balance-display">
                    <span class="balance-amount">{move || money(store.balance().get())}</span>
                </span>
            </div>
            <div class="stats-grid">
                {stat(
                    "fas fa-clipboard-list",
                    "Active Assignments",
                    Signal::derive(move || store.active_assignments().get().to_string()),
                    Section::Assignments,
                )}
                {stat(
                    "fas fa-calendar",
                    "Meetings This Month",
                    Signal::derive(move || store.meetings_this_month().get().to_string()),
                    Section::Schedule,
                )}
                {stat(
                    "fas fa-code",
                    "Projects",
                    Signal::derive(move || store.project_count().get().to_string()),
                    Section::Projects,
                )}
            </div>
            <Show when=move || store.is_leader().get()>
                <JoinCodeCard />
            </Show>
        </section>
    }
}
