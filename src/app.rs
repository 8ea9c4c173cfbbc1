//! Club Dashboard App
//!
//! Root component: provides context and the store, wires hash navigation and
//! lays out the sidebar with every section.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::sections::{
    AssignmentsSection, MembersSection, OverviewSection, PizzaSection, ProjectsSection,
    ResourcesSection, ScheduleSection, SettingsSection, ShopSection, StreamSection,
};
use crate::components::{ConfirmHost, Sidebar, VerificationModal};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::dom;
use crate::navigation::{initial_section, HOME};
use crate::store::DashboardState;

/// Route back/forward navigation through `open_section`
fn listen_for_hash_changes(ctx: AppContext) {
    let Some(window) = web_sys::window() else { return };
    let on_change = Closure::<dyn Fn(web_sys::HashChangeEvent)>::new(move |_: web_sys::HashChangeEvent| {
        let hash = dom::location_hash();
        let id = hash.trim_start_matches('#');
        let id = if id.is_empty() { HOME.id() } else { id };
        // The sidebar sets the hash after opening; skip the echo
        if ctx.active_section.get_untracked().id() == id {
            return;
        }
        ctx.open_section(id);
    });
    if let Err(e) = window.add_event_listener_with_callback("hashchange", on_change.as_ref().unchecked_ref()) {
        log::error!("[NAV] Could not listen for hash changes: {:?}", e);
    }
    // Lives as long as the page
    on_change.forget();
}

#[component]
pub fn App() -> impl IntoView {
    let config = PageConfig::from_document();
    let initial = initial_section(&dom::location_hash());
    let store = Store::new(DashboardState::from_config(&config));
    let ctx = AppContext::new(config, initial);

    provide_context(ctx);
    provide_context(store);

    listen_for_hash_changes(ctx);

    ctx.load_startup_sections();

    view! {
        <div class="dashboard-layout">
            <Sidebar />
            <main class="dashboard-main">
                <OverviewSection />
                <StreamSection />
                <AssignmentsSection />
                <ScheduleSection />
                <ProjectsSection />
                <ResourcesSection />
                <PizzaSection />
                <ShopSection />
                <MembersSection />
                <SettingsSection />
            </main>
            <ConfirmHost />
            <VerificationModal />
        </div>
    }
}
