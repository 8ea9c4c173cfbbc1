//! Dashboard Sections
//!
//! One component per tab. Every section stays mounted; only the active one
//! is visible. Sections with data refetch whenever their reload version is
//! bumped.

mod overview;
mod stream;
mod assignments;
mod schedule;
mod projects;
mod resources;
mod pizza;
mod shop;
mod members;
mod settings;

pub use overview::OverviewSection;
pub use stream::StreamSection;
pub use assignments::AssignmentsSection;
pub use schedule::ScheduleSection;
pub use projects::ProjectsSection;
pub use resources::ResourcesSection;
pub use pizza::PizzaSection;
pub use shop::ShopSection;
pub use members::MembersSection;
pub use settings::SettingsSection;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};
use crate::error::ApiError;
use crate::loader::{plan_fetch, unavailable_message, FetchPlan, LoadState, ViewPlan};
use crate::navigation::Section;
use crate::toast;

/// `content-section`, plus `active` while `section` is shown
pub(crate) fn section_class(ctx: AppContext, section: Section) -> impl Fn() -> &'static str + Copy {
    move || {
        if ctx.active_section.get() == section {
            "content-section active"
        } else {
            "content-section"
        }
    }
}

/// Fetch `section`'s collection each time its reload version is bumped
///
/// Without a club id no request is made and the state becomes `Unavailable`.
/// A failed fetch toasts and keeps whatever was shown before.
pub(crate) fn use_section_loader<T, F, Fut>(section: Section, noun: &'static str, fetch: F) -> ReadSignal<LoadState<T>>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(String) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let ctx = use_app_context();
    let (state, set_state) = signal(LoadState::<T>::NotLoaded);

    Effect::new(move |_| {
        let version = ctx.version(section);
        let club_id = match plan_fetch(version, ctx.club_id()) {
            FetchPlan::Idle => return,
            FetchPlan::Unavailable => {
                log::warn!("[LOAD] {}: club id is missing, skipping fetch", noun);
                set_state.set(LoadState::Unavailable);
                return;
            }
            FetchPlan::Fetch { club_id } => club_id,
        };
        log::debug!("[LOAD] Fetching {} (v{})", noun, version);
        spawn_local(async move {
            let result = fetch(club_id).await;
            match &result {
                Ok(items) => log::debug!("[LOAD] Loaded {} {}", items.len(), noun),
                Err(e) => {
                    log::error!("[LOAD] Failed to load {}: {}", noun, e);
                    toast::error(&format!("Failed to load {}", noun), "Error");
                }
            }
            set_state.try_update(|s| {
                let previous = std::mem::replace(s, LoadState::NotLoaded);
                *s = previous.apply_result(result);
            });
        });
    });

    state
}

/// Cards, a single empty state, or the missing-club message
pub(crate) fn render_list<T, V>(
    state: LoadState<T>,
    noun: &'static str,
    empty: impl FnOnce() -> AnyView,
    card: impl FnMut(T) -> V,
) -> AnyView
where
    V: IntoView + 'static,
{
    match state.into_plan() {
        ViewPlan::Blank => ().into_any(),
        ViewPlan::Unavailable => view! { <p class="section-error">{unavailable_message(noun)}</p> }.into_any(),
        ViewPlan::Placeholder => empty(),
        ViewPlan::Cards(items) => items.into_iter().map(card).collect_view().into_any(),
    }
}
