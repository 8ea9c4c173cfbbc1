//! Application Context
//!
//! Page config, navigation and shared modal state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_modal::ConfirmRequest;

use crate::config::PageConfig;
use crate::navigation::{resolve, startup_loads, Section, SECTION_COUNT};
use crate::verification::VerificationFlow;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Host page config, read once at mount
    pub config: StoredValue<PageConfig>,
    /// Currently visible section - read
    pub active_section: ReadSignal<Section>,
    /// Currently visible section - write
    set_active_section: WriteSignal<Section>,
    /// Reload counter per section, one signal each
    versions: [RwSignal<u32>; SECTION_COUNT],
    /// Pending confirmation dialog
    pub confirm: RwSignal<Option<ConfirmRequest>>,
    /// Step-up verification flow (single pending slot)
    pub verification: RwSignal<VerificationFlow>,
}

impl AppContext {
    pub fn new(config: PageConfig, initial: Section) -> Self {
        let (active_section, set_active_section) = signal(initial);
        Self {
            config: StoredValue::new(config),
            active_section,
            set_active_section,
            versions: std::array::from_fn(|_| RwSignal::new(0)),
            confirm: RwSignal::new(None),
            verification: RwSignal::new(VerificationFlow::default()),
        }
    }

    pub fn club_id(&self) -> Option<String> {
        self.config.with_value(|c| c.club_id.clone())
    }

    pub fn join_code(&self) -> Option<String> {
        self.config.with_value(|c| c.join_code.clone())
    }

    /// Activate `id` and run its loader; unknown ids leave the current section active
    pub fn open_section(&self, id: &str) {
        let known = Section::from_id(id).is_some();
        let next = resolve(self.active_section.get_untracked(), id);
        if !known {
            return;
        }
        log::debug!("[NAV] Opening section: {}", next.id());
        self.set_active_section.set(next);
        if next.has_loader() {
            self.reload(next);
        }
    }

    /// Trigger a reload of one section
    pub fn reload(&self, section: Section) {
        self.versions[section.index()].update(|v| *v = v.wrapping_add(1));
    }

    /// Reload counter for a section (tracked)
    pub fn version(&self, section: Section) -> u32 {
        self.versions[section.index()].get()
    }

    /// Run the loaders due at mount: overview badges and the initial section
    pub fn load_startup_sections(&self) {
        let has_club = self.club_id().is_some();
        if !has_club {
            log::warn!("[APP] No club id on the page; sections will not fetch");
        }
        for section in startup_loads(self.active_section.get_untracked(), has_club) {
            self.reload(section);
        }
    }

    /// Ask for confirmation before running `on_confirm`
    pub fn confirm(&self, message: impl Into<String>, details: Option<String>, on_confirm: impl Fn() + Send + Sync + 'static) {
        self.confirm.set(Some(ConfirmRequest::new(
            message.into(),
            details,
            Callback::new(move |_| on_confirm()),
        )));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use leptos::reactive::owner::Owner;

    use crate::loader::{plan_fetch, FetchPlan};

    fn club_config() -> PageConfig {
        PageConfig {
            club_id: Some("7".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_reload_reruns_only_that_section() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(club_config(), Section::Dashboard);

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let assignments = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            ctx.version(Section::Assignments)
        });
        assert_eq!(assignments.get_untracked(), 0);

        ctx.reload(Section::Assignments);
        assert_eq!(assignments.get_untracked(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        ctx.reload(Section::Resources);
        ctx.reload(Section::Stream);
        assert_eq!(assignments.get_untracked(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(ctx.version(Section::Stream), 1);
    }

    #[test]
    fn test_open_section_bumps_loader_sections() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(club_config(), Section::Dashboard);

        ctx.open_section("schedule");
        assert_eq!(ctx.active_section.get_untracked(), Section::Schedule);
        assert_eq!(ctx.version(Section::Schedule), 1);

        ctx.open_section("settings");
        assert_eq!(ctx.active_section.get_untracked(), Section::Settings);
        assert_eq!(ctx.version(Section::Settings), 0);

        ctx.open_section("bogus");
        assert_eq!(ctx.active_section.get_untracked(), Section::Settings);
    }

    #[test]
    fn test_startup_without_club_reaches_unavailable() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(PageConfig::default(), Section::Assignments);
        ctx.load_startup_sections();

        assert_eq!(ctx.version(Section::Assignments), 1);
        assert_eq!(ctx.version(Section::Stream), 0);
        assert_eq!(
            plan_fetch(ctx.version(Section::Assignments), ctx.club_id()),
            FetchPlan::Unavailable
        );
    }

    #[test]
    fn test_startup_with_club_loads_overview() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new(club_config(), Section::Shop);
        ctx.load_startup_sections();

        for section in [Section::Stream, Section::Assignments, Section::Schedule, Section::Projects, Section::Shop] {
            assert_eq!(ctx.version(section), 1, "{:?}", section);
        }
        assert_eq!(ctx.version(Section::Members), 0);
        assert_eq!(
            plan_fetch(ctx.version(Section::Shop), ctx.club_id()),
            FetchPlan::Fetch { club_id: "7".into() }
        );
    }
}
