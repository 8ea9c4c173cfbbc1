//! Section Navigation
//!
//! Section identifiers, URL-fragment routing and per-section reload versions.

/// Dashboard sections, one per sidebar link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Stream,
    Assignments,
    Schedule,
    Projects,
    Resources,
    Pizza,
    Shop,
    Members,
    Settings,
}

pub const SECTION_COUNT: usize = 10;

/// Section shown when the URL has no fragment
pub const HOME: Section = Section::Dashboard;

/// Sections loaded at startup so the overview badges are populated
pub const OVERVIEW_SECTIONS: [Section; 4] = [
    Section::Stream,
    Section::Assignments,
    Section::Schedule,
    Section::Projects,
];

impl Section {
    pub const ALL: [Section; SECTION_COUNT] = [
        Section::Dashboard,
        Section::Stream,
        Section::Assignments,
        Section::Schedule,
        Section::Projects,
        Section::Resources,
        Section::Pizza,
        Section::Shop,
        Section::Members,
        Section::Settings,
    ];

    /// Identifier used in `data-section` and the URL fragment
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Stream => "stream",
            Section::Assignments => "assignments",
            Section::Schedule => "schedule",
            Section::Projects => "projects",
            Section::Resources => "resources",
            Section::Pizza => "pizza",
            Section::Shop => "shop",
            Section::Members => "members",
            Section::Settings => "settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Stream => "Stream",
            Section::Assignments => "Assignments",
            Section::Schedule => "Schedule",
            Section::Projects => "Projects",
            Section::Resources => "Resources",
            Section::Pizza => "Pizza Grants",
            Section::Shop => "Shop",
            Section::Members => "Members",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fas fa-home",
            Section::Stream => "fas fa-stream",
            Section::Assignments => "fas fa-clipboard-list",
            Section::Schedule => "fas fa-calendar",
            Section::Projects => "fas fa-code",
            Section::Resources => "fas fa-book",
            Section::Pizza => "fas fa-pizza-slice",
            Section::Shop => "fas fa-shopping-cart",
            Section::Members => "fas fa-users",
            Section::Settings => "fas fa-cog",
        }
    }

    /// Whether opening this section fetches data
    pub fn has_loader(&self) -> bool {
        !matches!(self, Section::Dashboard | Section::Settings)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Section to show at startup for a `location.hash` value
pub fn initial_section(hash: &str) -> Section {
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        return HOME;
    }
    Section::from_id(id).unwrap_or_else(|| {
        log::warn!("[NAV] Section not found: {}", id);
        HOME
    })
}

/// Section to show after a request to open `requested`
///
/// Unknown ids are ignored and the current section stays active.
pub fn resolve(current: Section, requested: &str) -> Section {
    if requested.is_empty() {
        return current;
    }
    match Section::from_id(requested) {
        Some(section) => section,
        None => {
            log::warn!("[NAV] Section not found: {}", requested);
            current
        }
    }
}

/// Sections whose loaders run when the dashboard mounts
///
/// Overview badges need a club id. The initial section loads either way so a
/// missing club shows its unavailable message.
pub fn startup_loads(initial: Section, has_club: bool) -> Vec<Section> {
    let mut loads = if has_club { OVERVIEW_SECTIONS.to_vec() } else { Vec::new() };
    if initial.has_loader() && !loads.contains(&initial) {
        loads.push(initial);
    }
    loads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("nope"), None);
    }

    #[test]
    fn test_initial_section_from_hash() {
        assert_eq!(initial_section(""), Section::Dashboard);
        assert_eq!(initial_section("#"), Section::Dashboard);
        assert_eq!(initial_section("#schedule"), Section::Schedule);
        assert_eq!(initial_section("shop"), Section::Shop);
        assert_eq!(initial_section("#bogus"), Section::Dashboard);
    }

    #[test]
    fn test_unknown_section_keeps_current_active() {
        assert_eq!(resolve(Section::Resources, "bogus"), Section::Resources);
        assert_eq!(resolve(Section::Resources, ""), Section::Resources);
        assert_eq!(resolve(Section::Resources, "pizza"), Section::Pizza);
    }

    #[test]
    fn test_loader_sections() {
        assert!(!Section::Dashboard.has_loader());
        assert!(!Section::Settings.has_loader());
        assert!(Section::Stream.has_loader());
        assert!(Section::Members.has_loader());
        assert!(OVERVIEW_SECTIONS.iter().all(Section::has_loader));
    }

    #[test]
    fn test_startup_loads() {
        assert_eq!(startup_loads(Section::Dashboard, true), OVERVIEW_SECTIONS.to_vec());
        assert_eq!(startup_loads(Section::Stream, true), OVERVIEW_SECTIONS.to_vec());
        let mut with_shop = OVERVIEW_SECTIONS.to_vec();
        with_shop.push(Section::Shop);
        assert_eq!(startup_loads(Section::Shop, true), with_shop);
    }

    #[test]
    fn test_startup_without_club_still_loads_initial() {
        assert_eq!(startup_loads(Section::Assignments, false), vec![Section::Assignments]);
        assert!(startup_loads(Section::Dashboard, false).is_empty());
        assert!(startup_loads(Section::Settings, false).is_empty());
    }
}
