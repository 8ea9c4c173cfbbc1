//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::PageConfig;

/// Club-level state shared by the overview, shop and settings
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    pub club_name: String,
    pub is_leader: bool,
    /// Club balance in dollars; updated optimistically after a purchase request
    pub balance: f64,
    pub join_code: Option<String>,
    /// Overview badge counts, written by the section loaders
    pub active_assignments: usize,
    pub meetings_this_month: usize,
    pub project_count: usize,
}

impl DashboardState {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            club_name: config.club.name.clone(),
            is_leader: config.club.is_leader,
            balance: config.club.balance,
            join_code: config.join_code.clone(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply the balance reported after a purchase request
pub fn store_set_balance(store: &DashboardStore, balance: Option<f64>) {
    if let Some(balance) = balance {
        *store.balance().write() = balance;
    }
}

pub fn store_set_join_code(store: &DashboardStore, code: String) {
    *store.join_code().write() = Some(code);
}

pub fn store_set_club_name(store: &DashboardStore, name: String) {
    *store.club_name().write() = name;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClubData;

    #[test]
    fn test_state_from_config() {
        let config = PageConfig::from_parts(
            Some("7".into()),
            Some("JOIN42".into()),
            ClubData { is_leader: true, balance: 30.0, name: "Robotics".into() },
        );
        let state = DashboardState::from_config(&config);
        assert_eq!(state.club_name, "Robotics");
        assert!(state.is_leader);
        assert_eq!(state.balance, 30.0);
        assert_eq!(state.join_code.as_deref(), Some("JOIN42"));
        assert_eq!(state.project_count, 0);
    }
}
