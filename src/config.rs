//! Page Configuration
//!
//! Club context handed over by the host page: the dashboard element's data
//! attributes and the optional `window.clubData` object.

use serde::{Deserialize, Deserializer};

use crate::dom;
use crate::models::loose_f64;

/// `window.clubData`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubData {
    pub is_leader: bool,
    #[serde(deserialize_with = "balance_or_zero")]
    pub balance: f64,
    pub name: String,
}

fn balance_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_f64(deserializer)?.unwrap_or(0.0))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageConfig {
    pub club_id: Option<String>,
    pub join_code: Option<String>,
    pub club: ClubData,
}

impl PageConfig {
    /// Blank attribute values count as absent
    pub fn from_parts(club_id: Option<String>, join_code: Option<String>, club: ClubData) -> Self {
        let present = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            club_id: present(club_id),
            join_code: present(join_code),
            club,
        }
    }

    pub fn from_document() -> Self {
        let club = match dom::global_value("clubData") {
            Some(value) => serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring malformed clubData: {}", e);
                ClubData::default()
            }),
            None => ClubData::default(),
        };
        let config = Self::from_parts(
            dom::dashboard_attr("data-club-id"),
            dom::dashboard_attr("data-join-code"),
            club,
        );
        log::info!(
            "[CONFIG] club id: {:?}, join code present: {}, leader: {}",
            config.club_id,
            config.join_code.is_some(),
            config.club.is_leader
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_club_data_camel_case() {
        let data: ClubData = serde_json::from_value(json!({
            "isLeader": true, "balance": "30.00", "name": "Robotics"
        }))
        .unwrap();
        assert_eq!(data, ClubData { is_leader: true, balance: 30.0, name: "Robotics".into() });
    }

    #[test]
    fn test_club_data_defaults() {
        let data: ClubData = serde_json::from_value(json!({})).unwrap();
        assert_eq!(data, ClubData::default());
        let data: ClubData = serde_json::from_value(json!({"balance": null})).unwrap();
        assert_eq!(data.balance, 0.0);
    }

    #[test]
    fn test_blank_attributes_absent() {
        let config = PageConfig::from_parts(Some(" ".into()), Some("ABC123".into()), ClubData::default());
        assert_eq!(config.club_id, None);
        assert_eq!(config.join_code.as_deref(), Some("ABC123"));
    }
}
