//! User profile and preference types for the settings screen.
//!
//! Intended for saving to a file eventually. For now the demo only edits
//! them in memory; "save" is a simulated call that forwards nothing.

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub join_date: String,
    pub total_scans: u32,
    pub sensitivity: Sensitivity,
}

/// How aggressively the (fictional) model flags suspicious content.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Sensitivity {
    Low,
    #[default]
    Medium,
    High,
}

impl Sensitivity {
    pub fn title(&self) -> &'static str {
        match self {
            Sensitivity::Low => "Low Sensitivity",
            Sensitivity::Medium => "Medium Sensitivity (Recommended)",
            Sensitivity::High => "High Sensitivity",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Sensitivity::Low => "Fewer false positives, may miss some threats",
            Sensitivity::Medium => "Balanced detection and false positive rate",
            Sensitivity::High => "Maximum protection, more false positives",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub phishing_alerts: bool,
    pub system_updates: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            phishing_alerts: true,
            system_updates: false,
            weekly_reports: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sensitivity_round_trips_through_strings() {
        for level in [Sensitivity::Low, Sensitivity::Medium, Sensitivity::High] {
            assert_eq!(Sensitivity::from_str(&level.to_string()).unwrap(), level);
        }
        assert!(Sensitivity::from_str("paranoid").is_err());
    }
}
