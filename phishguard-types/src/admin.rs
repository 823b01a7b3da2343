//! Display model for the admin dashboard. All values are fixtures.

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_scans: u64,
    pub threats_detected: u64,
    pub blocked_threats: u64,
    pub beta_testers: u64,
}

/// Fixed model performance percentages for the progress bars.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display)]
pub enum DomainListKind {
    Blacklist,
    Whitelist,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DomainEntry {
    pub domain: String,
    pub added_by: String,
    pub date: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub action: String,
    pub user: String,
    pub timestamp: String,
}
