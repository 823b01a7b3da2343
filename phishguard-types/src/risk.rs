//! Display model for the phishing-scan mock-up.
//!
//! Scores, statuses and indicators are bundled fixtures; no classifier
//! exists behind them.

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ScanKind {
    Url,
    Email,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display)]
pub enum ScanStatus {
    Phishing,
    Safe,
}

/// Risk score banding used across the result and history screens.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn from_score(score: u8) -> RiskBand {
        match score {
            70.. => RiskBand::High,
            40.. => RiskBand::Medium,
            _ => RiskBand::Low,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RiskBand::High => "High Risk - Likely Phishing",
            RiskBand::Medium => "Medium Risk - Suspicious",
            RiskBand::Low => "Low Risk - Appears Safe",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display)]
pub enum Feedback {
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display)]
pub enum ActionTaken {
    Blocked,
    Allowed,
}

impl ActionTaken {
    pub fn explanation(&self) -> &'static str {
        match self {
            ActionTaken::Blocked => {
                "Access has been blocked to protect you from potential threats"
            }
            ActionTaken::Allowed => "Content appears safe and access is allowed",
        }
    }
}

/// One row of the scan history table.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: u32,
    pub kind: ScanKind,
    pub content: String,
    pub risk_score: u8,
    pub status: ScanStatus,
    pub timestamp: String,
    pub feedback: Option<Feedback>,
}

/// The full analysis shown on a detection result page. Only a subset of
/// history rows have one; unknown ids render a not-found state.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScanReport {
    pub id: u32,
    pub content: String,
    pub risk_score: u8,
    pub status: ScanStatus,
    pub indicators: Vec<String>,
    pub action_taken: ActionTaken,
    pub timestamp: String,
    pub model: String,
}

/// Exact-match filter over the history table.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, strum::Display, strum::EnumIter, strum::EnumString,
)]
pub enum HistoryFilter {
    #[default]
    #[strum(serialize = "All Scans")]
    All,
    #[strum(serialize = "Phishing Detected")]
    Phishing,
    #[strum(serialize = "Safe Items")]
    Safe,
    #[strum(serialize = "Needs Feedback")]
    NeedsFeedback,
}

impl HistoryFilter {
    pub fn matches(&self, record: &ScanRecord) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Phishing => record.status == ScanStatus::Phishing,
            HistoryFilter::Safe => record.status == ScanStatus::Safe,
            HistoryFilter::NeedsFeedback => record.feedback.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands_use_original_thresholds() {
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(39), RiskBand::Low);
        assert_eq!(RiskBand::from_score(40), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(69), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(70), RiskBand::High);
        assert_eq!(RiskBand::from_score(100), RiskBand::High);
    }

    #[test]
    fn history_filters_partition_by_status_and_feedback() {
        let record = |status, feedback| ScanRecord {
            id: 1,
            kind: ScanKind::Url,
            content: "https://example.com".into(),
            risk_score: 50,
            status,
            timestamp: "2024-01-15 14:30:25".into(),
            feedback,
        };

        let phishing = record(ScanStatus::Phishing, None);
        let safe = record(ScanStatus::Safe, Some(Feedback::Correct));

        assert!(HistoryFilter::All.matches(&phishing));
        assert!(HistoryFilter::All.matches(&safe));
        assert!(HistoryFilter::Phishing.matches(&phishing));
        assert!(!HistoryFilter::Phishing.matches(&safe));
        assert!(HistoryFilter::Safe.matches(&safe));
        assert!(!HistoryFilter::Safe.matches(&phishing));
        assert!(HistoryFilter::NeedsFeedback.matches(&phishing));
        assert!(!HistoryFilter::NeedsFeedback.matches(&safe));
    }
}
