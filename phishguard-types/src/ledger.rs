//! Display model for the "blockchain log" screen.
//!
//! The entries are a bundled fixture styled after an append-only ledger;
//! no chain, consensus or verification exists.

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LedgerAction {
    PhishingDetected,
    UrlVerifiedSafe,
    EmailScanned,
}

impl LedgerAction {
    /// The raw event tag as it would appear on chain.
    pub fn tag(&self) -> &'static str {
        match self {
            LedgerAction::PhishingDetected => "PHISHING_DETECTED",
            LedgerAction::UrlVerifiedSafe => "URL_VERIFIED_SAFE",
            LedgerAction::EmailScanned => "EMAIL_SCANNED",
        }
    }

    /// Human form of the tag, underscores replaced with spaces.
    pub fn display_name(&self) -> String {
        self.tag().replace('_', " ")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display)]
pub enum LedgerStatus {
    Verified,
    Pending,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub hash: String,
    pub timestamp: String,
    pub user_id: String,
    pub action: LedgerAction,
    /// Arbitrary event payload, pretty-printed in the details pane.
    pub payload: serde_json::Value,
    pub status: LedgerStatus,
    pub block_number: u64,
    pub gas_used: u64,
}

impl LedgerEntry {
    pub fn short_hash(&self) -> &str {
        &self.hash[..self.hash.len().min(20)]
    }

    /// Case-insensitive substring match over hash, user id and action tag.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.hash.to_lowercase().contains(&term)
            || self.user_id.to_lowercase().contains(&term)
            || self.action.tag().to_lowercase().contains(&term)
    }
}

/// Headline numbers above the entry list. Fixed display content.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LedgerStats {
    pub verified_entries: u64,
    pub pending_entries: u64,
    pub latest_block: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> LedgerEntry {
        LedgerEntry {
            id: "0x7a8f...".into(),
            hash: "0x7a8f9b2c4d5e6f1a2b3c4d5e6f".into(),
            timestamp: "2024-01-15 14:30:25".into(),
            user_id: "user_12345".into(),
            action: LedgerAction::PhishingDetected,
            payload: json!({"url": "https://suspicious-bank-login.com"}),
            status: LedgerStatus::Verified,
            block_number: 145_892,
            gas_used: 21_000,
        }
    }

    #[test]
    fn search_matches_hash_user_and_action_case_insensitively() {
        let entry = entry();
        assert!(entry.matches_search(""));
        assert!(entry.matches_search("0x7A8F"));
        assert!(entry.matches_search("USER_123"));
        assert!(entry.matches_search("phishing_detected"));
        assert!(!entry.matches_search("user_67890"));
        assert!(!entry.matches_search("email_scanned"));
    }

    #[test]
    fn short_hash_is_bounded() {
        assert_eq!(entry().short_hash().len(), 20);
        let mut tiny = entry();
        tiny.hash = "0xab".into();
        assert_eq!(tiny.short_hash(), "0xab");
    }

    #[test]
    fn display_name_replaces_underscores() {
        assert_eq!(
            LedgerAction::UrlVerifiedSafe.display_name(),
            "URL VERIFIED SAFE"
        );
    }
}
