//! The bundled fixture tables behind every endpoint.
//!
//! In a real deployment these would come from a detection service and a
//! ledger node; here they are constants rebuilt on each call.

use phishguard_types::admin::ActivityEvent;
use phishguard_types::admin::DomainEntry;
use phishguard_types::admin::DomainListKind;
use phishguard_types::admin::ModelMetrics;
use phishguard_types::admin::SystemStats;
use phishguard_types::ledger::LedgerAction;
use phishguard_types::ledger::LedgerEntry;
use phishguard_types::ledger::LedgerStats;
use phishguard_types::ledger::LedgerStatus;
use phishguard_types::prefs::Sensitivity;
use phishguard_types::prefs::UserProfile;
use phishguard_types::risk::ActionTaken;
use phishguard_types::risk::Feedback;
use phishguard_types::risk::ScanKind;
use phishguard_types::risk::ScanRecord;
use phishguard_types::risk::ScanReport;
use phishguard_types::risk::ScanStatus;
use serde_json::json;

pub const MODEL_NAME: &str = "PhishNet-V2.1";

pub fn scan_history() -> Vec<ScanRecord> {
    vec![
        ScanRecord {
            id: 1,
            kind: ScanKind::Url,
            content: "https://suspicious-bank-login.com".into(),
            risk_score: 85,
            status: ScanStatus::Phishing,
            timestamp: "2024-01-15 14:30:25".into(),
            feedback: None,
        },
        ScanRecord {
            id: 2,
            kind: ScanKind::Url,
            content: "https://github.com/user/repo".into(),
            risk_score: 15,
            status: ScanStatus::Safe,
            timestamp: "2024-01-15 14:25:10".into(),
            feedback: Some(Feedback::Correct),
        },
        ScanRecord {
            id: 3,
            kind: ScanKind::Email,
            content: "Urgent: Account Verification Required - Please click here to verify..."
                .into(),
            risk_score: 92,
            status: ScanStatus::Phishing,
            timestamp: "2024-01-15 14:20:45".into(),
            feedback: Some(Feedback::Correct),
        },
        ScanRecord {
            id: 4,
            kind: ScanKind::Url,
            content: "https://legitimate-service.com/dashboard".into(),
            risk_score: 5,
            status: ScanStatus::Safe,
            timestamp: "2024-01-15 14:15:30".into(),
            feedback: None,
        },
        ScanRecord {
            id: 5,
            kind: ScanKind::Email,
            content: "Welcome to our newsletter! Here are the latest updates...".into(),
            risk_score: 88,
            status: ScanStatus::Phishing,
            timestamp: "2024-01-15 14:10:15".into(),
            feedback: Some(Feedback::Incorrect),
        },
    ]
}

/// Full reports exist for the two demo scans only.
pub fn scan_report(id: u32) -> Option<ScanReport> {
    match id {
        1 => Some(ScanReport {
            id: 1,
            content: "https://suspicious-bank-login.com".into(),
            risk_score: 85,
            status: ScanStatus::Phishing,
            indicators: vec![
                "Suspicious domain pattern".into(),
                "Unusual keywords detected".into(),
                "No valid SSL certificate".into(),
                "Domain registered recently".into(),
            ],
            action_taken: ActionTaken::Blocked,
            timestamp: "2024-01-15 14:30:25".into(),
            model: MODEL_NAME.into(),
        }),
        2 => Some(ScanReport {
            id: 2,
            content: "https://github.com/user/repo".into(),
            risk_score: 15,
            status: ScanStatus::Safe,
            indicators: vec![
                "Legitimate domain".into(),
                "Valid SSL certificate".into(),
                "Known safe patterns".into(),
            ],
            action_taken: ActionTaken::Allowed,
            timestamp: "2024-01-15 14:25:10".into(),
            model: MODEL_NAME.into(),
        }),
        _ => None,
    }
}

pub fn ledger_entries() -> Vec<LedgerEntry> {
    vec![
        LedgerEntry {
            id: "0x7a8f...".into(),
            hash: "0x7a8f9b2c4d5e6f1a2b3c4d5e6f7g8h9i0j1k2l3m4n5o6p7q8r9s0t1u2v3w4x5y6z".into(),
            timestamp: "2024-01-15 14:30:25".into(),
            user_id: "user_12345".into(),
            action: LedgerAction::PhishingDetected,
            payload: json!({
                "url": "https://suspicious-bank-login.com",
                "riskScore": 85,
                "status": "blocked",
            }),
            status: LedgerStatus::Verified,
            block_number: 145_892,
            gas_used: 21_000,
        },
        LedgerEntry {
            id: "0x6b7e...".into(),
            hash: "0x6b7e8a1c3d4e5f0a1b2c3d4e5f6g7h8i9j0k1l2m3n4o5p6q7r8s9t0u1v2w3x4y5z".into(),
            timestamp: "2024-01-15 14:25:10".into(),
            user_id: "user_12345".into(),
            action: LedgerAction::UrlVerifiedSafe,
            payload: json!({
                "url": "https://github.com/user/repo",
                "riskScore": 15,
                "status": "allowed",
            }),
            status: LedgerStatus::Verified,
            block_number: 145_891,
            gas_used: 21_000,
        },
        LedgerEntry {
            id: "0x5a6d...".into(),
            hash: "0x5a6d7c0b2e3f4g5h6i7j8k9l0m1n2o3p4q5r6s7t8u9v0w1x2y3z4a5b6c7d8e9f0g".into(),
            timestamp: "2024-01-15 14:20:45".into(),
            user_id: "user_67890".into(),
            action: LedgerAction::EmailScanned,
            payload: json!({
                "subject": "Urgent: Account Verification Required",
                "riskScore": 92,
                "status": "blocked",
            }),
            status: LedgerStatus::Pending,
            block_number: 145_890,
            gas_used: 21_000,
        },
    ]
}

pub fn ledger_stats() -> LedgerStats {
    LedgerStats {
        verified_entries: 156,
        pending_entries: 3,
        latest_block: 145_892,
    }
}

pub fn system_stats() -> SystemStats {
    SystemStats {
        total_scans: 247,
        threats_detected: 31,
        blocked_threats: 31,
        beta_testers: 12,
    }
}

pub fn model_metrics() -> ModelMetrics {
    ModelMetrics {
        accuracy: 94.7,
        precision: 92.3,
        recall: 89.7,
    }
}

pub fn domain_list(kind: DomainListKind) -> Vec<DomainEntry> {
    let entry = |domain: &str, added_by: &str, date: &str| DomainEntry {
        domain: domain.into(),
        added_by: added_by.into(),
        date: date.into(),
    };
    match kind {
        DomainListKind::Blacklist => vec![
            entry("phishing-site.com", "admin", "2024-01-15"),
            entry("fake-bank.net", "admin", "2024-01-14"),
            entry("suspicious-login.org", "system", "2024-01-13"),
        ],
        DomainListKind::Whitelist => vec![
            entry("github.com", "admin", "2024-01-10"),
            entry("stackoverflow.com", "admin", "2024-01-10"),
            entry("company-domain.com", "admin", "2024-01-09"),
        ],
    }
}

pub fn recent_activity() -> Vec<ActivityEvent> {
    let event = |action: &str, user: &str, timestamp: &str| ActivityEvent {
        action: action.into(),
        user: user.into(),
        timestamp: timestamp.into(),
    };
    vec![
        event("Model retrained", "system", "2024-01-15 15:30:00"),
        event("Blacklist updated", "admin", "2024-01-15 14:45:00"),
        event("False positive reported", "user_123", "2024-01-15 14:20:00"),
        event("Threat blocked", "system", "2024-01-15 14:15:00"),
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        id: "user_12345".into(),
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        role: "user".into(),
        join_date: "2024-01-10".into(),
        total_scans: 47,
        sensitivity: Sensitivity::Medium,
    }
}
