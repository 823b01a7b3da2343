//! The simulated backend.
//!
//! Every function here is the demo's stand-in for a network call: it logs,
//! sleeps for a fixed duration and returns mock data. None of them can
//! fail, but the `Result` shape is kept so screens render the usual
//! loading / error / ok arms and a real backend could slot in later.
//! Mutating calls (`submit_feedback`, `add_domain`, `save_profile`)
//! forward their input nowhere.

pub mod latency;
mod mock_db;

use std::hash::Hash;
use std::hash::Hasher;

use dioxus_logger::tracing;
use phishguard_types::admin::ActivityEvent;
use phishguard_types::admin::DomainEntry;
use phishguard_types::admin::DomainListKind;
use phishguard_types::admin::ModelMetrics;
use phishguard_types::admin::SystemStats;
use phishguard_types::ledger::LedgerEntry;
use phishguard_types::ledger::LedgerStats;
use phishguard_types::prefs::UserProfile;
use phishguard_types::risk::Feedback;
use phishguard_types::risk::ScanRecord;
use phishguard_types::risk::ScanReport;
use phishguard_types::transit::plan_journey as generate_plan;
use phishguard_types::transit::simulate_vehicle_positions;
use phishguard_types::transit::JourneyPlan;
use phishguard_types::transit::JourneyQuery;
use phishguard_types::transit::VehiclePosition;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type ApiError = anyhow::Error;

pub use mock_db::MODEL_NAME;

/// Wall-clock based seed so repeated requests differ. OS entropy is
/// deliberately not used; it is unavailable on the wasm target without an
/// extra getrandom backend, and placeholder data does not warrant one.
fn clock_seeded_rng(extra: impl Hash) -> StdRng {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    let now = web_time::SystemTime::now()
        .duration_since(web_time::UNIX_EPOCH)
        .unwrap_or_default();
    now.as_millis().hash(&mut hasher);
    now.subsec_nanos().hash(&mut hasher);
    extra.hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}

/// Plans a journey between two free-text place names.
///
/// The query is not geocoded or validated beyond what the caller already
/// did; unknown places produce routes like any other. Returns exactly
/// three options sorted fastest-first.
pub async fn plan_journey(query: JourneyQuery) -> Result<JourneyPlan, ApiError> {
    tracing::info!("planning journey {} -> {}", query.start, query.end);
    latency::simulate(latency::PLAN_JOURNEY).await;
    let mut rng = clock_seeded_rng((&query.start, &query.end));
    Ok(generate_plan(&query, &mut rng))
}

/// Current simulated bus positions. No delay; the caller drives the
/// refresh interval.
pub async fn vehicle_positions() -> Result<Vec<VehiclePosition>, ApiError> {
    let mut rng = clock_seeded_rng("vehicles");
    Ok(simulate_vehicle_positions(&mut rng))
}

pub async fn scan_history() -> Result<Vec<ScanRecord>, ApiError> {
    tracing::info!("fetching scan history");
    latency::simulate(latency::SCAN_HISTORY).await;
    Ok(mock_db::scan_history())
}

pub async fn scan_report(id: u32) -> Result<Option<ScanReport>, ApiError> {
    tracing::info!("fetching scan report {id}");
    latency::simulate(latency::SCAN_REPORT).await;
    Ok(mock_db::scan_report(id))
}

/// Records nothing; the mock acknowledges after its delay.
pub async fn submit_feedback(id: u32, feedback: Feedback) -> Result<(), ApiError> {
    tracing::info!("feedback for scan {id}: {feedback}");
    latency::simulate(latency::SUBMIT_FEEDBACK).await;
    Ok(())
}

pub async fn ledger_entries() -> Result<Vec<LedgerEntry>, ApiError> {
    tracing::info!("fetching ledger entries");
    latency::simulate(latency::LEDGER).await;
    Ok(mock_db::ledger_entries())
}

pub async fn ledger_stats() -> Result<LedgerStats, ApiError> {
    latency::simulate(latency::LEDGER).await;
    Ok(mock_db::ledger_stats())
}

pub async fn system_stats() -> Result<SystemStats, ApiError> {
    latency::simulate(latency::ADMIN).await;
    Ok(mock_db::system_stats())
}

pub async fn model_metrics() -> Result<ModelMetrics, ApiError> {
    latency::simulate(latency::ADMIN).await;
    Ok(mock_db::model_metrics())
}

pub async fn recent_activity() -> Result<Vec<ActivityEvent>, ApiError> {
    latency::simulate(latency::ADMIN).await;
    Ok(mock_db::recent_activity())
}

pub async fn domain_list(kind: DomainListKind) -> Result<Vec<DomainEntry>, ApiError> {
    tracing::info!("fetching {kind}");
    latency::simulate(latency::ADMIN).await;
    Ok(mock_db::domain_list(kind))
}

/// Logs the request and drops it; the fixture lists never change.
pub async fn add_domain(kind: DomainListKind, domain: String) -> Result<(), ApiError> {
    tracing::info!("adding {domain} to {kind}");
    latency::simulate(latency::ADMIN).await;
    Ok(())
}

/// The retrain button's three-second spinner.
pub async fn retrain_model() -> Result<(), ApiError> {
    tracing::info!("retraining model {}", MODEL_NAME);
    latency::simulate(latency::RETRAIN_MODEL).await;
    Ok(())
}

pub async fn user_profile() -> Result<UserProfile, ApiError> {
    latency::simulate(latency::ADMIN).await;
    Ok(mock_db::user_profile())
}

/// Acknowledges after its delay without persisting anything.
pub async fn save_profile(profile: UserProfile) -> Result<(), ApiError> {
    tracing::info!("saving profile for {}", profile.id);
    latency::simulate(latency::SAVE_PROFILE).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishguard_types::risk::ScanStatus;
    use phishguard_types::transit::TransportMode;

    #[tokio::test]
    async fn planned_journeys_are_ranked_and_complete() {
        let query = JourneyQuery::new("Majestic", "Indiranagar");
        let plan = plan_journey(query).await.unwrap();

        assert_eq!(plan.options.len(), 3);
        for mode in TransportMode::ALL {
            assert!(plan.options.iter().any(|o| o.mode == mode));
        }
        assert!(plan
            .options
            .windows(2)
            .all(|pair| pair[0].duration_min <= pair[1].duration_min));
    }

    #[tokio::test]
    async fn consecutive_vehicle_ticks_keep_identity() {
        let first = vehicle_positions().await.unwrap();
        let second = vehicle_positions().await.unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
        }
    }

    #[tokio::test]
    async fn history_and_reports_agree_on_the_demo_scans() {
        let history = scan_history().await.unwrap();
        assert_eq!(history.len(), 5);

        for record in &history {
            let report = scan_report(record.id).await.unwrap();
            if let Some(report) = report {
                assert_eq!(report.risk_score, record.risk_score);
                assert_eq!(report.status, record.status);
                assert!(!report.indicators.is_empty());
            }
        }

        // Only the two demo scans carry a full report.
        assert!(scan_report(1).await.unwrap().is_some());
        assert!(scan_report(2).await.unwrap().is_some());
        assert!(scan_report(3).await.unwrap().is_none());
        assert!(scan_report(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ledger_fixture_is_consistent_with_its_stats() {
        let entries = ledger_entries().await.unwrap();
        let stats = ledger_stats().await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            stats.latest_block,
            entries.iter().map(|e| e.block_number).max().unwrap()
        );
    }

    #[tokio::test]
    async fn mutating_calls_always_acknowledge() {
        submit_feedback(1, Feedback::Incorrect).await.unwrap();
        add_domain(DomainListKind::Blacklist, "phish.example".into())
            .await
            .unwrap();
        let profile = user_profile().await.unwrap();
        save_profile(profile).await.unwrap();
    }

    #[tokio::test]
    async fn history_mixes_statuses() {
        let history = scan_history().await.unwrap();
        assert!(history.iter().any(|r| r.status == ScanStatus::Phishing));
        assert!(history.iter().any(|r| r.status == ScanStatus::Safe));
        assert!(history.iter().any(|r| r.feedback.is_none()));
    }
}
