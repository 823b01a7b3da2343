//! Fixed-delay stand-ins for network latency.
//!
//! Every api call sleeps for one of these durations before returning its
//! mock payload. There is no cancellation or retry; the delays exist only
//! so the UI's loading states are visible.

use std::time::Duration;

pub const PLAN_JOURNEY: Duration = Duration::from_millis(1500);
pub const SCAN_HISTORY: Duration = Duration::from_millis(600);
pub const SCAN_REPORT: Duration = Duration::from_millis(400);
pub const SUBMIT_FEEDBACK: Duration = Duration::from_millis(1000);
pub const LEDGER: Duration = Duration::from_millis(500);
pub const ADMIN: Duration = Duration::from_millis(300);
pub const RETRAIN_MODEL: Duration = Duration::from_millis(3000);
pub const SAVE_PROFILE: Duration = Duration::from_millis(1000);

/// Interval between live vehicle position refreshes.
pub const VEHICLE_TICK: Duration = Duration::from_secs(5);

#[cfg(target_arch = "wasm32")]
pub async fn simulate(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn simulate(duration: Duration) {
    tokio::time::sleep(duration).await;
}
