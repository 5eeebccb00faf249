//! Background rotation of the report gate secret.

use std::sync::Arc;
use tokio::time::{interval_at, Duration, Instant};
use tracing::info;

use crate::main_lib::{generate_report_token, AppState};

/// Rotates the report token every `period`. The first rotation happens one
/// full period after startup.
pub fn start_report_token_rotation(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Report token rotation started ({:?} interval)", period);
        let mut ticks = interval_at(Instant::now() + period, period);
        loop {
            ticks.tick().await;
            state.report_gate.rotate(generate_report_token());
        }
    });
}
