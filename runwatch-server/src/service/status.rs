//! Status Service
//!
//! Answers status calls from pollers against the shared run ledger.

use std::sync::Arc;

use runwatch_core::domain::run::{RunLedger, parse_run_number};
use runwatch_core::dto::status::RunStatus;
use tokio::sync::Mutex;

/// Shared state handed to every request handler
#[derive(Debug, Clone, Default)]
pub struct AppState {
    ledger: Arc<Mutex<RunLedger>>,
}

impl AppState {
    pub fn new(initial_run: i64) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(RunLedger::new(initial_run))),
        }
    }

    /// Highest run number seen so far
    pub async fn latest_run(&self) -> i64 {
        self.ledger.lock().await.latest_run()
    }
}

/// Record a status call and decide whether the caller should shut down
///
/// A `run` value that is missing or not a number is counted but never
/// triggers a shutdown.
pub async fn report_status(state: &AppState, run: Option<&str>) -> RunStatus {
    let parsed = run.and_then(parse_run_number);

    if parsed.is_none() {
        tracing::warn!("Status call without a usable run number: {:?}", run);
    }

    let mut ledger = state.ledger.lock().await;
    let previous = ledger.latest_run();
    let status = ledger.observe(parsed);

    if status.shutdown {
        tracing::info!(
            "Run {:?} is older than latest run {}, requesting shutdown",
            parsed,
            previous
        );
    } else if ledger.latest_run() != previous {
        tracing::info!("Latest run is now {}", ledger.latest_run());
    }

    status
}
