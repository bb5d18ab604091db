//! Health Check API Handler

use axum::{Json, extract::State};
use serde_json::{Value as JsonValue, json};

use crate::service::AppState;

/// GET /health
/// Liveness probe, also reports the latest run seen
pub async fn health_check(State(state): State<AppState>) -> Json<JsonValue> {
    Json(json!({
        "status": "ok",
        "latestRun": state.latest_run().await,
    }))
}
