//! Status API Handler

use axum::{
    Json,
    extract::{Query, State},
};
use runwatch_core::dto::status::{RunStatus, StatusQuery};

use crate::service::{AppState, status_service};

/// GET /?run={run}
/// Tell a poller whether its run should shut down
pub async fn get_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Json<RunStatus> {
    tracing::debug!("Status call for run {:?}", query.run);

    Json(status_service::report_status(&state, query.run.as_deref()).await)
}
