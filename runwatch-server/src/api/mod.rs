//! API Module
//!
//! HTTP API layer for the server.

pub mod health;
pub mod status;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::service::AppState;

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Run status
        .route("/", get(status::get_status))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
