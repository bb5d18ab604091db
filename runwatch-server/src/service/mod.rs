//! Service Module
//!
//! Business logic layer for the server.

pub mod status;

pub use status::AppState;
pub use status as status_service;
