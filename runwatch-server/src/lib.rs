//! Runwatch Server
//!
//! Tells pollers whether the run they are processing data for is still the
//! latest one. A poller reporting an older run than the newest seen is told
//! to shut down.

pub mod api;
pub mod config;
pub mod service;
