//! Runwatch Core
//!
//! Types shared by the run-status server and the pollers that query it.
//!
//! This crate contains:
//! - Domain types: the server-side run ledger that decides when to shut down
//! - DTOs: the status query and response exchanged over HTTP

pub mod domain;
pub mod dto;
