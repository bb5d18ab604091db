//! Core domain types
//!
//! Business state that lives on the status server. Pollers never see these
//! directly, only the DTOs produced from them.

pub mod run;
