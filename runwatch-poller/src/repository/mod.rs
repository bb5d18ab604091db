//! Repository layer
//!
//! Stateless access to the status server. Trait-based so the poll loop can
//! be driven by canned responses in tests.

mod status;

pub use status::HttpStatusRepository;
pub use status::StatusRepository;
