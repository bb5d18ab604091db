//! Service layer
//!
//! Collaborators the poll loop depends on but should not own directly, so
//! tests can swap them out.

mod clock;

pub use clock::Sleeper;
pub use clock::TokioSleeper;
