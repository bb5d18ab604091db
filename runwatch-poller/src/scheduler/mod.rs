//! Scheduler layer for the poller
//!
//! Drives the poll loop and decides how long to wait between calls.

pub mod policy;
pub mod poller;

pub use policy::SleepPolicy;
pub use poller::StatusPoller;
