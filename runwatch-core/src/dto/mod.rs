//! Data Transfer Objects for the status endpoint
//!
//! Both the server (serializing) and the client (deserializing) use these,
//! so the wire format is defined in exactly one place.

pub mod status;
