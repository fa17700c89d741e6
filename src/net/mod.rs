//! REST plumbing for the enrollment backend.
//!
//! `api` holds one async helper per endpoint, `types` the wire structs
//! (including the lenient decoders the backend's double-encoded rows
//! require), and `error` the client-wide error taxonomy.

pub mod api;
pub mod error;
pub mod types;
