//! High-level API wrappers
//!
//! Convenience entry points for callers that only have an endpoint URL
//! and do not want to manage a [`crate::HiveClient`] themselves.

mod profile;

pub use profile::*;
