//! HTTP transport for the chain's JSON-RPC API

mod client;

pub use client::{HiveClient, DEFAULT_ENDPOINT};
