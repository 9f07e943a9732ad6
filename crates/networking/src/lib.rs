//! Hivekit Networking - JSON-RPC client and the remote reputation fetcher

pub mod api;
pub mod http;

pub use api::fetch_reputation;
pub use http::{HiveClient, DEFAULT_ENDPOINT};
