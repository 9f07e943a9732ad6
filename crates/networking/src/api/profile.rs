//! Profile lookups

use crate::HiveClient;
use hivekit_core::Result;

/// Fetch the display reputation of `username` from `endpoint`
///
/// Builds a one-off client; see [`HiveClient::fetch_reputation`] for the
/// fallback rules. Transport failures are returned, not swallowed.
pub async fn fetch_reputation(username: &str, endpoint: &str) -> Result<i64> {
    let client = HiveClient::new(endpoint)?;
    client.fetch_reputation(username).await
}
