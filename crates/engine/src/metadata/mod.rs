//! Thumbnail extraction from untrusted post metadata

use serde_json::Value;
use tracing::debug;

/// First usable image URL in a raw `json_metadata` string
///
/// Malformed JSON yields `None`. Only `http://` and `https://` URLs are
/// returned, so `javascript:` or `data:` payloads never reach a widget.
pub fn extract_thumbnail(raw_json: &str) -> Option<String> {
    match serde_json::from_str::<Value>(raw_json) {
        Ok(metadata) => extract_thumbnail_value(&metadata),
        Err(e) => {
            debug!("Ignoring malformed post metadata: {}", e);
            None
        }
    }
}

/// Same as [`extract_thumbnail`] for metadata that is already parsed
pub fn extract_thumbnail_value(metadata: &Value) -> Option<String> {
    let first = metadata.get("image")?.as_array()?.first()?.as_str()?;

    if first.starts_with("http://") || first.starts_with("https://") {
        Some(first.to_string())
    } else {
        None
    }
}
