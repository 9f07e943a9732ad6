//! Hivekit Engine - Conversions from raw chain values to display values
//!
//! Everything here is synchronous and stateless. Bad input degrades to a
//! documented default (25, 0, `None`, `"unknown"`) rather than an error.

pub mod format;
pub mod manabar;
pub mod metadata;
pub mod reputation;
pub mod value;

pub use format::{abbreviate, format_cooldown, relative_time, relative_time_at};
pub use manabar::{
    compute_manabar, compute_manabar_at, compute_snapshot_at, downvote_manabar, voting_manabar,
};
pub use metadata::{extract_thumbnail, extract_thumbnail_value};
pub use reputation::{convert_reputation, reputation_log10};
pub use value::{
    decode_asset, effective_vesting_shares, format_asset, max_downvote_mana, max_voting_mana,
    shares_to_value, vests_to_hive,
};
