//! Account fields that feed the manabar and vesting conversions

use super::{AssetField, ManabarField};
use serde::{Deserialize, Serialize};

/// The subset of an account object needed to compute its manabars
///
/// Deserializes from `condenser_api.get_accounts` (legacy asset strings)
/// and `database_api.find_accounts` (NAI objects). Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountManaFields {
    pub name: String,
    pub voting_manabar: ManabarField,
    #[serde(default)]
    pub downvote_manabar: Option<ManabarField>,
    pub vesting_shares: AssetField,
    pub received_vesting_shares: AssetField,
    pub delegated_vesting_shares: AssetField,
    #[serde(default)]
    pub vesting_withdraw_rate: Option<AssetField>,
    /// Raw reputation, integer as number or string
    #[serde(default)]
    pub reputation: Option<serde_json::Value>,
    /// Profile JSON blob, itself a JSON-encoded string
    #[serde(default)]
    pub posting_json_metadata: Option<String>,
}
