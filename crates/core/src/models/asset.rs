//! Asset models: NAI objects and legacy asset strings

use crate::{Error, Result, Symbol};
use serde::{Deserialize, Serialize};

/// A fixed-point on-chain amount as returned by the database API
///
/// `amount` is an integer string that may exceed 64 bits;
/// the display value is `amount / 10^precision`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAsset {
    pub amount: String,
    pub precision: u32,
    pub nai: String,
}

impl RawAsset {
    pub fn new(amount: impl Into<String>, precision: u32, nai: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            precision,
            nai: nai.into(),
        }
    }

    /// Symbol for this asset's NAI tag
    pub fn symbol(&self) -> Symbol {
        Symbol::from_nai(&self.nai)
    }

    /// Parse a legacy condenser string such as `"1.234 HIVE"` or `"5000.000000 VESTS"`
    pub fn from_legacy(raw: &str) -> Result<Self> {
        let mut parts = raw.split_whitespace();
        let (number, ticker) = match (parts.next(), parts.next(), parts.next()) {
            (Some(number), Some(ticker), None) => (number, ticker),
            _ => {
                return Err(Error::InvalidData(format!(
                    "Expected \"<amount> <symbol>\", got {:?}",
                    raw
                )))
            }
        };

        let (negative, unsigned) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let digits_ok = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !digits_ok(whole) || !digits_ok(fraction) {
            return Err(Error::InvalidData(format!("Invalid asset amount: {:?}", number)));
        }

        let joined = format!("{}{}", whole, fraction);
        let trimmed = joined.trim_start_matches('0');
        let magnitude = if trimmed.is_empty() { "0" } else { trimmed };
        let amount = if negative && magnitude != "0" {
            format!("-{}", magnitude)
        } else {
            magnitude.to_string()
        };

        let nai = Symbol::from_ticker(ticker)
            .nai()
            .map(str::to_string)
            .unwrap_or_else(|| ticker.to_string());

        Ok(Self {
            amount,
            precision: fraction.len() as u32,
            nai,
        })
    }
}

/// An asset field as it appears in API responses
///
/// The database API emits NAI objects, the condenser API emits
/// legacy strings. Both normalise to [`RawAsset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetField {
    Nai(RawAsset),
    Legacy(String),
}

impl AssetField {
    pub fn to_raw(&self) -> Result<RawAsset> {
        match self {
            AssetField::Nai(asset) => Ok(asset.clone()),
            AssetField::Legacy(text) => RawAsset::from_legacy(text),
        }
    }
}

impl From<RawAsset> for AssetField {
    fn from(asset: RawAsset) -> Self {
        AssetField::Nai(asset)
    }
}

/// A decoded asset ready for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedAsset {
    pub amount: f64,
    pub symbol: Symbol,
}
