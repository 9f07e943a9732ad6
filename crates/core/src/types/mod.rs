//! Shared type definitions, newtypes, and chain constants

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds for a manabar to regenerate from empty to full (5 days)
pub const REGEN_PERIOD_SECONDS: u64 = 432_000;

/// Display reputation for new or undetermined accounts
pub const DEFAULT_REPUTATION: i64 = 25;

/// The downvote pool is a quarter of the voting pool
pub const DOWNVOTE_POOL_DIVISOR: u128 = 4;

/// Fixed-point precision of VESTS amounts
pub const VESTS_PRECISION: u32 = 6;

/// NAI tag for the liquid token
pub const NAI_HIVE: &str = "@@000000021";
/// NAI tag for the dollar-pegged token
pub const NAI_HBD: &str = "@@000000013";
/// NAI tag for staked shares
pub const NAI_VESTS: &str = "@@000000037";

/// Display symbol of an on-chain unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    Hive,
    Hbd,
    Vests,
    Unknown,
}

impl Symbol {
    /// Look up the symbol for a NAI tag, `Unknown` if unmapped
    pub fn from_nai(nai: &str) -> Self {
        match nai {
            NAI_HIVE => Symbol::Hive,
            NAI_HBD => Symbol::Hbd,
            NAI_VESTS => Symbol::Vests,
            _ => Symbol::Unknown,
        }
    }

    /// Look up the symbol for a legacy ticker. Pre-fork tickers map to their successors.
    pub fn from_ticker(ticker: &str) -> Self {
        match ticker {
            "HIVE" | "STEEM" | "TESTS" => Symbol::Hive,
            "HBD" | "SBD" | "TBD" => Symbol::Hbd,
            "VESTS" => Symbol::Vests,
            _ => Symbol::Unknown,
        }
    }

    /// NAI tag for this symbol (None for `Unknown`)
    pub fn nai(&self) -> Option<&'static str> {
        match self {
            Symbol::Hive => Some(NAI_HIVE),
            Symbol::Hbd => Some(NAI_HBD),
            Symbol::Vests => Some(NAI_VESTS),
            Symbol::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Hive => "HIVE",
            Symbol::Hbd => "HBD",
            Symbol::Vests => "VESTS",
            Symbol::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reputation value as handed over by the API layer
///
/// Holds the stringified form. Raw chain reputations are integers
/// (`"95832978796820"`), convenience endpoints return already scaled
/// floats (`"79.75"`); the converter tells them apart by the decimal point.
///
/// Floats are stringified with `f64`'s `Display`, which drops a `.0`, so
/// `72.0` arrives as `"72"` whether it came in as an `f64` or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReputationInput(String);

impl ReputationInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReputationInput {
    fn from(value: &str) -> Self {
        ReputationInput(value.to_string())
    }
}

impl From<String> for ReputationInput {
    fn from(value: String) -> Self {
        ReputationInput(value)
    }
}

impl From<i64> for ReputationInput {
    fn from(value: i64) -> Self {
        ReputationInput(value.to_string())
    }
}

impl From<u64> for ReputationInput {
    fn from(value: u64) -> Self {
        ReputationInput(value.to_string())
    }
}

impl From<f64> for ReputationInput {
    fn from(value: f64) -> Self {
        ReputationInput(value.to_string())
    }
}

impl From<&serde_json::Value> for ReputationInput {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => ReputationInput(s.clone()),
            serde_json::Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(float) => ReputationInput::from(float),
                None => ReputationInput(n.to_string()),
            },
            serde_json::Value::Number(n) => ReputationInput(n.to_string()),
            serde_json::Value::Null => ReputationInput("null".to_string()),
            _ => ReputationInput(String::new()),
        }
    }
}

/// Parse a chain timestamp as UTC
///
/// The chain emits `2024-01-15T12:30:00` without a zone suffix; it is always UTC.
/// Timestamps that do carry a zone are honoured.
pub fn parse_chain_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let with_zone = format!("{}Z", raw);
    if let Ok(dt) = DateTime::parse_from_rfc3339(&with_zone) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(Symbol::from_nai("@@000000021"), Symbol::Hive);
        assert_eq!(Symbol::from_nai("@@000000013"), Symbol::Hbd);
        assert_eq!(Symbol::from_nai("@@000000037"), Symbol::Vests);
        assert_eq!(Symbol::from_nai("@@999999999"), Symbol::Unknown);
        assert_eq!(Symbol::from_ticker("STEEM"), Symbol::Hive);
        assert_eq!(Symbol::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_chain_time_is_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        assert_eq!(parse_chain_time("2024-01-15T12:30:00"), Some(expected));
        assert_eq!(parse_chain_time("2024-01-15T12:30:00Z"), Some(expected));
        assert_eq!(parse_chain_time("2024-01-15T14:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_chain_time_rejects_garbage() {
        assert_eq!(parse_chain_time(""), None);
        assert_eq!(parse_chain_time("yesterday"), None);
        assert_eq!(parse_chain_time("1970-01-01T00:00:00").map(|t| t.timestamp()), Some(0));
    }

    #[test]
    fn test_whole_floats_agree_across_sources() {
        let from_f64 = ReputationInput::from(72.0);
        let from_json = ReputationInput::from(&serde_json::json!(72.0));
        assert_eq!(from_f64, from_json);
        assert_eq!(from_json.as_str(), "72");
    }

    #[test]
    fn test_reputation_input_stringifies() {
        assert_eq!(ReputationInput::from(79.75).as_str(), "79.75");
        assert_eq!(ReputationInput::from(-12i64).as_str(), "-12");
        assert_eq!(ReputationInput::from(f64::NAN).as_str(), "NaN");
        assert_eq!(ReputationInput::from(&serde_json::Value::Null).as_str(), "null");
        assert_eq!(ReputationInput::from(&serde_json::json!(79.75)).as_str(), "79.75");
        assert_eq!(
            ReputationInput::from(&serde_json::json!(95832978796820u64)).as_str(),
            "95832978796820"
        );
        assert_eq!(
            ReputationInput::from(&serde_json::json!("123456789012")).as_str(),
            "123456789012"
        );
    }
}
