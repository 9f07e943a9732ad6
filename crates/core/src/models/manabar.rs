//! Manabar models

use serde::{Deserialize, Serialize};

/// Last observed state of a regenerating resource pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManabarSnapshot {
    /// Mana at `last_update_time`, decimal integer string
    pub current: String,
    /// Pool ceiling, decimal integer string
    pub max: String,
    /// Unix seconds of the last on-chain update
    pub last_update_time: i64,
}

/// Manabar state at a given instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManabarResult {
    pub current: String,
    pub max: String,
    /// Fill level in `[0, 100]`, two decimals
    pub percentage: f64,
    /// Seconds until the pool is full again
    pub cooldown_seconds: u64,
}

/// `voting_manabar` / `downvote_manabar` object on an account
///
/// `current_mana` is a JSON number on some nodes and a string on others,
/// and can exceed what an f64 holds exactly, so it is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManabarField {
    #[serde(deserialize_with = "deserialize_integer_string")]
    pub current_mana: String,
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub last_update_time: i64,
}

/// Deserialize an integer that may arrive as a number or a string, keeping its digits
pub(crate) fn deserialize_integer_string<'de, D>(
    deserializer: D,
) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct IntegerString;

    impl<'de> de::Visitor<'de> for IntegerString {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer as number or string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IntegerString)
}

/// Deserialize an i64 that may arrive as a number or a string
pub(crate) fn deserialize_i64_lenient<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct I64Lenient;

    impl<'de> de::Visitor<'de> for I64Lenient {
        type Value = i64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i64, E> {
            i64::try_from(v).map_err(de::Error::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i64, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<i64, E> {
            v.parse::<i64>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(I64Lenient)
}
