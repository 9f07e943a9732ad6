//! Reputation score conversion
//!
//! Raw chain reputations are large signed integers. The display score is
//! `floor(max(log10(rep) - 9, 0) * sign * 9 + 25)`, where the logarithm is
//! taken from the leading four digits and the digit count so that integers
//! beyond 2^53 never pass through an f64.

use hivekit_core::{ReputationInput, DEFAULT_REPUTATION};
use tracing::debug;

/// Nudge applied to the leading-digit logarithm by the reference formula
const LOG_EPSILON: f64 = 0.000_000_01;

/// Convert a raw or pre-scaled reputation into its display score
///
/// Values containing a decimal point are treated as already scaled
/// (convenience profile endpoints return e.g. `72.41`) and are only floored.
/// Whole-valued floats (`72.0` as `f64` or JSON number) stringify without a
/// point and take the raw path; pass them as `"72.0"` to keep them scaled.
/// Empty, sentinel (`undefined`, `null`, `NaN`), zero, or unparseable input
/// yields the default of 25.
pub fn convert_reputation(input: impl Into<ReputationInput>) -> i64 {
    let input = input.into();
    let text = input.as_str();

    if matches!(text, "" | "undefined" | "null" | "NaN") {
        return DEFAULT_REPUTATION;
    }

    let (neg, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    if unsigned.contains('.') {
        return match unsigned.parse::<f64>() {
            Ok(scaled) if scaled.is_finite() => {
                let signed = if neg { -scaled } else { scaled };
                signed.floor() as i64
            }
            _ => {
                debug!("Unparseable scaled reputation {:?}, using default", text);
                DEFAULT_REPUTATION
            }
        };
    }

    let Some(log) = reputation_log10(unsigned) else {
        debug!("Unparseable raw reputation {:?}, using default", text);
        return DEFAULT_REPUTATION;
    };

    let mut level = (log - 9.0).max(0.0);
    if neg {
        level = -level;
    }
    (level * 9.0 + 25.0).floor() as i64
}

/// Base-10 logarithm of a non-negative decimal integer string
///
/// Uses the first four significant digits plus the digit count, matching
/// the chain's reference client. Returns `None` for non-digit input and zero.
pub fn reputation_log10(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return None;
    }

    let lead_len = significant.len().min(4);
    let leading: u32 = significant[..lead_len].parse().ok()?;
    let log = f64::from(leading).log10() + LOG_EPSILON;
    let magnitude = (significant.len() - 1) as f64;

    Some(magnitude + (log - log.trunc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Independent rendering of the reference formula for comparison
    fn reference(rep: &str) -> i64 {
        let (neg, digits) = match rep.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rep),
        };
        let leading: f64 = digits[..digits.len().min(4)].parse().unwrap();
        let l = leading.ln() / std::f64::consts::LN_10 + 0.00000001;
        let log = (digits.len() - 1) as f64 + (l - l.trunc());
        let level = (log - 9.0).max(0.0) * if neg { -1.0 } else { 1.0 };
        (level * 9.0 + 25.0).floor() as i64
    }

    #[test]
    fn test_defaults() {
        assert_eq!(convert_reputation(0i64), 25);
        assert_eq!(convert_reputation(""), 25);
        assert_eq!(convert_reputation("NaN"), 25);
        assert_eq!(convert_reputation("null"), 25);
        assert_eq!(convert_reputation("undefined"), 25);
        assert_eq!(convert_reputation("-0"), 25);
        assert_eq!(convert_reputation("12ab"), 25);
        assert_eq!(convert_reputation(f64::NAN), 25);
        assert_eq!(convert_reputation(&serde_json::Value::Null), 25);
    }

    #[test]
    fn test_scaled_values_are_floored() {
        assert_eq!(convert_reputation("79.75"), 79);
        assert_eq!(convert_reputation("-5.5"), -6);
        assert_eq!(convert_reputation(72.41), 72);
        assert_eq!(convert_reputation(&serde_json::json!(68.5)), 68);
        assert_eq!(convert_reputation("1.2.3"), 25);
    }

    #[test]
    fn test_whole_floats_read_as_raw_from_any_source() {
        // no decimal point survives stringification, so 72.0 is a tiny raw value
        assert_eq!(convert_reputation(72.0), 25);
        assert_eq!(convert_reputation(&serde_json::json!(72.0)), 25);
        assert_eq!(convert_reputation("72.0"), 72);
    }

    #[test]
    fn test_small_raw_values_floor_at_25() {
        assert_eq!(convert_reputation("1"), 25);
        assert_eq!(convert_reputation(999_999_999i64), 25);
        assert_eq!(convert_reputation("-999999999"), 25);
    }

    #[test]
    fn test_known_accounts() {
        // 10^12 -> log 12 -> 25 + 27
        assert_eq!(convert_reputation("1000000000000"), 52);
        assert_eq!(convert_reputation("95832978796820"), 69);
        assert_eq!(convert_reputation(&serde_json::json!("95832978796820")), 69);
        assert_eq!(convert_reputation("-1000000000000"), -3);
    }

    #[test]
    fn test_matches_reference_for_wide_integers() {
        let samples = [
            "1000000000",
            "2500000000",
            "123456789012",
            "9999999999999",
            "95832978796820",
            "410178166212637",
            "7000000000000000000000",
            "18446744073709551617",
            "340282366920938463463374607431768211457",
            "-48193045017",
            "-7270238917250",
        ];
        for rep in samples {
            assert_eq!(convert_reputation(rep), reference(rep), "mismatch for {}", rep);
        }
    }

    #[test]
    fn test_log10_precision() {
        let log = reputation_log10("10000000000000000000000000").unwrap();
        assert!((log - 25.0).abs() < 1e-6);
        assert_eq!(reputation_log10("0"), None);
        assert_eq!(reputation_log10("-5"), None);
        assert_eq!(reputation_log10("00120").map(|l| l.floor()), Some(2.0));
    }
}
