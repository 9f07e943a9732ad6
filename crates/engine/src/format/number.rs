//! Magnitude abbreviation for large integers

/// Suffixes and their decimal exponents, largest first
const MAGNITUDES: [(usize, &str); 4] = [(12, "T"), (9, "B"), (6, "M"), (3, "K")];

/// Abbreviate an integer string with K/M/B/T and one decimal place
///
/// `"4500"` becomes `"4.5K"`, `"1500000000000"` becomes `"1.5T"`. Rounding
/// is half-up and done on the digits themselves, so any width works.
/// Values below 1000 and non-integer input are returned unchanged.
pub fn abbreviate(n: &str) -> String {
    let (sign, unsigned) = match n.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", n),
    };

    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return n.to_string();
    }

    let digits = match unsigned.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let Some(&(exponent, suffix)) = MAGNITUDES.iter().find(|(exp, _)| digits.len() > *exp) else {
        return n.to_string();
    };

    // integer part plus one decimal digit, then round on the digit after it
    let keep = digits.len() - exponent + 1;
    let mut tenths = digits[..keep].to_string();
    if digits.as_bytes()[keep] >= b'5' {
        tenths = increment_decimal(&tenths);
    }

    let (whole, fraction) = tenths.split_at(tenths.len() - 1);
    format!("{}{}.{}{}", sign, whole, fraction, suffix)
}

/// Add one to a decimal digit string
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8(bytes).unwrap_or_default();
        }
    }
    let mut carried = String::with_capacity(bytes.len() + 1);
    carried.push('1');
    carried.push_str(&String::from_utf8(bytes).unwrap_or_default());
    carried
}
