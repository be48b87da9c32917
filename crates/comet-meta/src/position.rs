//! Sort key coercion.
//!
//! Authors write positions as numbers, numeric strings, or occasionally
//! garbage. Anything that does not yield an integer is treated as absent,
//! never as zero, so it sorts after every positioned sibling.

use serde_json::Value;

/// Coerce a metadata value to an integer position.
///
/// - integers pass through
/// - finite floats truncate toward zero
/// - strings use [`parse_leading_int`]
/// - everything else is absent
///
/// ```
/// use comet_meta::coerce_position;
/// use serde_json::json;
///
/// assert_eq!(coerce_position(&json!(3)), Some(3));
/// assert_eq!(coerce_position(&json!(2.9)), Some(2));
/// assert_eq!(coerce_position(&json!("2.5")), Some(2));
/// assert_eq!(coerce_position(&json!("soon")), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_position(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

/// Parse the leading integer of a string, ignoring surrounding whitespace.
///
/// An optional sign followed by at least one ASCII digit is required;
/// trailing characters are ignored.
#[must_use]
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
