//! Leading numeric token extraction for formatted spec strings.
//!
//! Spec values arrive as human-readable text ("184 CV", "6.2 L/100km",
//! "7.1 s"). Comparison only needs the magnitude, which is the first numeric
//! token in the string: an optional sign, digits, and at most one decimal
//! point followed by digits. Units and any trailing text are ignored. A sign
//! glued to a preceding letter or digit is a hyphen ("Euro-6d"), not a sign.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?(?:\d+(?:\.\d+)?|\.\d+)").unwrap());

/// Extract the leading numeric token of `text`.
///
/// Returns `None` when the string carries no digits at all; callers treat
/// that as an indeterminate value, never as zero.
///
/// ```rust
/// use autocompare::vehicle::quantity::leading_number;
///
/// assert_eq!(leading_number("184 CV"), Some(184.0));
/// assert_eq!(leading_number("6.2 L/100km"), Some(6.2));
/// assert_eq!(leading_number("n/d"), None);
/// ```
pub fn leading_number(text: &str) -> Option<f64> {
    let m = NUMERIC_TOKEN.find(text)?;
    let token = m.as_str();
    let hyphenated = token.starts_with(['+', '-'])
        && text[..m.start()]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric);
    let token = if hyphenated { &token[1..] } else { token };
    token.parse::<f64>().ok()
}

/// Whether `text` carries a numeric token at all
pub fn has_magnitude(text: &str) -> bool {
    leading_number(text).is_some()
}
