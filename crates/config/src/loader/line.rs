//! Dotenv line parsing.
//!
//! Responsibilities:
//! - Split one raw line into a key and a value at the first `=`.
//!
//! Does NOT handle:
//! - Trimming, quoting, escapes or comments. The line format has none of these.
//!
//! Invariants:
//! - A line without `=`, or starting with `=`, yields `("", "")`.
//! - Everything after the first `=` is the value, including further `=`.

use crate::constants::KEY_VALUE_DELIMITER;

/// Parse a dotenv line into `(key, value)`.
///
/// Returns two empty strings when the line has no delimiter or an empty key;
/// callers treat an empty key as "skip this line".
pub fn parse_line(line: &str) -> (&str, &str) {
    match line.split_once(KEY_VALUE_DELIMITER) {
        Some((key, value)) if !key.is_empty() => (key, value),
        _ => ("", ""),
    }
}
