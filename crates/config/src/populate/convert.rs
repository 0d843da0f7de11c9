//! String-to-scalar conversions used by `FieldValue` implementations.
//!
//! Responsibilities:
//! - Define `ConvertError`, one variant per conversion kind.
//! - Parse base-prefixed integers (`0x`, `0o`, `0b`, leading `0` octal).
//! - Parse boolean tokens (`1`, `t`, `TRUE`, `0`, `f`, `False`, ...).
//!
//! Invariants:
//! - Every parse failure keeps the standard library error as its `source()`.
//! - Underscore separators are accepted in any base, but only between digits.
//! - Unsigned literals reject a leading sign, `+` included.

use std::borrow::Cow;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

use super::duration::DurationParseError;
use super::field::FieldKind;

/// Errors converting a resolved string into a field value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("parsing duration: {source}")]
    Duration {
        value: String,
        #[source]
        source: DurationParseError,
    },

    #[error("parsing integer {value:?}: {source}")]
    Integer {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("parsing unsigned integer {value:?}: {source}")]
    Unsigned {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("parsing float {value:?}: {source}")]
    Float {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("parsing bool {value:?}: {source}")]
    Bool {
        value: String,
        #[source]
        source: ParseBoolError,
    },

    #[error("unsupported slice kind: {kind}")]
    UnsupportedSliceKind { kind: FieldKind },

    #[error("unsupported field type: {type_name}")]
    UnsupportedFieldType { type_name: &'static str },
}

impl ConvertError {
    /// Short name of the conversion that failed, for logs and exit messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Duration { .. } => "duration",
            ConvertError::Integer { .. } => "integer",
            ConvertError::Unsigned { .. } => "unsigned integer",
            ConvertError::Float { .. } => "float",
            ConvertError::Bool { .. } => "bool",
            ConvertError::UnsupportedSliceKind { .. } => "slice",
            ConvertError::UnsupportedFieldType { .. } => "unsupported",
        }
    }
}

/// Split an integer literal into `(radix, literal)` for `from_str_radix`.
///
/// Base prefixes (`0x`, `0o`, `0b`, leading `0`) pick the radix. Underscores are
/// removed only when every one of them separates digits; otherwise they are kept
/// so that `from_str_radix` rejects the literal. Unsigned literals take no sign.
pub(crate) fn split_int_literal(raw: &str, signed: bool) -> (u32, Cow<'_, str>) {
    let (negative, body) = match raw.as_bytes().first() {
        Some(b'-') if signed => (true, &raw[1..]),
        Some(b'+') if signed => (false, &raw[1..]),
        _ => (false, raw),
    };

    let prefix = body.get(..2).map(str::to_ascii_lowercase);
    let (radix, digits) = match prefix.as_deref() {
        Some("0x") if body.len() > 2 => (16, &body[2..]),
        Some("0o") if body.len() > 2 => (8, &body[2..]),
        Some("0b") if body.len() > 2 => (2, &body[2..]),
        _ if body.len() > 1 && body.starts_with('0') => (8, &body[1..]),
        _ => (10, body),
    };

    // `from_str_radix` accepts one leading `+`; a doubled sign always fails.
    if digits.starts_with(['+', '-']) {
        return (radix, Cow::Owned(format!("+{digits}")));
    }

    let digits = if digits.contains('_') && underscores_ok(body) {
        Cow::Owned(digits.replace('_', ""))
    } else {
        Cow::Borrowed(digits)
    };
    if negative {
        (radix, Cow::Owned(format!("-{digits}")))
    } else {
        (radix, digits)
    }
}

/// Whether every `_` in an unsigned literal sits between two digits. A base
/// prefix counts as a digit, so `0x_ff` is fine and `1__0` or `7_` are not.
fn underscores_ok(body: &str) -> bool {
    let bytes = body.as_bytes();
    let (start, hex) = match bytes {
        [b'0', p, ..] if matches!(p.to_ascii_lowercase(), b'b' | b'o' | b'x') => {
            (2, p.eq_ignore_ascii_case(&b'x'))
        }
        _ => (0, false),
    };

    let mut prev = if start == 2 { b'0' } else { b'^' };
    for &b in &bytes[start..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            prev = b'0';
        } else if b == b'_' {
            if prev != b'0' {
                return false;
            }
            prev = b'_';
        } else {
            if prev == b'_' {
                return false;
            }
            prev = b'!';
        }
    }
    prev != b'_'
}

/// Parse a boolean token.
pub(crate) fn parse_bool_token(raw: &str) -> Result<bool, ParseBoolError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        // Every token `bool::from_str` accepts was matched above, so this is the error path.
        other => other.parse::<bool>(),
    }
}
