//! Duration strings such as `300ms`, `1.5h` or `2h45m`.
//!
//! A duration is an optional sign followed by one or more `<number><unit>` components.
//! Numbers may carry a decimal fraction. Valid units are `ns`, `us` (or `µs`/`μs`),
//! `ms`, `s`, `m` and `h`. A bare `0` needs no unit.
//!
//! `std::time::Duration` is unsigned, so negative non-zero values are rejected.

use std::time::Duration;
use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;
const MAX_FRACTION_DIGITS: u32 = 18;

/// Errors produced by [`parse_duration`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("negative duration {0:?} is not supported")]
    Negative(String),

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    Some(match unit {
        "ns" => 1,
        "us" | "\u{00b5}s" | "\u{03bc}s" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3_600 * NANOS_PER_SEC,
        _ => return None,
    })
}

/// Parse a duration string.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(input.to_string());
    let overflow = || DurationParseError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        // Integer part.
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after_int) = rest.split_at(int_len);
        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse::<u64>().map_err(|_| overflow())?.into()
        };

        // Fraction part.
        let mut frac: u128 = 0;
        let mut scale: u128 = 1;
        let mut frac_len = 0;
        let mut after_num = after_int;
        if let Some(after_dot) = after_int.strip_prefix('.') {
            frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            for digit in after_dot[..frac_len].bytes().take(MAX_FRACTION_DIGITS as usize) {
                frac = frac * 10 + u128::from(digit - b'0');
                scale *= 10;
            }
            after_num = &after_dot[frac_len..];
        }
        if int_len == 0 && frac_len == 0 {
            return Err(invalid());
        }

        // Unit.
        let unit_len = after_num
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_num.len());
        if unit_len == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let (unit, remaining) = after_num.split_at(unit_len);
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let component = whole
            .checked_mul(per_unit)
            .and_then(|nanos| nanos.checked_add(frac * per_unit / scale))
            .ok_or_else(overflow)?;
        total = total.checked_add(component).ok_or_else(overflow)?;
        rest = remaining;
    }

    if negative && total != 0 {
        return Err(DurationParseError::Negative(input.to_string()));
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| overflow())?;
    // Remainder of a division by 1e9 always fits in u32.
    let nanos = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, nanos))
}
