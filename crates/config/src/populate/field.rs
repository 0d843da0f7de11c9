//! Typed field values.
//!
//! Responsibilities:
//! - Describe the kind of a field (`FieldKind`) for error messages.
//! - Convert a resolved string into a field's Rust type (`FieldValue`).
//!
//! Does NOT handle:
//! - Choosing the string to convert (see `resolve.rs`).
//!
//! Invariants:
//! - Integers honour the target width: `"300"` into an `i8` is an error, not a wrap.
//! - Floats are parsed as `f64` and narrowed for `f32` fields.
//! - Lists split on `,` without trimming; only string elements are supported.

use secrecy::SecretString;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use super::convert::{ConvertError, parse_bool_token, split_int_literal};
use super::duration::parse_duration;
use crate::constants::LIST_DELIMITER;

/// The declared kind of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Duration,
    /// Signed integer of the given bit width.
    Int(u32),
    /// Unsigned integer of the given bit width.
    Uint(u32),
    Float(u32),
    Bool,
    String,
    Slice(Box<FieldKind>),
    Map,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Duration => f.write_str("duration"),
            FieldKind::Int(bits) => write!(f, "i{bits}"),
            FieldKind::Uint(bits) => write!(f, "u{bits}"),
            FieldKind::Float(bits) => write!(f, "f{bits}"),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::String => f.write_str("string"),
            FieldKind::Slice(elem) => write!(f, "Vec<{elem}>"),
            FieldKind::Map => f.write_str("map"),
        }
    }
}

/// A type that can be populated from a resolved string.
pub trait FieldValue: Sized {
    fn kind() -> FieldKind;

    fn parse_field(raw: &str) -> Result<Self, ConvertError>;
}

macro_rules! signed_field_value {
    ($($t:ty),* $(,)?) => {$(
        impl FieldValue for $t {
            fn kind() -> FieldKind {
                FieldKind::Int(<$t>::BITS)
            }

            fn parse_field(raw: &str) -> Result<Self, ConvertError> {
                let (radix, literal) = split_int_literal(raw, true);
                <$t>::from_str_radix(&literal, radix).map_err(|source| ConvertError::Integer {
                    value: raw.to_string(),
                    source,
                })
            }
        }
    )*};
}

macro_rules! unsigned_field_value {
    ($($t:ty),* $(,)?) => {$(
        impl FieldValue for $t {
            fn kind() -> FieldKind {
                FieldKind::Uint(<$t>::BITS)
            }

            fn parse_field(raw: &str) -> Result<Self, ConvertError> {
                let (radix, literal) = split_int_literal(raw, false);
                <$t>::from_str_radix(&literal, radix).map_err(|source| ConvertError::Unsigned {
                    value: raw.to_string(),
                    source,
                })
            }
        }
    )*};
}

signed_field_value!(i8, i16, i32, i64, isize);
unsigned_field_value!(u8, u16, u32, u64, usize);

impl FieldValue for f64 {
    fn kind() -> FieldKind {
        FieldKind::Float(64)
    }

    fn parse_field(raw: &str) -> Result<Self, ConvertError> {
        raw.parse::<f64>().map_err(|source| ConvertError::Float {
            value: raw.to_string(),
            source,
        })
    }
}

impl FieldValue for f32 {
    fn kind() -> FieldKind {
        FieldKind::Float(32)
    }

    fn parse_field(raw: &str) -> Result<Self, ConvertError> {
        f64::parse_field(raw).map(|value| value as f32)
    }
}

impl FieldValue for bool {
    fn kind() -> FieldKind {
        FieldKind::Bool
    }

    fn parse_field(raw: &str) -> Result<Self, ConvertError> {
        parse_bool_token(raw).map_err(|source| ConvertError::Bool {
            value: raw.to_string(),
            source,
        })
    }
}

impl FieldValue for String {
    fn kind() -> FieldKind {
        FieldKind::String
    }

    fn parse_field(raw: &str) -> Result<Self, ConvertError> {
        Ok(raw.to_string())
    }
}

impl FieldValue for SecretString {
    fn kind() -> FieldKind {
        FieldKind::String
    }

    fn parse_field(raw: &str) -> Result<Self, ConvertError> {
        Ok(SecretString::new(raw.into()))
    }
}

impl FieldValue for Duration {
    fn kind() -> FieldKind {
        FieldKind::Duration
    }

    fn parse_field(raw: &str) -> Result<Self, ConvertError> {
        parse_duration(raw).map_err(|source| ConvertError::Duration {
            value: raw.to_string(),
            source,
        })
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::Slice(Box::new(T::kind()))
    }

    fn parse_field(raw: &str) -> Result<Self, ConvertError> {
        let elem = T::kind();
        if elem != FieldKind::String {
            return Err(ConvertError::UnsupportedSliceKind { kind: elem });
        }
        raw.split(LIST_DELIMITER).map(T::parse_field).collect()
    }
}

// Maps have no representation in a flat KEY=VALUE file.
impl FieldValue for HashMap<String, String> {
    fn kind() -> FieldKind {
        FieldKind::Map
    }

    fn parse_field(_raw: &str) -> Result<Self, ConvertError> {
        Err(ConvertError::UnsupportedFieldType {
            type_name: std::any::type_name::<Self>(),
        })
    }
}

impl FieldValue for BTreeMap<String, String> {
    fn kind() -> FieldKind {
        FieldKind::Map
    }

    fn parse_field(_raw: &str) -> Result<Self, ConvertError> {
        Err(ConvertError::UnsupportedFieldType {
            type_name: std::any::type_name::<Self>(),
        })
    }
}
