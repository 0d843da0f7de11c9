//! Derived variable names.
//!
//! Responsibilities:
//! - Convert a field identifier into an UPPER_SNAKE_CASE segment.
//! - Join derived segments of ancestor records into a full variable name.
//!
//! Invariants:
//! - Every uppercase letter after the first character starts a new segment, so
//!   acronyms split per letter: `DBPort` -> `D_B_PORT`.
//! - Existing underscores pass through unchanged.

use crate::constants::NAME_SEGMENT_SEPARATOR;

/// Convert a camelCase, PascalCase or snake_case identifier to SNAKE_CASE.
pub fn camel_to_snake(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, c) in ident.char_indices() {
        if i > 0 && c.is_uppercase() {
            out.push(NAME_SEGMENT_SEPARATOR);
        }
        out.extend(c.to_uppercase());
    }

    out
}

/// Derive the variable name of `ident` below an already-derived `prefix`.
pub fn derive_name(prefix: &str, ident: &str) -> String {
    let segment = camel_to_snake(ident);
    if prefix.is_empty() {
        return segment;
    }
    let mut name = String::with_capacity(prefix.len() + 1 + segment.len());
    name.push_str(prefix);
    name.push(NAME_SEGMENT_SEPARATOR);
    name.push_str(&segment);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        let cases = [
            ("PascalCase", "PASCAL_CASE"),
            ("camelCase", "CAMEL_CASE"),
            ("snake_case", "SNAKE_CASE"),
            ("lowercase", "LOWERCASE"),
            ("DBPort", "D_B_PORT"),
            ("HTTPServer", "H_T_T_P_SERVER"),
            ("UserID", "USER_I_D"),
            ("Http2Port", "HTTP2_PORT"),
            ("snake_Case", "SNAKE__CASE"),
            ("", ""),
        ];

        for (have, want) in cases {
            assert_eq!(camel_to_snake(have), want, "input: {have}");
        }
    }

    #[test]
    fn test_derive_name_joins_segments() {
        assert_eq!(derive_name("", "Home"), "HOME");
        assert_eq!(derive_name("NESTED", "Value"), "NESTED_VALUE");
        assert_eq!(derive_name("DATABASE", "max_conns"), "DATABASE_MAX_CONNS");
        assert_eq!(derive_name("APP_DATABASE", "poolSize"), "APP_DATABASE_POOL_SIZE");
        assert_eq!(derive_name(&camel_to_snake("TLS"), "Enabled"), "T_L_S_ENABLED");
    }
}
