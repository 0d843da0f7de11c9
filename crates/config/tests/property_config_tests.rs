//! Property-based tests for dotenv parsing, name derivation and conversion.
//!
//! These tests use randomly generated inputs to catch edge cases that the
//! table-driven unit tests might miss.
//!
//! Test coverage:
//! - parse_line: well-formed lines split at the first `=`; malformed lines are skipped
//! - load_into: loading a file twice equals loading it once
//! - camel_to_snake: output is upper case and differs from the input only by separators
//! - FieldValue: canonical integer and duration strings convert back to their value

use proptest::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use envfill_config::{FieldValue, MemoryEnv, camel_to_snake, load_into, parse_line};

/// Strategy for generating dotenv keys: non-empty, no `=`, no newline.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_.]{0,24}".prop_map(String::from)
}

/// Strategy for generating values, which may be empty and may contain `=`.
fn value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,40}".prop_map(String::from)
}

/// Strategy for generating identifiers in mixed case styles.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,20}".prop_map(String::from)
}

proptest! {
    #[test]
    fn well_formed_lines_split_at_first_delimiter(key in key_strategy(), value in value_strategy()) {
        let line = format!("{key}={value}");
        prop_assert_eq!(parse_line(&line), (key.as_str(), value.as_str()));
    }

    #[test]
    fn lines_without_key_are_skipped(value in "[^=\n]{0,40}") {
        prop_assert_eq!(parse_line(&value), ("", ""));
        let leading = format!("={value}");
        prop_assert_eq!(parse_line(&leading), ("", ""));
    }

    #[test]
    fn loading_twice_equals_loading_once(
        pairs in prop::collection::vec((key_strategy(), value_strategy()), 0..12)
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prop.env");
        let contents: String = pairs.iter().map(|(k, v)| format!("{k}={v}\n")).collect();
        fs::write(&path, contents).unwrap();

        let mut once = MemoryEnv::new();
        let mut twice = MemoryEnv::new();
        load_into(&mut once, &path).unwrap();
        load_into(&mut twice, &path).unwrap();
        load_into(&mut twice, &path).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn derived_names_only_change_case_and_add_separators(ident in ident_strategy()) {
        let derived = camel_to_snake(&ident);
        prop_assert!(!derived.chars().any(char::is_lowercase));
        prop_assert_eq!(
            derived.replace('_', ""),
            ident.to_uppercase().replace('_', "")
        );
    }

    #[test]
    fn canonical_integers_convert(value in any::<i64>()) {
        prop_assert_eq!(i64::parse_field(&value.to_string()), Ok(value));
        prop_assert_eq!(i64::parse_field(&format!("{value:#x}")).ok(), (value >= 0).then_some(value));
    }

    #[test]
    fn canonical_durations_convert(secs in 0u64..1_000_000, millis in 0u64..1000) {
        let raw = format!("{secs}s{millis}ms");
        prop_assert_eq!(
            Duration::parse_field(&raw),
            Ok(Duration::from_secs(secs) + Duration::from_millis(millis))
        );
    }
}
