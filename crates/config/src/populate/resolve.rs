//! Value resolution for a single field.
//!
//! Responsibilities:
//! - Carry per-field tags (`env` override name, `default` fallback).
//! - Pick the raw string for a field from the source or its default.
//!
//! Does NOT handle:
//! - Type conversion (see `field.rs`).
//! - Deciding whether an unresolved field is an error (see `walker.rs`).
//!
//! Invariants:
//! - Precedence is: `env` override variable, then derived-name variable, then `default`.
//! - A variable that is present but empty counts as found and stops the search.

use std::fmt;

use crate::source::EnvSource;

/// Per-field metadata: the equivalent of `env:"NAME" default:"VALUE"` tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tags<'a> {
    /// Explicit variable name tried before the derived name.
    pub env: Option<&'a str>,
    /// Static fallback, converted like any other resolved string.
    pub default: Option<&'a str>,
}

impl<'a> Tags<'a> {
    /// No override name and no default.
    pub const NONE: Self = Self {
        env: None,
        default: None,
    };

    /// Tags with only an override name.
    pub const fn env(name: &'a str) -> Self {
        Self {
            env: Some(name),
            default: None,
        }
    }

    /// Tags with only a default.
    pub const fn fallback(value: &'a str) -> Self {
        Self {
            env: None,
            default: Some(value),
        }
    }

    /// Add a default to existing tags.
    pub const fn with_default(self, value: &'a str) -> Self {
        Self {
            env: self.env,
            default: Some(value),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Override,
    Derived,
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::Override => "env tag",
            Origin::Derived => "derived name",
            Origin::Default => "default tag",
        })
    }
}

/// A raw value chosen for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub origin: Origin,
}

/// Resolve the raw value of a field whose derived variable name is `derived`.
///
/// Returns `None` when neither variable is set and no default is declared.
pub fn resolve<S: EnvSource + ?Sized>(
    source: &S,
    tags: &Tags<'_>,
    derived: &str,
) -> Option<Resolved> {
    if let Some(value) = tags.env.and_then(|name| source.lookup(name)) {
        return Some(Resolved {
            value,
            origin: Origin::Override,
        });
    }

    if let Some(value) = source.lookup(derived) {
        return Some(Resolved {
            value,
            origin: Origin::Derived,
        });
    }

    tags.default.map(|value| Resolved {
        value: value.to_string(),
        origin: Origin::Default,
    })
}
