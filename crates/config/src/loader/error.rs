//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for dotenv loading, environment writes and field population.
//! - Keep the underlying I/O or conversion error reachable through `source()`.
//!
//! Does NOT handle:
//! - Conversion error details (see `populate::convert::ConvertError`).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, variable names, field names).
//! - Errors NEVER include raw .env values or resolved field values, only keys and names.

use std::path::PathBuf;
use thiserror::Error;

use crate::populate::ConvertError;

/// Errors that can occur while loading dotenv files or populating a record.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The dotenv file exists but could not be opened.
    #[error("opening dotenv file {path}")]
    DotenvOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dotenv file was opened but reading a line failed.
    #[error("reading dotenv file {path}")]
    DotenvRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The environment source refused a variable.
    ///
    /// SAFETY: Only the key is reported; the value may be a secret.
    #[error("setting {key}: {reason}")]
    SetVar { key: String, reason: &'static str },

    /// No environment variable and no default supplied a value for a field.
    ///
    /// `vars` lists every variable that would have satisfied the field, in lookup order.
    #[error("no value for field: {field} (set {} or declare a default)", vars.join(" or "))]
    MissingValue { field: String, vars: Vec<String> },

    /// The resolved value could not be converted into the field's type.
    #[error("field {field} ({var}): {source}")]
    Convert {
        field: String,
        var: String,
        #[source]
        source: ConvertError,
    },
}

impl ConfigError {
    /// Returns the conversion error when this is a `Convert` failure.
    pub fn as_convert(&self) -> Option<&ConvertError> {
        match self {
            ConfigError::Convert { source, .. } => Some(source),
            _ => None,
        }
    }
}
