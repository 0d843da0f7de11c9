//! Dotenv loading and typed configuration records for envfill.
//!
//! This crate loads `KEY=VALUE` files into an environment and populates
//! user-defined configuration records from it, converting each variable into
//! the field's Rust type.

pub mod constants;
mod loader;
mod populate;
pub mod source;

pub use loader::{
    ConfigError, ConfigLoader, DotenvFile, LoadSummary, load, load_all, load_all_into, load_into,
    parse_line, parse_to, read_pairs,
};
pub use populate::{
    Configurable, ConvertError, DurationParseError, FieldKind, FieldValue, Origin, Resolved, Tags,
    Walker, camel_to_snake, derive_name, parse_duration, populate, populate_into, resolve,
};
pub use source::{EnvSource, MemoryEnv, ProcessEnv};
