//! Dotenv loading and the `ConfigLoader` entry point.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` lines and apply them to an environment source.
//! - Provide a builder-pattern `ConfigLoader` that loads files then populates records.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Field resolution and type conversion (see `populate`).
//!
//! Invariants / Assumptions:
//! - Later files override earlier ones; every load overwrites existing variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod dotenv;
mod error;
mod line;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, parse_to};
pub use dotenv::{DotenvFile, LoadSummary, load, load_all, load_all_into, load_into, read_pairs};
pub use error::ConfigError;
pub use line::parse_line;
