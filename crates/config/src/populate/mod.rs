//! Field population engine.
//!
//! Responsibilities:
//! - Walk a `Configurable` record's fields, nested records included.
//! - Derive an UPPER_SNAKE_CASE variable name per field from its identifier path.
//! - Resolve a raw string from the `env` tag, the derived name, or the `default` tag.
//! - Convert the raw string into the field's type and report typed errors.
//!
//! Does NOT handle:
//! - Reading dotenv files (see `loader`).
//! - Validation beyond per-field type conversion.
//!
//! Invariants / Assumptions:
//! - Records declare their fields explicitly through `Configurable::visit`; there is
//!   no runtime reflection.
//! - All reads go through an `EnvSource`, so tests can populate from a `MemoryEnv`.

mod convert;
mod duration;
mod field;
mod naming;
mod resolve;
mod walker;

pub use convert::ConvertError;
pub use duration::{DurationParseError, parse_duration};
pub use field::{FieldKind, FieldValue};
pub use naming::{camel_to_snake, derive_name};
pub use resolve::{Origin, Resolved, Tags, resolve};
pub use walker::{Configurable, Walker, populate, populate_into};
