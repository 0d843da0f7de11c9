//! Record traversal.
//!
//! Responsibilities:
//! - Define `Configurable`, the per-record field table walked by the engine.
//! - Resolve, convert and assign each leaf field in declaration order.
//! - Thread the derived name prefix through nested records of any depth.
//!
//! Does NOT handle:
//! - Loading dotenv files (see `loader`).
//!
//! Invariants:
//! - Every leaf must resolve, from a variable or a default, at every depth.
//! - The first error aborts the walk; the partially populated record is discarded.
//! - Resolved values are never logged, only the variable name and the tier used.

use super::field::FieldValue;
use super::naming::derive_name;
use super::resolve::{Origin, Tags, resolve};
use crate::loader::ConfigError;
use crate::source::EnvSource;

/// A record whose fields can be populated from an environment.
///
/// Implementations visit every field in declaration order:
///
/// ```
/// use envfill_config::{ConfigError, Configurable, Tags, Walker};
///
/// #[derive(Default)]
/// struct Database {
///     host: String,
///     port: u16,
/// }
///
/// impl Configurable for Database {
///     fn visit(&mut self, w: &mut Walker<'_>) -> Result<(), ConfigError> {
///         w.field("Host", &mut self.host, Tags::fallback("localhost"))?;
///         w.field("Port", &mut self.port, Tags::env("PGPORT").with_default("5432"))
///     }
/// }
/// ```
pub trait Configurable {
    fn visit(&mut self, walker: &mut Walker<'_>) -> Result<(), ConfigError>;
}

/// Walks a record against an environment source.
pub struct Walker<'s> {
    source: &'s dyn EnvSource,
    prefix: String,
}

impl<'s> Walker<'s> {
    /// Create a walker at the top level (empty prefix).
    pub fn new(source: &'s dyn EnvSource) -> Self {
        Self {
            source,
            prefix: String::new(),
        }
    }

    /// Derived name of the record currently being walked; empty at the top level.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Populate one leaf field.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingValue` if no variable is set and no default is declared.
    /// - `ConfigError::Convert` if the resolved string does not parse as `T`.
    pub fn field<T: FieldValue>(
        &mut self,
        ident: &str,
        slot: &mut T,
        tags: Tags<'_>,
    ) -> Result<(), ConfigError> {
        let derived = derive_name(&self.prefix, ident);

        let Some(resolved) = resolve(self.source, &tags, &derived) else {
            let vars = match tags.env {
                Some(name) if name != derived => vec![name.to_string(), derived],
                _ => vec![derived],
            };
            return Err(ConfigError::MissingValue {
                field: ident.to_string(),
                vars,
            });
        };

        let var = match (resolved.origin, tags.env) {
            (Origin::Override, Some(name)) => name.to_string(),
            _ => derived,
        };
        tracing::trace!(field = ident, var = %var, origin = %resolved.origin, "resolved field");

        *slot = T::parse_field(&resolved.value).map_err(|source| ConfigError::Convert {
            field: ident.to_string(),
            var,
            source,
        })?;
        Ok(())
    }

    /// Populate a nested record, extending the prefix with `ident`.
    pub fn nested<C: Configurable + ?Sized>(
        &mut self,
        ident: &str,
        record: &mut C,
    ) -> Result<(), ConfigError> {
        let inner = derive_name(&self.prefix, ident);
        let outer = std::mem::replace(&mut self.prefix, inner);
        let result = record.visit(self);
        self.prefix = outer;
        result
    }
}

/// Populate an existing record in place.
///
/// On error the record may be partially written and should be discarded.
pub fn populate_into<C, S>(record: &mut C, source: &S) -> Result<(), ConfigError>
where
    C: Configurable + ?Sized,
    S: EnvSource,
{
    record.visit(&mut Walker::new(source))
}

/// Create a record from its `Default` and populate it.
pub fn populate<C, S>(source: &S) -> Result<C, ConfigError>
where
    C: Configurable + Default,
    S: EnvSource,
{
    let mut record = C::default();
    populate_into(&mut record, source)?;
    Ok(record)
}
