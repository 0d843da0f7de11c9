//! Environment sources read by the resolver and written by the loader.
//!
//! Responsibilities:
//! - Define the narrow `EnvSource` interface (lookup and set by name).
//! - Provide `ProcessEnv`, backed by the real process environment.
//! - Provide `MemoryEnv`, an isolated map for tests and child-process environments.
//!
//! Does NOT handle:
//! - Dotenv file parsing (see `loader`).
//! - Name derivation or precedence between names (see `populate::resolve`).
//!
//! Invariants / Assumptions:
//! - This module is the only place in the workspace that writes the process environment.
//! - Keys containing `=` or NUL and values containing NUL are rejected by every source.
//! - `ProcessEnv` assumes single-threaded or externally synchronized use during writes.

use std::collections::BTreeMap;

use crate::loader::ConfigError;

/// A string-keyed store of environment variables.
pub trait EnvSource {
    /// Look up a variable. `Some("")` means "present but empty".
    fn lookup(&self, key: &str) -> Option<String>;

    /// Set a variable, overwriting any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

impl<S: EnvSource + ?Sized> EnvSource for &mut S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set(key, value)
    }
}

/// Reject keys and values the platform environment cannot hold.
fn validate_var(key: &str, value: &str) -> Result<(), ConfigError> {
    let reason = if key.is_empty() {
        "empty variable name"
    } else if key.contains('=') {
        "variable name contains '='"
    } else if key.contains('\0') {
        "variable name contains NUL"
    } else if value.contains('\0') {
        "value contains NUL"
    } else {
        return Ok(());
    };

    Err(ConfigError::SetVar {
        key: key.to_string(),
        reason,
    })
}

/// The process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "ignoring environment variable with non-unicode value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        validate_var(key, value)?;
        // SAFETY: `validate_var` rules out the inputs `set_var` panics on. Writers
        // are required not to race other threads touching the environment.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// An in-memory environment isolated from the process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables held.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Remove a variable, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl EnvSource for MemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        validate_var(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_memory_env_set_overwrites() {
        let mut env = MemoryEnv::new();
        env.set("KEY", "one").unwrap();
        env.set("KEY", "two").unwrap();

        assert_eq!(env.lookup("KEY").as_deref(), Some("two"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_memory_env_distinguishes_empty_from_absent() {
        let env: MemoryEnv = [("EMPTY", "")].into_iter().collect();

        assert_eq!(env.lookup("EMPTY").as_deref(), Some(""));
        assert_eq!(env.lookup("ABSENT"), None);
    }

    #[test]
    fn test_invalid_names_are_rejected_without_leaking_value() {
        let mut env = MemoryEnv::new();

        for (key, value) in [("", "v"), ("A=B", "v"), ("A\0B", "v"), ("KEY", "sec\0ret")] {
            let err = env.set(key, value).unwrap_err();
            assert!(matches!(err, ConfigError::SetVar { .. }));
            assert!(!err.to_string().contains("sec"), "error leaked value: {err}");
        }
        assert!(env.is_empty());
    }

    #[test]
    #[serial]
    fn test_process_env_roundtrip() {
        let _lock = crate::test_util::global_test_lock().lock().unwrap();
        let key = "_ENVFILL_TEST_PROCESS_ROUNDTRIP";

        temp_env::with_var_unset(key, || {
            let mut env = ProcessEnv;
            assert_eq!(env.lookup(key), None);

            env.set(key, "value").unwrap();
            assert_eq!(env.lookup(key).as_deref(), Some("value"));
            assert_eq!(std::env::var(key).as_deref(), Ok("value"));
        });
    }

    #[test]
    fn test_process_env_empty_key_lookup_is_none() {
        assert_eq!(ProcessEnv.lookup(""), None);
    }
}
