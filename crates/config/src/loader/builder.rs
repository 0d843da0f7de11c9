//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` over any `EnvSource`.
//! - Load dotenv files in order, then populate a `Configurable` record.
//! - Provide the `parse_to` shortcut used by most callers.
//!
//! Does NOT handle:
//! - Dotenv file parsing (delegated to dotenv.rs).
//! - Field resolution and conversion (delegated to `populate`).
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` must be called explicitly to apply dotenv files.
//! - The `DOTENV_DISABLED` variable is checked on the source before any file is read.
//! - With no files configured, `load_dotenv()` loads `.env`.

use std::path::{Path, PathBuf};

use super::dotenv::{LoadSummary, load_all_into};
use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED_VAR;
use crate::populate::{Configurable, populate};
use crate::source::{EnvSource, ProcessEnv};

/// Configuration loader that applies dotenv files to a source and builds records from it.
#[derive(Debug)]
pub struct ConfigLoader<S = ProcessEnv> {
    source: S,
    env_files: Vec<PathBuf>,
    summaries: Vec<LoadSummary>,
}

impl Default for ConfigLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader<ProcessEnv> {
    /// Create a loader backed by the process environment.
    pub fn new() -> Self {
        Self {
            source: ProcessEnv,
            env_files: Vec::new(),
            summaries: Vec::new(),
        }
    }
}

impl<S: EnvSource> ConfigLoader<S> {
    /// Replace the environment source, keeping configured files.
    pub fn with_source<T: EnvSource>(self, source: T) -> ConfigLoader<T> {
        ConfigLoader {
            source,
            env_files: self.env_files,
            summaries: Vec::new(),
        }
    }

    /// Add a dotenv file. Files are loaded in the order they were added.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_files.push(path.into());
        self
    }

    /// Add several dotenv files.
    pub fn with_env_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.env_files
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Check if dotenv loading is disabled via the source.
    fn dotenv_disabled(&self) -> bool {
        matches!(
            self.source.lookup(DOTENV_DISABLED_VAR).as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Apply the configured dotenv files to the source.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1" in the source, no file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A file exists but cannot be opened or read (`ConfigError::DotenvOpen`/`DotenvRead`)
    /// - The source rejects a key (`ConfigError::SetVar`)
    ///
    /// Missing files are silently ignored.
    pub fn load_dotenv(mut self) -> Result<Self, ConfigError> {
        if self.dotenv_disabled() {
            tracing::debug!("dotenv loading disabled by {}", DOTENV_DISABLED_VAR);
            return Ok(self);
        }

        let summaries = load_all_into(&mut self.source, &self.env_files)?;
        self.summaries.extend(summaries);
        Ok(self)
    }

    /// Per-file results of `load_dotenv()`, in load order.
    pub fn summaries(&self) -> &[LoadSummary] {
        &self.summaries
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Populate a fresh record from the source.
    pub fn build<C: Configurable + Default>(&self) -> Result<C, ConfigError> {
        populate(&self.source)
    }
}

/// Load each dotenv file in order into the process environment, then populate `C`.
///
/// With no paths, `.env` is loaded. Missing files are ignored.
pub fn parse_to<C, I, P>(paths: I) -> Result<C, ConfigError>
where
    C: Configurable + Default,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut source = ProcessEnv;
    load_all_into(&mut source, paths)?;
    populate(&source)
}
