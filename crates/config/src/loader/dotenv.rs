//! Dotenv file loading.
//!
//! Responsibilities:
//! - Read a dotenv file into ordered key/value pairs.
//! - Apply those pairs to an `EnvSource`, overwriting existing values.
//! - Load several files in order so later files override earlier ones.
//!
//! Does NOT handle:
//! - Splitting individual lines (see `line.rs`).
//! - The `DOTENV_DISABLED` gate (applied by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - An empty path means `.env`; an empty path list means `[".env"]`.
//! - A missing file is not an error; it loads nothing and reports `found = false`.
//! - Blank lines are skipped before parsing; malformed lines are skipped and counted.
//! - The file handle is dropped before any function here returns.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::line::parse_line;
use crate::constants::DEFAULT_DOTENV_FILE;
use crate::source::{EnvSource, ProcessEnv};

/// The parsed contents of one dotenv file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvFile {
    pub path: PathBuf,
    /// Key/value pairs in file order. Keys may repeat; the last one wins when applied.
    pub pairs: Vec<(String, String)>,
    /// Non-blank lines that had no key.
    pub skipped: usize,
}

/// Outcome of loading one dotenv file into a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub path: PathBuf,
    pub found: bool,
    pub applied: usize,
    pub skipped: usize,
}

impl LoadSummary {
    fn not_found(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            found: false,
            applied: 0,
            skipped: 0,
        }
    }
}

fn effective_path(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(DEFAULT_DOTENV_FILE)
    } else {
        path
    }
}

/// Read a dotenv file without applying it.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// - `ConfigError::DotenvOpen` if the file exists but cannot be opened.
/// - `ConfigError::DotenvRead` if a line cannot be read (including invalid UTF-8).
pub fn read_pairs(path: impl AsRef<Path>) -> Result<Option<DotenvFile>, ConfigError> {
    let path = effective_path(path.as_ref());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "dotenv file not found, nothing to load");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::DotenvOpen {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut pairs = Vec::new();
    let mut skipped = 0;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ConfigError::DotenvRead {
            path: path.to_path_buf(),
            source,
        })?;
        if line.is_empty() {
            continue;
        }

        let (key, value) = parse_line(&line);
        if key.is_empty() {
            skipped += 1;
            continue;
        }
        pairs.push((key.to_string(), value.to_string()));
    }

    Ok(Some(DotenvFile {
        path: path.to_path_buf(),
        pairs,
        skipped,
    }))
}

/// Load a dotenv file into `source`, overwriting same-named variables.
pub fn load_into<S: EnvSource + ?Sized>(
    source: &mut S,
    path: impl AsRef<Path>,
) -> Result<LoadSummary, ConfigError> {
    let path = effective_path(path.as_ref());
    let Some(file) = read_pairs(path)? else {
        return Ok(LoadSummary::not_found(path));
    };

    for (key, value) in &file.pairs {
        source.set(key, value)?;
    }

    tracing::debug!(
        path = %file.path.display(),
        applied = file.pairs.len(),
        skipped = file.skipped,
        "loaded dotenv file"
    );

    Ok(LoadSummary {
        path: file.path,
        found: true,
        applied: file.pairs.len(),
        skipped: file.skipped,
    })
}

/// Load a dotenv file into the process environment.
pub fn load(path: impl AsRef<Path>) -> Result<LoadSummary, ConfigError> {
    load_into(&mut ProcessEnv, path)
}

/// Load several dotenv files into the process environment, in order.
pub fn load_all<I, P>(paths: I) -> Result<Vec<LoadSummary>, ConfigError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    load_all_into(&mut ProcessEnv, paths)
}

/// Load several dotenv files into `source`, in order.
///
/// Later files override keys set by earlier ones. With no paths, `.env` is loaded.
pub fn load_all_into<S, I, P>(source: &mut S, paths: I) -> Result<Vec<LoadSummary>, ConfigError>
where
    S: EnvSource + ?Sized,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summaries = Vec::new();
    for path in paths {
        summaries.push(load_into(source, path)?);
    }
    if summaries.is_empty() {
        summaries.push(load_into(source, DEFAULT_DOTENV_FILE)?);
    }
    Ok(summaries)
}
