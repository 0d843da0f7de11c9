//! Check command: list the keys dotenv files define.
//!
//! Responsibilities:
//! - Read each file in order and print its keys and skipped-line count.
//! - Report missing files without failing.
//! - Fail under `--strict` when any line would be skipped.
//!
//! Does NOT handle:
//! - Printing values. Dotenv files routinely hold secrets.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use envfill_config::constants::DEFAULT_DOTENV_FILE;
use envfill_config::read_pairs;

use crate::error::CliError;

pub fn run(files: Vec<PathBuf>, strict: bool, out: &mut impl Write) -> Result<()> {
    let files = if files.is_empty() {
        vec![PathBuf::from(DEFAULT_DOTENV_FILE)]
    } else {
        files
    };

    let mut skipped = 0;
    for path in &files {
        let Some(file) =
            read_pairs(path).with_context(|| format!("checking {}", path.display()))?
        else {
            writeln!(out, "{}: not found", path.display())?;
            continue;
        };

        writeln!(
            out,
            "{}: {} key(s), {} skipped line(s)",
            file.path.display(),
            file.pairs.len(),
            file.skipped
        )?;
        for (key, _) in &file.pairs {
            writeln!(out, "  {key}")?;
        }
        skipped += file.skipped;
    }

    if strict && skipped > 0 {
        return Err(CliError::SkippedLines { count: skipped }.into());
    }
    Ok(())
}
