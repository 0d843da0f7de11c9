//! Run command: start a program with dotenv variables in its environment.
//!
//! Responsibilities:
//! - Load dotenv files in order into an in-memory source (later files win).
//! - Spawn the program with those variables layered over the inherited environment.
//! - Report the child's exit status back to the caller.
//!
//! Does NOT handle:
//! - Modifying envfill's own process environment.
//!
//! Invariants:
//! - `DOTENV_DISABLED=1`/`true` in envfill's environment skips loading, as in the library.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use envfill_config::constants::DOTENV_DISABLED_VAR;
use envfill_config::{ConfigLoader, EnvSource, MemoryEnv, ProcessEnv};

use crate::error::{CliError, ExitCode};

/// Build the variables `run` adds to the child environment.
pub fn collect_vars(files: &[PathBuf]) -> Result<MemoryEnv> {
    let mut seed = MemoryEnv::new();
    if let Some(flag) = ProcessEnv.lookup(DOTENV_DISABLED_VAR) {
        seed.set(DOTENV_DISABLED_VAR, &flag)?;
    }

    let loader = ConfigLoader::new()
        .with_source(seed)
        .with_env_files(files)
        .load_dotenv()
        .context("loading dotenv files")?;

    for summary in loader.summaries() {
        tracing::debug!(
            path = %summary.path.display(),
            found = summary.found,
            applied = summary.applied,
            "dotenv file processed"
        );
    }

    Ok(loader.into_source())
}

pub fn run(files: Vec<PathBuf>, command: Vec<String>) -> Result<i32> {
    let vars = collect_vars(&files)?;
    let (program, args) = command.split_first().context("no command given")?;

    tracing::info!(program = %program, vars = vars.len(), "starting command");
    let status = Command::new(program)
        .args(args)
        .envs(vars.iter())
        .status()
        .map_err(|source| CliError::Spawn {
            program: program.clone(),
            source,
        })?;

    Ok(exit_code_of(status))
}

/// Map a child's status to our exit code; signals follow the 128 + N convention.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    ExitCode::GeneralError.as_i32()
}
