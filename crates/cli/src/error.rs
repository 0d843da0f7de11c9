//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library and CLI errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-3 are reserved for envfill's own failures.
//! - `run` passes the child's exit code through unchanged on success.

use envfill_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for envfill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A dotenv file could not be read or applied, or `--strict` found skipped lines.
    InvalidEnvFile = 2,

    /// The command given to `run` could not be started.
    SpawnFailed = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Errors raised by the CLI itself rather than the library.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} line(s) would be skipped")]
    SkippedLines { count: usize },
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return match err {
                    CliError::Spawn { .. } => ExitCode::SpawnFailed,
                    CliError::SkippedLines { .. } => ExitCode::InvalidEnvFile,
                };
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return match err {
                    ConfigError::DotenvOpen { .. }
                    | ConfigError::DotenvRead { .. }
                    | ConfigError::SetVar { .. } => ExitCode::InvalidEnvFile,
                    _ => ExitCode::GeneralError,
                };
            }
        }

        ExitCode::GeneralError
    }
}
