//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Translate handler results into a process exit code.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the exit code the process should end with on success. For `run`
/// this is the child's exit code.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check { files, strict } => {
            let stdout = std::io::stdout();
            commands::check::run(files, strict, &mut stdout.lock())?;
            Ok(ExitCode::Success.as_i32())
        }
        Commands::Run { files, command } => commands::run::run(files, command),
    }
}
