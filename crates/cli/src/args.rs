//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read dotenv files (see `commands`).

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envfill")]
#[command(about = "envfill - Inspect dotenv files and run commands with them", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envfill check\n  envfill check .env .env.local --strict\n  envfill run -f .env -f .env.local -- ./server --port 8080\n"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the keys defined by dotenv files without printing values
    Check {
        /// Dotenv files to check, in load order (default: .env)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Fail if any file contains lines that would be skipped
        #[arg(long)]
        strict: bool,
    },

    /// Run a command with variables from dotenv files added to its environment
    Run {
        /// Dotenv file to load; repeat to layer files, later files win (default: .env)
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Command to run, followed by its arguments
        #[arg(required = true, trailing_var_arg = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
}
