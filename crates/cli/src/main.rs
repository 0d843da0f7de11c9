//! envfill - Command-line front end for dotenv files.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging to stderr.
//! - Dispatch to `check` or `run` and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Dotenv parsing or environment population (see `envfill-config`).
//!
//! Invariants:
//! - Logs go to stderr so `check` output on stdout stays machine-readable.
//! - `RUST_LOG` overrides the level chosen by `-v`.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_command(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    }
}
