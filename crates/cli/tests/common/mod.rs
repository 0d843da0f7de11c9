//! Shared test utilities for envfill integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//!
//! Invariants / Assumptions:
//! - `DOTENV_DISABLED` and `RUST_LOG` from the host never reach the binary under test.
//! - Every command runs inside the temp directory it is given, so the default
//!   `.env` lookup never sees the repository's files.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `envfill` command running in `dir`.
pub fn envfill_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envfill");
    cmd.current_dir(dir)
        .env_remove("DOTENV_DISABLED")
        .env_remove("RUST_LOG");
    cmd
}
