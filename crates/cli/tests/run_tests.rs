//! Integration tests for `envfill run`.
//!
//! Responsibilities:
//! - Prove that dotenv variables reach the child process, later files winning.
//! - Prove that the child's exit code is passed through.
//! - Ensure DOTENV_DISABLED=1 skips loading and spawn failures map to exit code 3.
//!
//! Invariants:
//! - Tests that need a shell are Unix-only.

mod common;

use common::envfill_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn test_run_passes_variables_to_child() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "GREETING=hello\nTARGET=world\n").unwrap();
    fs::write(temp_dir.path().join(".env.local"), "TARGET=envfill\n").unwrap();

    envfill_cmd(temp_dir.path())
        .args(["run", "-f", ".env", "-f", ".env.local", "--"])
        .args(["sh", "-c", "echo \"$GREETING $TARGET\""])
        .assert()
        .success()
        .stdout("hello envfill\n");
}

#[cfg(unix)]
#[test]
fn test_run_overrides_inherited_variables() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "ENVFILL_RUN_MODE=file\n").unwrap();

    envfill_cmd(temp_dir.path())
        .env("ENVFILL_RUN_MODE", "parent")
        .args(["run", "--", "sh", "-c", "echo $ENVFILL_RUN_MODE"])
        .assert()
        .success()
        .stdout("file\n");
}

#[cfg(unix)]
#[test]
fn test_run_passes_exit_code_through() {
    let temp_dir = TempDir::new().unwrap();

    envfill_cmd(temp_dir.path())
        .args(["run", "--", "sh", "-c", "exit 7"])
        .assert()
        .code(7);
}

#[cfg(unix)]
#[test]
fn test_run_respects_dotenv_disabled() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "ENVFILL_RUN_MODE=file\n").unwrap();

    envfill_cmd(temp_dir.path())
        .env("DOTENV_DISABLED", "1")
        .env_remove("ENVFILL_RUN_MODE")
        .args(["run", "--", "sh", "-c", "echo \"mode=$ENVFILL_RUN_MODE\""])
        .assert()
        .success()
        .stdout("mode=\n");
}

#[test]
fn test_run_missing_program_exits_with_spawn_failed() {
    let temp_dir = TempDir::new().unwrap();

    envfill_cmd(temp_dir.path())
        .args(["run", "--", "envfill-definitely-not-a-real-program"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to start"));
}

#[test]
fn test_run_requires_a_command() {
    let temp_dir = TempDir::new().unwrap();

    envfill_cmd(temp_dir.path()).arg("run").assert().failure();
}
