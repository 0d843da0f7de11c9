//! Integration tests for `envfill check`.
//!
//! Responsibilities:
//! - Validate key listing, missing-file reporting and `--strict`.
//! - Prove that values never appear in the output.
//!
//! Invariants:
//! - All tests use the hermetic `envfill_cmd()` helper inside a temp directory.

mod common;

use common::envfill_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_check_help() {
    let temp_dir = TempDir::new().unwrap();

    envfill_cmd(temp_dir.path())
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("List the keys defined by dotenv files")
                .and(predicate::str::contains("--strict")),
        );
}

#[test]
fn test_check_defaults_to_dotenv_in_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "DATABASE_URL=postgres://secret@db\n").unwrap();

    envfill_cmd(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(".env: 1 key(s), 0 skipped line(s)")
                .and(predicate::str::contains("  DATABASE_URL"))
                .and(predicate::str::contains("secret").not()),
        );
}

#[test]
fn test_check_missing_file_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    envfill_cmd(temp_dir.path())
        .args(["check", "absent.env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("absent.env: not found"));
}

#[test]
fn test_check_strict_exits_with_invalid_env_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.env"), "GOOD=1\nNO_DELIMITER\n").unwrap();

    envfill_cmd(temp_dir.path())
        .args(["check", "app.env", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1 line(s) would be skipped"));
}

#[test]
fn test_check_unreadable_file_exits_with_invalid_env_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.env"), b"TOKEN=abc\xff\n").unwrap();

    envfill_cmd(temp_dir.path())
        .args(["check", "bad.env"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad.env").and(predicate::str::contains("abc").not()));
}
