//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test dotenv loading through `ConfigLoader` and the `DOTENV_DISABLED` gate.
//! - Test end-to-end population from files into the process environment.
//! - Test builder behaviour against an isolated `MemoryEnv`.
//!
//! Does NOT handle:
//! - Line parsing and per-file reading (tested in line.rs and dotenv.rs).
//! - Conversion details (tested in the `populate` modules).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
