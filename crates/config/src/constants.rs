//! Centralized constants for the envfill workspace.
//!
//! This module contains file names, variable names and delimiters shared by the
//! loader, the field converter and the CLI.

// =============================================================================
// Dotenv Loading
// =============================================================================

/// File loaded when a caller passes an empty path or no paths at all.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// Separator between a key and its value on a dotenv line.
pub const KEY_VALUE_DELIMITER: char = '=';

/// Environment variable that disables `ConfigLoader::load_dotenv()` when set
/// to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Field Population
// =============================================================================

/// Separator between elements of a list field.
pub const LIST_DELIMITER: char = ',';

/// Separator between path segments of a derived variable name.
pub const NAME_SEGMENT_SEPARATOR: char = '_';
