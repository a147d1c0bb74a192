//! App-wide constants.
//!
//! Centralises the tool name, config paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "reckon";

/// Crate version, shown by `reckon version` and clap's `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.reckon.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".reckon.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "reckon";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "RECKON_FORMAT";
pub const ENV_PRECISION: &str = "RECKON_PRECISION";
