//! Centralized path definitions for checkup
//!
//! This module provides a single source of truth for all filesystem paths
//! used by checkup.
//!
//! ## Storage Layout
//!
//! ### Per-Project (Project Root)
//!
//! ```text
//! project/
//! └── .checkup.toml                # SHARED: Committed rule set
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.checkup/
//! └── config.toml                  # User preferences (output mode, color)
//! ```

use std::path::PathBuf;

// =============================================================================
// Project-level paths (per-project)
// =============================================================================

/// Project rule-set filename
pub const CHECKUP_TOML: &str = ".checkup.toml";

/// Get the project root directory.
///
/// Walks up from the current working directory looking for `.checkup.toml`,
/// so the tool can run from anywhere inside a project. Falls back to the
/// working directory when no rule set is found.
#[must_use]
pub fn project_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut current = cwd.clone();

    loop {
        if current.join(CHECKUP_TOML).exists() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return cwd,
        }
    }
}

/// Get path to the project `.checkup.toml` rule set.
#[must_use]
pub fn ruleset_path() -> PathBuf {
    project_root().join(CHECKUP_TOML)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".checkup";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global checkup directory.
///
/// Returns `~/.checkup/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.checkup/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
