//! Global configuration management
//!
//! Provides persistent storage for user preferences. Config is stored at
//! `~/.checkup/config.toml` and loaded leniently: a missing or unparsable
//! file falls back to defaults rather than failing a run.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global checkup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default to JSON output (overridden by --json)
    #[serde(default)]
    pub json: bool,

    /// Use colors in human output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: default_color(),
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or create default if not exists
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_path();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
