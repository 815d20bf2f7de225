//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Cue sound files, enablement and volume
//! - Window behavior (always on top)
//!
//! Configuration is stored at `data/config.toml`, next to the presets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{config_path, ensure_parent_dir};
use crate::error::StorageError;

/// Audio cue configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundsConfig {
    /// File played while the counter shows 3, 2 and 1.
    #[serde(default = "default_countdown_sound")]
    pub countdown: String,
    /// File played when the counter reaches zero.
    #[serde(default = "default_times_up_sound")]
    pub times_up: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_50")]
    pub volume: u32,
}

/// Window configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window: always on top.
    #[serde(default)]
    pub always_on_top: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `data/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sounds: SoundsConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

// Default functions
fn default_countdown_sound() -> String {
    "sounds/t-0.wav".into()
}
fn default_times_up_sound() -> String {
    "sounds/alert.wav".into()
}
fn default_true() -> bool {
    true
}
fn default_50() -> u32 {
    50
}

impl Default for SoundsConfig {
    fn default() -> Self {
        Self {
            countdown: default_countdown_sound(),
            times_up: default_times_up_sound(),
            enabled: true,
            volume: 50,
        }
    }
}

impl Config {
    /// Load from disk or write defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, StorageError> {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Result<Self, StorageError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                return Ok(cfg);
            }
            Err(e) => {
                return Err(StorageError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };
        toml::from_str(&content).map_err(|e| StorageError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), StorageError> {
        self.save_to(&config_path())
    }

    fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        ensure_parent_dir(path)?;
        let content = toml::to_string_pretty(self).map_err(|e| StorageError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| StorageError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
