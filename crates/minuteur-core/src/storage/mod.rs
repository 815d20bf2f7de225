mod config;
mod presets;

pub use config::{Config, SoundsConfig, WindowConfig};
pub use presets::{PresetStore, PRESET_SLOTS};

use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Fixed storage root, relative to the working directory. The app has
/// always kept its files here, so the location is part of the format.
const DATA_DIR: &str = "data";

/// Returns the preset file path `data/saved_times.json`.
///
/// The file holds a JSON array of exactly six "HH:MM:SS" strings.
pub fn presets_path() -> PathBuf {
    Path::new(DATA_DIR).join("saved_times.json")
}

/// Returns the config file path `data/config.toml`.
pub fn config_path() -> PathBuf {
    Path::new(DATA_DIR).join("config.toml")
}

/// Creates the parent directory of `path` if it is missing.
///
/// Only the write paths call this; reads never create anything.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(parent).map_err(|e| StorageError::SaveFailed {
        path: parent.to_path_buf(),
        message: e.to_string(),
    })
}
