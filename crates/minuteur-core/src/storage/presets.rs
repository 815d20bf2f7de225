//! JSON persistence for the six preset slots.
//!
//! The on-disk format is a bare JSON array of exactly six "HH:MM:SS"
//! strings, stored at `data/saved_times.json`. A missing file reads as
//! six "00:00:00" defaults; a file with the wrong shape is reported so
//! the caller can decide to fall back to the same defaults.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::duration::{validate_preset, ZERO_HMS};
use crate::error::{CoreError, StorageError};
use crate::events::Event;

/// Number of preset slots. Fixed by the on-disk format.
pub const PRESET_SLOTS: usize = 6;

/// The six preset slots plus the file they persist to.
///
/// Slot text is validated on the way in (see
/// [`validate_preset`](crate::duration::validate_preset)), not on the way
/// out: whatever the file holds is shown to the user as-is.
#[derive(Debug, Clone)]
pub struct PresetStore {
    slots: [String; PRESET_SLOTS],
    path: PathBuf,
}

impl PresetStore {
    /// Six "00:00:00" slots backed by `path`. Nothing touches the disk.
    pub fn defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            slots: std::array::from_fn(|_| ZERO_HMS.to_string()),
            path: path.into(),
        }
    }

    /// Load the slots from `path`.
    ///
    /// A missing file is the normal first-run case and yields the
    /// defaults without creating anything.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LoadFailed`] when the file exists but
    /// cannot be read, is not JSON, or does not hold exactly six strings.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::defaults(path));
            }
            Err(e) => {
                return Err(StorageError::LoadFailed {
                    path,
                    message: e.to_string(),
                });
            }
        };
        let parsed: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| StorageError::LoadFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        let len = parsed.len();
        let slots: [String; PRESET_SLOTS] =
            parsed.try_into().map_err(|_| StorageError::LoadFailed {
                path: path.clone(),
                message: format!("expected {PRESET_SLOTS} preset entries, found {len}"),
            })?;
        Ok(Self { slots, path })
    }

    /// Load from `path`, returning defaults on any error.
    /// This is a convenience method that never fails.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::load(path.clone()).unwrap_or_else(|_| Self::defaults(path))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn slots(&self) -> &[String; PRESET_SLOTS] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Validate `text`, store its normalized form into `index` and
    /// persist all six slots.
    ///
    /// # Errors
    ///
    /// Validation failures leave both the slots and the file untouched.
    /// The GUI reverts only its own entry field in that case.
    pub fn save_slot(&mut self, index: usize, text: &str) -> Result<Event, CoreError> {
        if index >= PRESET_SLOTS {
            return Err(StorageError::OutOfBounds {
                index,
                len: PRESET_SLOTS,
            }
            .into());
        }
        let normalized = validate_preset(text)?;
        self.slots[index] = normalized.clone();
        self.save()?;
        Ok(Event::PresetSaved {
            slot: index,
            display: normalized,
            at: Utc::now(),
        })
    }

    /// Write all six slots to the preset file, creating `data/` first if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SaveFailed`] when the directory or file
    /// cannot be written.
    pub fn save(&self) -> Result<(), StorageError> {
        super::ensure_parent_dir(&self.path)?;
        let json = serde_json::to_string(&self.slots).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DurationError;

    fn temp_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("saved_times.json")
    }

    #[test]
    fn missing_file_loads_defaults_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        let store = PresetStore::load(&path).unwrap();
        assert_eq!(store.slots(), &[ZERO_HMS; PRESET_SLOTS].map(String::from));
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        std::fs::write(&path, "not json at all").unwrap();
        assert!(matches!(
            PresetStore::load(&path),
            Err(StorageError::LoadFailed { .. })
        ));
    }

    #[test]
    fn wrong_entry_count_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        std::fs::write(&path, r#"["00:01:00", "00:02:00"]"#).unwrap();
        assert!(matches!(
            PresetStore::load(&path),
            Err(StorageError::LoadFailed { .. })
        ));
    }

    #[test]
    fn load_or_default_swallows_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let store = PresetStore::load_or_default(&path);
        assert_eq!(store.slot(0), Some(ZERO_HMS));
    }

    #[test]
    fn save_slot_persists_all_six_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let mut store = PresetStore::defaults(&path);
        store.save_slot(0, "00:25:00").unwrap();
        store.save_slot(3, "01:30:00").unwrap();

        let reloaded = PresetStore::load(&path).unwrap();
        assert_eq!(reloaded.slot(0), Some("00:25:00"));
        assert_eq!(reloaded.slot(3), Some("01:30:00"));
        assert_eq!(reloaded.slot(5), Some(ZERO_HMS));
    }

    #[test]
    fn save_slot_normalizes_unpadded_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PresetStore::defaults(temp_path(&dir));
        let event = store.save_slot(1, "1:5:0").unwrap();
        assert!(matches!(
            event,
            Event::PresetSaved { slot: 1, ref display, .. } if display == "01:05:00"
        ));
        assert_eq!(store.slot(1), Some("01:05:00"));
    }

    #[test]
    fn rejected_text_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        let mut store = PresetStore::defaults(&path);

        let err = store.save_slot(2, "25:61:00").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Duration(DurationError::OutOfRange { field: "hours", .. })
        ));
        assert_eq!(store.slot(2), Some(ZERO_HMS));
        assert!(!path.exists(), "nothing should have been written");
    }

    #[test]
    fn slot_index_is_bounds_checked() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PresetStore::defaults(temp_path(&dir));
        let err = store.save_slot(PRESET_SLOTS, "00:01:00").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Storage(StorageError::OutOfBounds { index: 6, len: 6 })
        ));
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("saved_times.json");
        let mut store = PresetStore::defaults(&path);
        store.save_slot(0, "00:10:00").unwrap();
        assert!(path.exists());
    }
}
