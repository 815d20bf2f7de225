//! Core error types for minuteur-core.
//!
//! This module defines the error hierarchy using thiserror. Duration
//! errors carry the exact messages the GUI shows in its error dialog.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for minuteur-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Duration text errors (parsing and validation)
    #[error("{0}")]
    Duration(#[from] DurationError),

    /// Preset/config storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors for "HH:MM:SS" duration text.
///
/// The display strings double as user-facing dialog messages, so they
/// stay short and free of technical detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// Wrong field count or a non-numeric field
    #[error("Invalid time format. Use HH:MM:SS")]
    InvalidFormat,

    /// A field fell outside its allowed range (preset validation only)
    #[error("Invalid {field}: {value} (allowed 0-{max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: u8,
    },

    /// The parsed duration was zero or negative at start
    #[error("Time must be greater than zero")]
    NonPositive,
}

/// Storage-specific errors for the preset and config files.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to load a storage file
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save a storage file
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Preset slot index outside the fixed six
    #[error("Preset slot {index} out of bounds (length: {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
