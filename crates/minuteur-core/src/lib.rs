//! # Minuteur Core Library
//!
//! This library provides the core logic for Minuteur, a small countdown
//! timer. Everything stateful lives here and runs headless; the Tauri
//! desktop application is a thin GUI layer over the same core library.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: A seconds-counter state machine that requires
//!   the caller to invoke `tick()` once per second while running
//! - **Duration**: "HH:MM:SS" parsing, formatting and preset validation
//! - **Storage**: JSON-backed preset slots and TOML-based configuration,
//!   both under a fixed `data/` directory
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: Core countdown state machine
//! - [`PresetStore`]: The six persisted preset slots
//! - [`Config`]: Application configuration management
//! - [`Event`]: State changes reported back to the GUI

pub mod duration;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use error::{CoreError, DurationError, StorageError};
pub use events::{Cue, Event};
pub use storage::{Config, PresetStore, PRESET_SLOTS};
pub use timer::{CountdownEngine, TimerState};
