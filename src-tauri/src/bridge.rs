use minuteur_core::storage::{self, PresetStore};
use minuteur_core::timer::CountdownEngine;
use minuteur_core::Event;
use serde_json::Value;
use std::sync::Mutex;
use tauri::State;
use tracing::{debug, info, warn};

use crate::audio::CuePlayer;

/// Shared countdown engine, protected by a Mutex.
/// The engine lives in-process; the webview drives it through these
/// commands and re-arms the one-second tick loop itself.
pub struct EngineState(pub Mutex<CountdownEngine>);

impl EngineState {
    pub fn new() -> Self {
        Self(Mutex::new(CountdownEngine::new()))
    }
}

/// The six preset slots, loaded once at startup.
/// A file that cannot be read falls back to six "00:00:00" defaults.
pub struct PresetState(pub Mutex<PresetStore>);

impl PresetState {
    pub fn new() -> Self {
        let path = storage::presets_path();
        let store = match PresetStore::load(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!("unreadable preset file, starting with defaults: {e}");
                PresetStore::defaults(path)
            }
        };
        Self(Mutex::new(store))
    }
}

// ── Timer commands ──────────────────────────────────────────────────

#[tauri::command]
pub fn cmd_timer_status(engine: State<'_, EngineState>) -> Result<Value, String> {
    let engine = engine.0.lock().map_err(|e| e.to_string())?;
    serde_json::to_value(engine.snapshot()).map_err(|e| e.to_string())
}

/// Start/pause toggle. `display` is whatever the main field shows; the
/// engine ignores it while running (the field is read-only then).
#[tauri::command]
pub fn cmd_timer_start(engine: State<'_, EngineState>, display: String) -> Result<Value, String> {
    let mut engine = engine.0.lock().map_err(|e| e.to_string())?;
    engine.set_display(&display);
    let event = engine.start().map_err(|e| e.to_string())?;
    match &event {
        Event::TimerStarted { total_secs, .. } => info!(total_secs, "countdown started"),
        Event::TimerPaused { remaining_secs, .. } => info!(remaining_secs, "countdown paused"),
        _ => {}
    }
    serde_json::to_value(event).map_err(|e| e.to_string())
}

/// Start the countdown from a preset row's current text.
#[tauri::command]
pub fn cmd_timer_start_preset(
    engine: State<'_, EngineState>,
    slot: usize,
    display: String,
) -> Result<Value, String> {
    debug!(slot, %display, "start requested from preset");
    let mut engine = engine.0.lock().map_err(|e| e.to_string())?;
    let event = engine.start_from(&display).map_err(|e| e.to_string())?;
    serde_json::to_value(event).map_err(|e| e.to_string())
}

/// One tick of the running countdown. Plays the attached cue, if any,
/// and returns the current snapshot with the tick event under "ticked".
#[tauri::command]
pub fn cmd_timer_tick(
    engine: State<'_, EngineState>,
    player: State<'_, CuePlayer>,
) -> Result<Value, String> {
    let mut engine = engine.0.lock().map_err(|e| e.to_string())?;
    let ticked = engine.tick();
    if let Some(Event::TimerTicked { cue: Some(cue), .. }) = &ticked {
        player.play(*cue);
    }
    if let Some(Event::TimerTicked { finished: true, .. }) = &ticked {
        info!("countdown finished");
    }
    let mut result = serde_json::to_value(engine.snapshot()).map_err(|e| e.to_string())?;
    if let Some(event) = ticked {
        result["ticked"] = serde_json::to_value(event).map_err(|e| e.to_string())?;
    }
    Ok(result)
}

#[tauri::command]
pub fn cmd_timer_reset(engine: State<'_, EngineState>) -> Result<Value, String> {
    let mut engine = engine.0.lock().map_err(|e| e.to_string())?;
    let event = engine.reset();
    info!("countdown reset");
    serde_json::to_value(event).map_err(|e| e.to_string())
}

// ── Preset commands ─────────────────────────────────────────────────

#[tauri::command]
pub fn cmd_preset_list(presets: State<'_, PresetState>) -> Result<Value, String> {
    let presets = presets.0.lock().map_err(|e| e.to_string())?;
    serde_json::to_value(presets.slots()).map_err(|e| e.to_string())
}

/// Validate and persist one preset slot. On failure the frontend reverts
/// only its own entry field; the stored slots are untouched.
#[tauri::command]
pub fn cmd_preset_save(
    presets: State<'_, PresetState>,
    slot: usize,
    display: String,
) -> Result<Value, String> {
    let mut presets = presets.0.lock().map_err(|e| e.to_string())?;
    let event = presets.save_slot(slot, &display).map_err(|e| e.to_string())?;
    if let Event::PresetSaved { ref display, .. } = event {
        info!(slot, %display, "preset saved");
    }
    serde_json::to_value(event).map_err(|e| e.to_string())
}
