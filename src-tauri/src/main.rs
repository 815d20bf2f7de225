// Prevents additional console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Minuteur Desktop Application
//!
//! A Tauri-based desktop application for the Minuteur countdown timer.
//! The GUI is a thin webview skin over the Rust core (minuteur-core);
//! it re-arms a one-second timeout while the countdown runs and calls
//! back into the bridge commands for every state change.

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod audio;
mod bridge;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("minuteur_desktop=info,minuteur_core=info")
        }))
        .init();

    let config = minuteur_core::Config::load_or_default();
    info!(
        countdown = %config.sounds.countdown,
        times_up = %config.sounds.times_up,
        enabled = config.sounds.enabled,
        volume = config.sounds.volume,
        "configuration loaded"
    );
    let always_on_top = config.window.always_on_top;

    tauri::Builder::default()
        .manage(bridge::EngineState::new())
        .manage(bridge::PresetState::new())
        .manage(audio::CuePlayer::new(&config.sounds))
        .setup(move |app| {
            if always_on_top {
                if let Some(window) = app.get_webview_window("main") {
                    window.set_always_on_top(true)?;
                }
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Timer commands
            bridge::cmd_timer_status,
            bridge::cmd_timer_start,
            bridge::cmd_timer_start_preset,
            bridge::cmd_timer_tick,
            bridge::cmd_timer_reset,
            // Preset commands
            bridge::cmd_preset_list,
            bridge::cmd_preset_save,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("Tauri application error: {}", e);
            std::process::exit(1);
        });
}
