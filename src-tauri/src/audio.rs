//! Audio playback for the countdown cues.
//!
//! The output device is owned by a dedicated playback thread; commands
//! talk to it through a channel, which keeps the Tauri-managed handle
//! `Send + Sync`. Cue files are decoded from disk at the moment they
//! fire, so swapping the files in `sounds/` takes effect immediately.
//!
//! Playback problems (no output device, missing file, undecodable data)
//! are logged and swallowed: a silent timer still ticks.

use std::fs::File;
use std::io::BufReader;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use minuteur_core::storage::SoundsConfig;
use minuteur_core::Cue;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, info, warn};

/// Handle to the playback thread. Lives in Tauri managed state.
pub struct CuePlayer {
    tx: Option<Sender<Cue>>,
}

impl CuePlayer {
    /// Spawn the playback thread. With sound disabled in the config no
    /// thread is started and every `play` is a no-op.
    pub fn new(sounds: &SoundsConfig) -> Self {
        if !sounds.enabled {
            info!("sound disabled in configuration");
            return Self { tx: None };
        }
        let (tx, rx) = mpsc::channel();
        let sounds = sounds.clone();
        thread::spawn(move || playback_loop(sounds, rx));
        Self { tx: Some(tx) }
    }

    /// Queue a cue for playback. Never blocks and never fails the caller.
    pub fn play(&self, cue: Cue) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(cue).is_err() {
            warn!("audio thread is gone, dropping cue");
        }
    }
}

/// Runs on the playback thread until the last sender drops.
fn playback_loop(sounds: SoundsConfig, rx: Receiver<Cue>) {
    let (stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            warn!("no audio output available: {e}");
            // Drain so senders never notice.
            for _ in rx {}
            return;
        }
    };
    // The device stays open as long as `stream` lives.
    let _stream = stream;
    let volume = sounds.volume.min(100) as f32 / 100.0;

    while let Ok(cue) = rx.recv() {
        let path = match cue {
            Cue::Countdown => &sounds.countdown,
            Cue::TimesUp => &sounds.times_up,
        };
        debug!(path = %path, "playing cue");
        if let Err(e) = play_file(&handle, path, volume) {
            warn!(path = %path, "cue playback failed: {e}");
        }
    }
}

fn play_file(
    handle: &OutputStreamHandle,
    path: &str,
    volume: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let source = Decoder::new(BufReader::new(file))?;
    let sink = Sink::try_new(handle)?;
    sink.set_volume(volume);
    sink.append(source);
    // Let the sound finish on its own; the sink cleans up after itself.
    sink.detach();
    Ok(())
}
