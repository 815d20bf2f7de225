//! Countdown engine implementation.
//!
//! The engine is a plain seconds counter, not a wall-clock tracker. It does
//! not use internal threads and never schedules anything itself - the caller
//! invokes `tick()` once per second while the state is `Running`.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle
//! ```
//!
//! `start` toggles: from Idle it parses the display text and begins counting,
//! from Running it pauses (keeping the counter). `tick` drops back to Idle on
//! its own once the counter has rendered zero.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::new();
//! engine.set_display("00:00:05");
//! engine.start()?;
//! // Once per second while running:
//! engine.tick(); // Returns Some(Event::TimerTicked), possibly with a cue
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::duration::{format_hms, parse_hms, ZERO_HMS};
use crate::error::DurationError;
use crate::events::{Cue, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

/// Core countdown engine.
///
/// Owns the remaining-seconds counter and the canonical display text that
/// the main field mirrors. All mutation goes through the command methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownEngine {
    state: TimerState,
    /// Remaining whole seconds. Never drops below -1: the tick that renders
    /// zero decrements to -1 and stops there.
    remaining_secs: i64,
    /// Canonical "HH:MM:SS" text of the main field.
    display: String,
}

impl CountdownEngine {
    /// Create a new engine, idle at "00:00:00".
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            remaining_secs: 0,
            display: ZERO_HMS.to_string(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> i64 {
        self.remaining_secs
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            display: self.display.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the display text. Edits only land while `Idle`; while the
    /// countdown runs the field is read-only and the call is ignored.
    pub fn set_display(&mut self, text: &str) {
        if self.state == TimerState::Idle {
            self.display = text.to_string();
        }
    }

    /// Toggle between running and idle.
    ///
    /// From `Idle` this re-parses the current display text, so a paused
    /// countdown resumes from whatever the field shows (the second that was
    /// on screen at pause time is counted again). Fails with
    /// [`DurationError`] when the text does not parse or totals zero; the
    /// state is left untouched in that case.
    pub fn start(&mut self) -> Result<Event, DurationError> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Idle;
                Ok(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    display: self.display.clone(),
                    at: Utc::now(),
                })
            }
            TimerState::Idle => {
                let total_secs = parse_hms(&self.display)?;
                if total_secs <= 0 {
                    return Err(DurationError::NonPositive);
                }
                self.remaining_secs = total_secs;
                self.state = TimerState::Running;
                Ok(Event::TimerStarted {
                    total_secs,
                    display: self.display.clone(),
                    at: Utc::now(),
                })
            }
        }
    }

    /// Copy `text` into the display and apply [`start`](Self::start).
    ///
    /// Used by the preset rows. The text must parse to a positive duration
    /// before anything changes; a failure reports the error and leaves the
    /// current state alone, even mid-countdown. With valid text while
    /// running the copy is skipped (the field is read-only) and the call
    /// degrades to a plain pause toggle.
    pub fn start_from(&mut self, text: &str) -> Result<Event, DurationError> {
        let total_secs = parse_hms(text)?;
        if total_secs <= 0 {
            return Err(DurationError::NonPositive);
        }
        self.set_display(text);
        self.start()
    }

    /// Advance the countdown by one second. `None` unless running.
    ///
    /// Order per tick: render the current counter into the display, attach
    /// the cue for that rendered value (3/2/1 -> countdown, 0 -> times-up),
    /// then decrement. The tick that rendered zero finishes the countdown
    /// and the engine returns to `Idle` with the counter parked at -1.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.display = format_hms(self.remaining_secs);
        let cue = match self.remaining_secs {
            1..=3 => Some(Cue::Countdown),
            0 => Some(Cue::TimesUp),
            _ => None,
        };
        self.remaining_secs -= 1;
        let finished = self.remaining_secs < 0;
        if finished {
            self.state = TimerState::Idle;
        }
        Some(Event::TimerTicked {
            display: self.display.clone(),
            remaining_secs: self.remaining_secs,
            cue,
            finished,
            at: Utc::now(),
        })
    }

    /// Stop the countdown and clear the display back to "00:00:00".
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.remaining_secs = 0;
        self.display = ZERO_HMS.to_string();
        Event::TimerReset { at: Utc::now() }
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}
