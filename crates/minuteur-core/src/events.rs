use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

/// Audio cue attached to a tick near the end of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// The counter rendered 3, 2 or 1.
    Countdown,
    /// The counter reached zero.
    TimesUp,
}

/// Every state change in the system produces an Event.
/// The GUI receives them as command return values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        total_secs: i64,
        display: String,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: i64,
        display: String,
        at: DateTime<Utc>,
    },
    /// One second elapsed. `display` is the text rendered for this tick;
    /// `remaining_secs` is the counter after the decrement.
    TimerTicked {
        display: String,
        remaining_secs: i64,
        cue: Option<Cue>,
        finished: bool,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    PresetSaved {
        slot: usize,
        display: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        remaining_secs: i64,
        display: String,
        at: DateTime<Utc>,
    },
}
