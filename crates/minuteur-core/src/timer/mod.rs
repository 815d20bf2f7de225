mod engine;

pub use engine::{CountdownEngine, TimerState};
