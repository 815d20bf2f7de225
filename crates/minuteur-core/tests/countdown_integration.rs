//! Integration tests for the countdown and preset workflow.
//!
//! These tests drive the engine and the preset store together, the way
//! the desktop shell does: parse-on-start, one tick per second, preset
//! slots persisted across a simulated restart.

use minuteur_core::duration::ZERO_HMS;
use minuteur_core::{CountdownEngine, Cue, Event, PresetStore, TimerState, PRESET_SLOTS};

fn tick_expecting(engine: &mut CountdownEngine) -> (String, Option<Cue>, bool) {
    match engine.tick() {
        Some(Event::TimerTicked {
            display,
            cue,
            finished,
            ..
        }) => (display, cue, finished),
        other => panic!("expected TimerTicked, got {other:?}"),
    }
}

#[test]
fn full_countdown_renders_every_second_once() {
    let mut engine = CountdownEngine::new();
    engine.set_display("00:00:05");
    engine.start().unwrap();

    let mut displays = Vec::new();
    let mut cues = Vec::new();
    loop {
        let (display, cue, finished) = tick_expecting(&mut engine);
        displays.push(display);
        if let Some(cue) = cue {
            cues.push(cue);
        }
        if finished {
            break;
        }
    }

    assert_eq!(
        displays,
        ["00:00:05", "00:00:04", "00:00:03", "00:00:02", "00:00:01", "00:00:00"]
    );
    assert_eq!(
        cues,
        [Cue::Countdown, Cue::Countdown, Cue::Countdown, Cue::TimesUp]
    );
    assert_eq!(engine.state(), TimerState::Idle);
    assert!(engine.tick().is_none());
}

#[test]
fn pause_resume_replays_the_visible_second() {
    let mut engine = CountdownEngine::new();
    engine.set_display("00:00:04");
    engine.start().unwrap();

    tick_expecting(&mut engine); // renders 00:00:04
    tick_expecting(&mut engine); // renders 00:00:03
    assert_eq!(engine.display(), "00:00:03");

    engine.start().unwrap(); // pause
    assert_eq!(engine.state(), TimerState::Idle);

    // Resume re-parses "00:00:03", so that second is rendered again.
    engine.start().unwrap();
    let (display, cue, _) = tick_expecting(&mut engine);
    assert_eq!(display, "00:00:03");
    assert_eq!(cue, Some(Cue::Countdown));
}

#[test]
fn reset_interrupts_a_running_countdown() {
    let mut engine = CountdownEngine::new();
    engine.set_display("01:00:00");
    engine.start().unwrap();
    tick_expecting(&mut engine);

    engine.reset();
    assert_eq!(engine.state(), TimerState::Idle);
    assert_eq!(engine.display(), ZERO_HMS);
    assert!(engine.tick().is_none());
}

#[test]
fn presets_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_times.json");

    let mut store = PresetStore::load(&path).unwrap();
    store.save_slot(0, "00:25:00").unwrap();
    store.save_slot(1, "00:05:00").unwrap();
    store.save_slot(5, "1:0:0").unwrap();
    drop(store);

    // Fresh process: load again from the same file.
    let store = PresetStore::load(&path).unwrap();
    assert_eq!(store.slot(0), Some("00:25:00"));
    assert_eq!(store.slot(1), Some("00:05:00"));
    assert_eq!(store.slot(5), Some("01:00:00"));
    for idx in 2..5 {
        assert_eq!(store.slot(idx), Some(ZERO_HMS));
    }
}

#[test]
fn preset_drives_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = PresetStore::defaults(dir.path().join("saved_times.json"));
    store.save_slot(2, "00:00:03").unwrap();

    let mut engine = CountdownEngine::new();
    engine.start_from(store.slot(2).unwrap()).unwrap();
    assert_eq!(engine.display(), "00:00:03");
    assert_eq!(engine.remaining_secs(), 3);

    let mut ticks = 0;
    while let Some(event) = engine.tick() {
        ticks += 1;
        if matches!(event, Event::TimerTicked { finished: true, .. }) {
            break;
        }
    }
    assert_eq!(ticks, 4);
}

#[test]
fn rejected_preset_text_does_not_clobber_the_stored_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_times.json");

    let mut store = PresetStore::defaults(&path);
    store.save_slot(4, "00:45:00").unwrap();
    assert!(store.save_slot(4, "25:61:00").is_err());

    assert_eq!(store.slot(4), Some("00:45:00"));
    let reloaded = PresetStore::load(&path).unwrap();
    assert_eq!(reloaded.slot(4), Some("00:45:00"));
}

#[test]
fn slot_count_is_fixed_at_six() {
    assert_eq!(PRESET_SLOTS, 6);
    let dir = tempfile::tempdir().unwrap();
    let store = PresetStore::defaults(dir.path().join("saved_times.json"));
    assert_eq!(store.slots().len(), PRESET_SLOTS);
    assert!(store.slot(PRESET_SLOTS).is_none());
}
