// Host-side tests for the hero audio toggle.

#![allow(dead_code)]
mod core {
    pub mod playback {
        include!("../src/core/playback.rs");
    }
}

use crate::core::playback::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Track stand-in: shares a playhead and an event log with the test.
struct FakeTrack {
    id: usize,
    playhead: Rc<Cell<f64>>,
    events: Rc<RefCell<Vec<String>>>,
}

impl TrackHandle for FakeTrack {
    fn start(&self, offset_sec: f64) {
        self.playhead.set(offset_sec);
        self.events
            .borrow_mut()
            .push(format!("start#{}@{}", self.id, offset_sec));
    }

    fn pause(&self) {
        self.events.borrow_mut().push(format!("pause#{}", self.id));
    }

    fn position_sec(&self) -> f64 {
        self.playhead.get()
    }
}

fn make_toggle() -> (
    TrackToggle<FakeTrack, impl FnMut() -> FakeTrack>,
    Rc<Cell<f64>>,
    Rc<RefCell<Vec<String>>>,
) {
    let playhead = Rc::new(Cell::new(0.0));
    let events = Rc::new(RefCell::new(Vec::new()));
    let (p, e) = (playhead.clone(), events.clone());
    let mut next = 0;
    let toggle = TrackToggle::new(move || {
        next += 1;
        FakeTrack {
            id: next,
            playhead: p.clone(),
            events: e.clone(),
        }
    });
    (toggle, playhead, events)
}

#[test]
fn starts_paused_at_zero() {
    let state = PlaybackState::default();
    assert!(!state.is_playing());
    assert_eq!(state.resume_at_sec(), 0.0);
}

#[test]
fn first_toggle_plays_from_start() {
    let (mut toggle, _, events) = make_toggle();
    assert_eq!(toggle.toggle(), PlaybackCommand::Resume { offset_sec: 0.0 });
    assert!(toggle.state().is_playing());
    assert_eq!(*events.borrow(), vec!["start#1@0".to_string()]);
}

#[test]
fn pause_then_resume_continues_where_it_stopped() {
    let (mut toggle, playhead, events) = make_toggle();
    toggle.toggle();
    playhead.set(12.5);

    assert_eq!(toggle.toggle(), PlaybackCommand::Pause);
    assert!(!toggle.state().is_playing());
    assert_eq!(toggle.state().resume_at_sec(), 12.5);

    playhead.set(0.0);
    assert_eq!(toggle.toggle(), PlaybackCommand::Resume { offset_sec: 12.5 });
    assert_eq!(
        *events.borrow(),
        vec![
            "start#1@0".to_string(),
            "pause#1".to_string(),
            "start#2@12.5".to_string(),
        ]
    );
}

#[test]
fn each_resume_uses_a_fresh_track() {
    let (mut toggle, _, events) = make_toggle();
    toggle.toggle();
    toggle.toggle();
    toggle.toggle();
    assert_eq!(
        *events.borrow(),
        vec![
            "start#1@0".to_string(),
            "pause#1".to_string(),
            "start#2@0".to_string(),
        ]
    );
}

#[test]
fn release_stops_and_resets() {
    let (mut toggle, playhead, events) = make_toggle();
    toggle.toggle();
    playhead.set(3.0);
    toggle.release();
    assert_eq!(toggle.state(), PlaybackState::default());
    assert_eq!(events.borrow().last().map(String::as_str), Some("pause#1"));
}

#[test]
fn dropping_a_playing_toggle_pauses_the_track() {
    let (mut toggle, _, events) = make_toggle();
    toggle.toggle();
    drop(toggle);
    assert_eq!(
        *events.borrow(),
        vec!["start#1@0".to_string(), "pause#1".to_string()]
    );
}

#[test]
fn drop_after_release_does_not_pause_again() {
    let (mut toggle, _, events) = make_toggle();
    toggle.toggle();
    toggle.release();
    drop(toggle);
    let pauses = events.borrow().iter().filter(|e| e.starts_with("pause")).count();
    assert_eq!(pauses, 1);
}

#[test]
fn release_while_paused_does_not_pause_twice() {
    let (mut toggle, _, events) = make_toggle();
    toggle.toggle();
    toggle.toggle();
    toggle.release();
    let pauses = events.borrow().iter().filter(|e| e.starts_with("pause")).count();
    assert_eq!(pauses, 1);
}

#[test]
fn negative_position_is_recorded_as_zero() {
    let mut state = PlaybackState::default();
    state.toggle(0.0);
    state.toggle(-1.0);
    assert_eq!(state.resume_at_sec(), 0.0);
}
