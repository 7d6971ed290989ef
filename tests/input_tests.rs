// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_between_moves() {
    let mut d = DragState::default();
    d.begin(Vec2::new(10.0, 10.0));
    assert_eq!(d.drag_to(Vec2::new(15.0, 7.0)), Some(Vec2::new(5.0, -3.0)));
    assert_eq!(d.drag_to(Vec2::new(15.0, 17.0)), Some(Vec2::new(0.0, 10.0)));
}

#[test]
fn moves_without_drag_are_ignored() {
    let mut d = DragState::default();
    assert_eq!(d.drag_to(Vec2::new(1.0, 1.0)), None);
    d.begin(Vec2::ZERO);
    d.end();
    assert_eq!(d.drag_to(Vec2::new(1.0, 1.0)), None);
    assert!(!d.active);
}

#[test]
fn pixel_wheel_deltas_pass_through() {
    assert_eq!(wheel_delta_px(100.0, 0, 900.0), 100.0);
    assert_eq!(wheel_delta_px(-53.5, 0, 900.0), -53.5);
}

#[test]
fn line_and_page_deltas_become_pixels() {
    assert_eq!(wheel_delta_px(3.0, 1, 900.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 900.0), -900.0);
}
