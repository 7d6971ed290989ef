// Host-side tests for the gallery scroll pan.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod pan {
        include!("../src/core/pan.rs");
    }
}

use crate::core::constants::*;
use crate::core::pan::ScrollPan;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn starts_at_rest() {
    let mut pan = ScrollPan::new();
    assert_eq!(pan.step(), 0.0);
    assert_eq!(pan.velocity, 0.0);
}

#[test]
fn wheel_adds_scaled_impulse() {
    let mut pan = ScrollPan::new();
    pan.on_wheel(100.0);
    assert!(approx(pan.velocity, 100.0 * WHEEL_IMPULSE_SCALE, 1e-7));
    pan.on_wheel(100.0);
    assert!(approx(pan.velocity, 200.0 * WHEEL_IMPULSE_SCALE, 1e-7));
    pan.on_wheel(-300.0);
    assert!(approx(pan.velocity, -100.0 * WHEEL_IMPULSE_SCALE, 1e-7));
}

#[test]
fn ten_frames_after_one_tick() {
    let mut pan = ScrollPan::new();
    pan.on_wheel(100.0);
    let mut x = 0.0;
    for _ in 0..10 {
        x = pan.step();
    }
    // 0.09 * (1 - 0.9^10) / 0.1 and 0.09 * 0.9^10
    assert!(approx(x, 0.586_19, 1e-4), "x = {}", x);
    assert!(approx(pan.velocity, 0.031_381, 1e-5), "v = {}", pan.velocity);
}

#[test]
fn position_is_partial_geometric_sum() {
    let mut pan = ScrollPan::new();
    pan.on_wheel(40.0);
    let v0 = pan.velocity;
    for n in 1..=30 {
        let x = pan.step();
        let expected = v0 * (1.0 - PAN_DECAY_PER_FRAME.powi(n)) / (1.0 - PAN_DECAY_PER_FRAME);
        assert!(approx(x, expected, 1e-5), "frame {}: {} vs {}", n, x, expected);
    }
}

#[test]
fn settles_at_total_travel() {
    let mut pan = ScrollPan::new();
    pan.on_wheel(100.0);
    for _ in 0..500 {
        pan.step();
    }
    assert!(approx(pan.position, 0.9, 1e-4));
    assert!(pan.velocity.abs() < 1e-9);
}

#[test]
fn large_delta_is_not_clamped() {
    let mut pan = ScrollPan::new();
    pan.on_wheel(1.0e6);
    assert!(approx(pan.velocity, 900.0, 1e-2));
    assert!(pan.step() > 800.0);
}

#[test]
fn seat_keeps_velocity() {
    let mut pan = ScrollPan::new();
    pan.on_wheel(100.0);
    pan.seat(-4.0);
    assert_eq!(pan.position, -4.0);
    let x = pan.step();
    assert!(approx(x, -4.0 + 0.09, 1e-6));
}
