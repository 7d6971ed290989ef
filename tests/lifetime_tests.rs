// Host-side tests for the mount lifetime token.

#![allow(dead_code)]
mod core {
    pub mod lifetime {
        include!("../src/core/lifetime.rs");
    }
}

use crate::core::lifetime::LifetimeToken;

#[test]
fn new_token_is_alive() {
    let t = LifetimeToken::new();
    assert!(t.is_alive());
    assert_eq!(t.run_if_alive(|| 5), Some(5));
}

#[test]
fn clones_share_cancellation() {
    let owner = LifetimeToken::new();
    let frame_cb = owner.clone();
    let resize_cb = owner.clone();
    owner.cancel();
    assert!(!frame_cb.is_alive());
    assert!(!resize_cb.is_alive());
}

#[test]
fn cancelled_token_skips_work() {
    let t = LifetimeToken::new();
    t.cancel();
    let mut ran = false;
    assert_eq!(t.run_if_alive(|| ran = true), None);
    assert!(!ran);
}

#[test]
fn cancel_is_idempotent() {
    let t = LifetimeToken::default();
    t.cancel();
    t.cancel();
    assert!(!t.is_alive());
}
