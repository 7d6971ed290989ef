//! Window resize fan-out shared by every mounted scene.
//!
//! One `resize` listener is installed on first use; scenes subscribe and get
//! a guard that unsubscribes on drop.

use crate::core::viewport::{SubscriptionId, ViewportHub};
use crate::core::Viewport;
use crate::dom;
use std::cell::RefCell;
use web_sys as web;

thread_local! {
    static HUB: RefCell<ViewportHub> = RefCell::new(ViewportHub::new());
    static WINDOW_LISTENER: RefCell<Option<dom::Listener>> = const { RefCell::new(None) };
}

fn ensure_listener() {
    WINDOW_LISTENER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        // Seed the latest size so late subscribers catch up immediately
        HUB.with(|hub| {
            let mut hub = hub.borrow_mut();
            if hub.current().is_none() {
                if let Some(vp) = dom::window_viewport() {
                    hub.publish(vp);
                }
            }
        });
        *slot = Some(dom::Listener::new(&window, "resize", |_| {
            if let Some(vp) = dom::window_viewport() {
                HUB.with(|hub| hub.borrow_mut().publish(vp));
            }
        }));
        log::debug!("[resize] window listener installed");
    });
}

/// Keeps a resize subscription alive.
pub struct Subscription(SubscriptionId);

impl Drop for Subscription {
    fn drop(&mut self) {
        HUB.with(|hub| {
            if let Ok(mut hub) = hub.try_borrow_mut() {
                hub.unsubscribe(self.0);
                if hub.is_empty() {
                    log::debug!("[resize] no scenes subscribed");
                }
            } else {
                log::warn!("[resize] unsubscribe during dispatch ignored");
            }
        });
    }
}

pub fn subscribe(f: impl FnMut(Viewport) + 'static) -> Subscription {
    ensure_listener();
    HUB.with(|hub| {
        let mut hub = hub.borrow_mut();
        let id = hub.subscribe(f);
        log::debug!("[resize] subscribed #{} ({} active)", id, hub.len());
        Subscription(id)
    })
}
