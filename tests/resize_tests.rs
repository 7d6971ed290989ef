// Host-side tests for the scene resize rule and late subscribers.

#![allow(dead_code)]
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use crate::core::camera::PerspectiveCamera;
use crate::core::viewport::*;
use std::cell::RefCell;
use std::rc::Rc;

fn camera_for(vp: &Viewport) -> PerspectiveCamera {
    PerspectiveCamera::new(75.0, vp.aspect(), 0.1, 100.0)
}

#[test]
fn resize_matches_aspect_and_renderer_size() {
    let mut cam = camera_for(&Viewport::new(1600.0, 900.0, 1.0));
    for (w, h) in [(800.0, 800.0), (1920.0, 1080.0), (375.0, 812.0)] {
        let vp = Viewport::new(w, h, 3.0);
        cam.fit_viewport(&vp);
        assert_eq!(cam.aspect, (w / h) as f32);
        assert_eq!(vp.renderer_size(), (w as u32, h as u32));
    }
}

#[test]
fn late_subscriber_catches_up_with_last_resize() {
    let mut hub = ViewportHub::new();
    let cam = Rc::new(RefCell::new(camera_for(&Viewport::new(1600.0, 900.0, 1.0))));

    // window resized while the scene was still loading
    hub.publish(Viewport::new(800.0, 800.0, 1.0));

    let c = cam.clone();
    hub.subscribe(move |vp| c.borrow_mut().fit_viewport(&vp));
    assert_eq!(cam.borrow().aspect, 1.0);

    hub.publish(Viewport::new(1200.0, 600.0, 1.0));
    assert_eq!(cam.borrow().aspect, 2.0);
}

#[test]
fn subscriber_before_any_resize_is_not_called() {
    let mut hub = ViewportHub::new();
    let calls = Rc::new(RefCell::new(0));
    let c = calls.clone();
    hub.subscribe(move |_| *c.borrow_mut() += 1);
    assert_eq!(*calls.borrow(), 0);
    assert!(hub.current().is_none());
}

#[test]
fn degenerate_window_keeps_previous_aspect() {
    let mut cam = camera_for(&Viewport::new(1600.0, 900.0, 1.0));
    cam.fit_viewport(&Viewport::new(1600.0, 0.0, 1.0));
    assert_eq!(cam.aspect, (1600.0f64 / 900.0) as f32);
}
