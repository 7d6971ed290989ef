use crate::core::ScrollPan;
use crate::dom::Listener;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window wheel ticks into the gallery pan. Every event is applied
/// immediately; nothing is coalesced.
///
/// Line- and page-mode deltas are converted to pixels before the impulse
/// scale, so a notched mouse wheel pans as far as a trackpad. Pixel-mode
/// deltas, the common case, pass through unchanged.
pub fn wire_wheel_pan(pan: Rc<RefCell<ScrollPan>>) -> Option<Listener> {
    let window = web::window()?;
    Some(Listener::new(&window, "wheel", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::WheelEvent>() else {
            return;
        };
        let page_h = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(800.0);
        let dy = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_h);
        pan.borrow_mut().on_wheel(dy);
    }))
}
