use crate::core::OrbitControls;
use crate::dom::Listener;
use crate::input::DragState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_xy(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Drag on the canvas to tilt the orbit camera. Returns the listeners; drop
/// them to detach.
pub fn wire_orbit_drag(
    canvas: &web::HtmlCanvasElement,
    controls: Rc<RefCell<OrbitControls>>,
) -> Vec<Listener> {
    let drag = Rc::new(RefCell::new(DragState::default()));

    let down = {
        let drag = drag.clone();
        let canvas_c = canvas.clone();
        Listener::new(canvas, "pointerdown", move |ev: web::Event| {
            let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
                return;
            };
            if ev.button() != 0 {
                return;
            }
            _ = canvas_c.set_pointer_capture(ev.pointer_id());
            drag.borrow_mut().begin(client_xy(&ev));
        })
    };

    let moved = {
        let drag = drag.clone();
        let canvas_c = canvas.clone();
        Listener::new(canvas, "pointermove", move |ev: web::Event| {
            let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
                return;
            };
            if let Some(d) = drag.borrow_mut().drag_to(client_xy(&ev)) {
                let h = canvas_c.client_height() as f32;
                controls.borrow_mut().handle_drag(d.x, d.y, h);
            }
        })
    };

    let up = {
        let drag = drag.clone();
        let canvas_c = canvas.clone();
        Listener::new(canvas, "pointerup", move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<web::PointerEvent>() {
                _ = canvas_c.release_pointer_capture(ev.pointer_id());
            }
            drag.borrow_mut().end();
        })
    };

    let cancel = Listener::new(canvas, "pointercancel", move |_| {
        drag.borrow_mut().end();
    });

    vec![down, moved, up, cancel]
}
