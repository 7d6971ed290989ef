use crate::core::LifetimeToken;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something that advances and draws once per display refresh.
pub trait FrameTick {
    fn frame(&mut self);
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owner of a running requestAnimationFrame loop.
///
/// The callback only holds a weak reference to itself, so dropping or
/// stopping the handle releases it.
pub struct LoopHandle {
    token: LifetimeToken,
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Cancel the token, drop the queued frame request and the callback.
    pub fn stop(&self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

/// Start a loop that calls `ctx.frame()` every animation frame while `token`
/// is alive. Once the token is cancelled the next callback returns without
/// drawing or re-scheduling.
pub fn start_loop<T: FrameTick + 'static>(ctx: Rc<RefCell<T>>, token: LifetimeToken) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let weak_tick = Rc::downgrade(&tick);
    let pending_cb = pending.clone();
    let token_cb = token.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_cb.set(None);
        if !token_cb.is_alive() {
            return;
        }
        ctx.borrow_mut().frame();
        if let Some(tick) = weak_tick.upgrade() {
            request(&tick, &pending_cb);
        }
    }) as Box<dyn FnMut()>));

    request(&tick, &pending);
    LoopHandle {
        token,
        tick,
        pending,
    }
}
