use crate::core::{LifetimeToken, Viewport};
use crate::dom::Listener;
use crate::frame::{self, FrameTick, LoopHandle};
use crate::resize::{self, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// A render loop that also follows the window size.
pub trait Scene: FrameTick {
    fn resize(&mut self, vp: Viewport);
}

type Running = Rc<RefCell<Option<(LoopHandle, Subscription)>>>;

/// Everything a mounted scene holds on to. Scenes finish their async GPU
/// setup after `Mounted` is created, so the running parts arrive later
/// through `running`.
pub struct Mounted {
    token: LifetimeToken,
    running: Running,
    listeners: Vec<Listener>,
}

impl Mounted {
    pub fn new() -> Self {
        Self {
            token: LifetimeToken::new(),
            running: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.token.is_alive()
    }

    pub fn keep(&mut self, listeners: impl IntoIterator<Item = Listener>) {
        self.listeners.extend(listeners);
    }

    /// Hand a ready scene to the render loop and the resize hub.
    pub fn launcher(&self) -> Launcher {
        Launcher {
            token: self.token.clone(),
            running: self.running.clone(),
        }
    }

    /// Stop the loop and detach every listener. Idempotent.
    pub fn unmount(&mut self) {
        if !self.token.is_alive() {
            return;
        }
        self.token.cancel();
        if let Some((handle, sub)) = self.running.borrow_mut().take() {
            handle.stop();
            drop(sub);
        }
        self.listeners.clear();
    }
}

impl Default for Mounted {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.unmount();
    }
}

pub struct Launcher {
    token: LifetimeToken,
    running: Running,
}

impl Launcher {
    pub fn is_alive(&self) -> bool {
        self.token.is_alive()
    }

    pub fn launch<S: Scene + 'static>(self, scene: S) {
        if !self.token.is_alive() {
            log::debug!("[mount] scene ready after unmount; discarded");
            return;
        }
        let scene = Rc::new(RefCell::new(scene));
        let scene_resize = scene.clone();
        let token_resize = self.token.clone();
        // Replays the latest window size, covering resizes during asset loading
        let sub = resize::subscribe(move |vp| {
            token_resize.run_if_alive(|| scene_resize.borrow_mut().resize(vp));
        });
        let handle = frame::start_loop(scene, self.token.clone());
        *self.running.borrow_mut() = Some((handle, sub));
    }
}
