use std::cell::Cell;
use std::rc::Rc;

/// Shared "still mounted" flag. Clones observe the same state; once cancelled
/// a token never becomes alive again.
#[derive(Clone, Debug)]
pub struct LifetimeToken {
    alive: Rc<Cell<bool>>,
}

impl Default for LifetimeToken {
    fn default() -> Self {
        Self::new()
    }
}

impl LifetimeToken {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn cancel(&self) {
        self.alive.set(false);
    }

    /// Run `f` only while the owner is mounted.
    #[inline]
    pub fn run_if_alive<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        self.is_alive().then(f)
    }
}
