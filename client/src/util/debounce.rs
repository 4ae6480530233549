//! Trailing-edge debounce on top of `gloo-timers`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs `action` once no trigger has arrived for `wait_ms`.
///
/// Each trigger replaces the pending [`Timeout`]; dropping the old one
/// cancels it.
#[derive(Clone)]
pub struct Debounced {
    wait_ms: u32,
    action: Rc<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounced {
    pub fn new(wait_ms: u32, action: impl Fn() + 'static) -> Self {
        Self { wait_ms, action: Rc::new(action), pending: Rc::new(RefCell::new(None)) }
    }

    pub fn trigger(&self) {
        let action = Rc::clone(&self.action);
        let timeout = Timeout::new(self.wait_ms, move || action());
        *self.pending.borrow_mut() = Some(timeout);
    }
}
