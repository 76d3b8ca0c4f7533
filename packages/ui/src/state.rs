//! Short-lived access to controller state.
//!
//! Controllers never hold a borrow across an `.await`: every read or write goes
//! through a closure that runs synchronously. Components hand controllers a
//! [`Signal`]; tests use an `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

pub trait StateHandle<S> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R;
    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> R;
}

impl<S: 'static> StateHandle<S> for Signal<S> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut signal = *self;
        let mut guard = signal.write();
        f(&mut guard)
    }

    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.peek())
    }
}

impl<S> StateHandle<S> for Rc<RefCell<S>> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.borrow())
    }
}
