//! Shared-state seam between async flows and whoever renders the state.
//!
//! Async operations in this crate suspend at remote calls, so they cannot hold
//! a `&mut` borrow across an await. Instead they commit each state transition
//! through a [`StateCell`] in a single closure. The view layer implements the
//! trait over its reactive signal type; tests use `RefCell`.
//!
//! Both methods return `None` when the backing cell no longer exists (a
//! disposed signal), in which case the transition is dropped.

use std::cell::RefCell;
use std::rc::Rc;

/// A single-owner mutable cell that readers observe only between writes.
pub trait StateCell<T> {
    /// Run `f` against the current value.
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    /// Run `f` against the current value with exclusive access.
    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T, C: StateCell<T>> StateCell<T> for Rc<C> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.as_ref().read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.as_ref().write(f)
    }
}

impl<T, C: StateCell<T>> StateCell<T> for &C {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        (*self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        (*self).write(f)
    }
}
