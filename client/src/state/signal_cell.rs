//! `StateCell` over a Leptos signal.
//!
//! Reads are untracked: the engine peeks at state from inside async tasks,
//! where subscribing would leak effects. Writes notify subscribers once per
//! committed closure. A disposed signal (the owning route unmounted) yields
//! `None` and the transition is dropped.

#[cfg(test)]
#[path = "signal_cell_test.rs"]
mod signal_cell_test;

use catalog::cell::StateCell;
use leptos::prelude::*;

pub struct SignalCell<T: Send + Sync + 'static>(RwSignal<T>);

impl<T: Send + Sync + 'static> SignalCell<T> {
    pub fn new(signal: RwSignal<T>) -> Self {
        Self(signal)
    }

    pub fn signal(&self) -> RwSignal<T> {
        self.0
    }
}

impl<T: Send + Sync + 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SignalCell<T> {}

impl<T: Send + Sync + 'static> From<RwSignal<T>> for SignalCell<T> {
    fn from(signal: RwSignal<T>) -> Self {
        Self(signal)
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for SignalCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
