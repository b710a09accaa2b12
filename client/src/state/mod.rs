//! Reactive bindings for the catalog engine's state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Engine models are stored whole in `RwSignal`s provided via context; async
//! engine flows reach them through [`signal_cell::SignalCell`].

pub mod signal_cell;
