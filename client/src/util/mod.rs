//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic; each degrades to a no-op outside the browser.

pub mod auth;
pub mod dom;
pub mod storage;
pub mod theme;
