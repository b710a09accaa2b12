//! State engine for the marketplace admin dashboard.
//!
//! This crate is browser-free. It owns every piece of client state the
//! dashboard renders: which transient overlay is open, the light/dark
//! preference, the sign-out sequence, the local product cache with its
//! pagination cursor, and the create/edit form with its image-upload batch.
//! The `client` crate binds these models to Leptos signals and supplies the
//! browser-backed collaborators (HTTP, asset storage, `localStorage`).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`overlay`] | Mutually exclusive profile menu / notification panel |
//! | [`shell`] | Sidebar and drawer chrome layered over the overlay registry |
//! | [`notifications`] | Notification feed and unread badge count |
//! | [`theme`] | Persisted light/dark preference with system fallback |
//! | [`session`] | Sign-out sequence and session-token bookkeeping |
//! | [`list`] | Product cache, pagination, remote CRUD synchronization |
//! | [`form`] | Create/edit modal form and its upload pipeline |
//! | [`product`] | Wire types for catalog products |
//! | [`service`] | Remote collaborator traits |
//! | [`storage`] | Durable key/value preference storage |
//! | [`cell`] | Shared-state seam between async flows and the view layer |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Page size, storage keys, routes, delays |

pub mod cell;
pub mod consts;
pub mod error;
pub mod form;
pub mod list;
pub mod notifications;
pub mod overlay;
pub mod product;
pub mod service;
pub mod session;
pub mod shell;
pub mod storage;
pub mod theme;

#[cfg(test)]
mod testing;
