//! Networking adapters for the remote collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the catalog engine's `CatalogService` and `AssetStore`
//! seams over `gloo-net`, plus the credential exchange used by the login page.

pub mod api;
