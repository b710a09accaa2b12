//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the product surfaces while
//! reading/writing shared engine state from Leptos context providers.

pub mod header;
pub mod left_sidebar;
pub mod notification_drawer;
pub mod product_card;
pub mod product_form_modal;
