//! Navigational shell chrome: header overlays, sidebar drawer, right drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell is the single owner of every toggleable surface around the page
//! body. Opening a drawer or a modal closes the header overlays, and opening a
//! header overlay closes the mobile sidebar, so the user never sees two
//! competing surfaces.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::overlay::{Overlay, OverlayRegistry};

/// Content shown in the right-hand drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drawer {
    Notifications,
}

/// Entries in the profile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    Profile,
    Settings,
    Logout,
}

impl ProfileAction {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Settings, Self::Logout];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Logout => "Logout",
        }
    }

    /// Route for navigation entries; `Logout` runs the sign-out sequence
    /// instead.
    #[must_use]
    pub fn route(self) -> Option<&'static str> {
        match self {
            Self::Profile => Some("/app/profile"),
            Self::Settings => Some("/app/settings"),
            Self::Logout => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub page_title: String,
    overlays: OverlayRegistry,
    sidebar_open: bool,
    drawer: Option<Drawer>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            page_title: "Products".to_owned(),
            overlays: OverlayRegistry::default(),
            sidebar_open: false,
            drawer: None,
        }
    }
}

impl ShellState {
    #[must_use]
    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.overlays.is_open(overlay)
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub fn drawer(&self) -> Option<Drawer> {
        self.drawer
    }

    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.overlays.toggle(overlay).is_some() {
            self.sidebar_open = false;
        }
    }

    pub fn pointer_down(&mut self, hit: Option<Overlay>) {
        self.overlays.pointer_down(hit);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        if self.sidebar_open {
            self.overlays.close_all();
        }
    }

    /// A route change from the sidebar: the mobile drawer and any overlay close.
    pub fn navigate(&mut self, page_title: impl Into<String>) {
        self.page_title = page_title.into();
        self.sidebar_open = false;
        self.overlays.close_all();
    }

    pub fn open_drawer(&mut self, drawer: Drawer) {
        self.overlays.close_all();
        self.sidebar_open = false;
        self.drawer = Some(drawer);
    }

    pub fn close_drawer(&mut self) {
        self.drawer = None;
    }

    /// Called whenever a modal form opens.
    pub fn modal_opened(&mut self) {
        self.overlays.close_all();
        self.sidebar_open = false;
    }

    /// The profile menu closes before the chosen action runs.
    pub fn choose_profile_action(&mut self, action: ProfileAction) -> ProfileAction {
        self.overlays.close_all();
        action
    }
}
