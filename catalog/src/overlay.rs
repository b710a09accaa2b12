//! Registry of transient header overlays (profile menu, notification panel).
//!
//! DESIGN
//! ======
//! The open overlay is one tagged value rather than a flag per surface, so two
//! overlays can never be open at once. Every transition is a pure function of
//! the current value and the event; repeated toggles of one surface always
//! alternate open/closed.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// A transient surface anchored in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlay {
    ProfileMenu,
    NotificationPanel,
}

/// Tracks which overlay, if any, is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayRegistry {
    active: Option<Overlay>,
}

impl OverlayRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The open overlay, if any.
    #[must_use]
    pub fn active(&self) -> Option<Overlay> {
        self.active
    }

    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.active == Some(overlay)
    }

    /// Close `overlay` if it is the open one, otherwise open it in place of
    /// whatever was open. Returns the new active overlay.
    pub fn toggle(&mut self, overlay: Overlay) -> Option<Overlay> {
        self.active = if self.active == Some(overlay) { None } else { Some(overlay) };
        self.active
    }

    /// Close every overlay.
    pub fn close_all(&mut self) {
        self.active = None;
    }

    /// Feed a pointer-down event. `hit` names the overlay whose region contains
    /// the event target, or `None` when it landed outside all of them.
    pub fn pointer_down(&mut self, hit: Option<Overlay>) {
        if hit.is_none() {
            self.close_all();
        }
    }
}
