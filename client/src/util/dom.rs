//! Document-level pointer handling for dropdown overlays.
//!
//! Each dropdown (trigger plus panel) is wrapped in an element matching
//! [`DROPDOWN_SELECTOR`] and tagged with [`OVERLAY_ATTR`]. A `mousedown`
//! anywhere else closes whatever overlay is open.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use catalog::overlay::Overlay;
use catalog::shell::ShellState;
use leptos::prelude::*;

pub const DROPDOWN_SELECTOR: &str = ".dropdown-container";
pub const OVERLAY_ATTR: &str = "data-overlay";

/// Attribute value naming `overlay` in markup.
pub fn overlay_marker(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::ProfileMenu => "profile",
        Overlay::NotificationPanel => "notifications",
    }
}

pub fn overlay_from_marker(marker: &str) -> Option<Overlay> {
    match marker {
        "profile" => Some(Overlay::ProfileMenu),
        "notifications" => Some(Overlay::NotificationPanel),
        _ => None,
    }
}

/// Feed document `mousedown` events into the shell's overlay registry for as
/// long as the calling component is mounted.
pub fn install_outside_click(shell: RwSignal<ShellState>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if shell.with_untracked(|s| s.overlays().active().is_none()) {
                return;
            }
            let hit = hit_overlay(&ev);
            shell.update(|s| s.pointer_down(hit));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = shell;
    }
}

#[cfg(feature = "hydrate")]
fn hit_overlay(ev: &web_sys::MouseEvent) -> Option<Overlay> {
    use wasm_bindgen::JsCast;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let container = target.closest(DROPDOWN_SELECTOR).ok().flatten()?;
    overlay_from_marker(&container.get_attribute(OVERLAY_ATTR)?)
}
