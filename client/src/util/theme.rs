//! Applies the resolved theme to the document and reads the system signal.
//!
//! TRADE-OFFS
//! ==========
//! The server always renders the light theme; the stored preference is only
//! applied once hydration runs, so a dark-mode user may see one light frame.

use catalog::theme::Theme;

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("could not apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// `prefers-color-scheme: dark`, or `None` when media queries are unavailable.
pub fn system_prefers_dark() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
