//! Light/dark theme preference.
//!
//! Resolution order on startup: persisted value, then the system
//! `prefers-color-scheme` signal, then light. Startup never writes. Every
//! toggle writes through to storage.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. When storage is unreadable or refuses a write
//! the controller keeps running in memory and only logs; the user never sees
//! a storage error.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_KEY;
use crate::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    fn from_system(prefers_dark: Option<bool>) -> Self {
        if prefers_dark == Some(true) { Self::Dark } else { Self::Light }
    }
}

#[derive(Debug)]
pub struct ThemeController<P> {
    store: P,
    current: Theme,
    persistent: bool,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Resolve the startup theme. `prefers_dark` is `None` when the system
    /// signal is unavailable.
    pub fn initialize(store: P, prefers_dark: Option<bool>) -> Self {
        let (current, persistent) = match store.get(THEME_KEY) {
            Ok(Some(raw)) => match Theme::parse(&raw) {
                Some(theme) => (theme, true),
                None => {
                    log::warn!("ignoring unrecognised stored theme {raw:?}");
                    (Theme::from_system(prefers_dark), true)
                }
            },
            Ok(None) => (Theme::from_system(prefers_dark), true),
            Err(e) => {
                log::warn!("theme storage unavailable, using memory only: {e}");
                (Theme::from_system(prefers_dark), false)
            }
        };
        Self { store, current, persistent }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// `false` once storage has failed; the theme is then memory-only.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Flip the theme and persist it. Returns the theme to render.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if self.persistent {
            if let Err(e) = self.store.set(THEME_KEY, self.current.as_str()) {
                log::warn!("theme not persisted, continuing in memory: {e}");
                self.persistent = false;
            }
        }
        self.current
    }
}
