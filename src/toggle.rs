//! Two-state light/dark toggle.
//!
//! With nothing stored the page is in auto mode and follows the system
//! color scheme. A click stores the inverse of whatever is currently shown;
//! a second click inside the double-click window clears the stored value and
//! returns to auto.
//!
//! Stored values other than `light` or `dark` read as auto.

use std::cell::Cell;

use crate::consts::{DOUBLE_CLICK_MS, THEME_KEY};
use crate::scheme::ColorScheme;
use crate::storage::KeyValueStore;
use crate::surface::ThemeSurface;
use crate::theme::{ButtonDisplay, Theme, toggle_display};

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// How a button click was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Single click: the effective theme was inverted and stored.
    Toggled(Theme),
    /// Double click: the stored preference was cleared.
    Reset,
}

pub struct ThemeToggle<S, P, V> {
    store: S,
    scheme: P,
    surface: V,
    key: String,
    double_click_ms: f64,
    /// Time of the last single click; cleared after a double click so a
    /// third click starts fresh.
    last_click_ms: Cell<Option<f64>>,
}

impl<S, P, V> ThemeToggle<S, P, V>
where
    S: KeyValueStore,
    P: ColorScheme,
    V: ThemeSurface,
{
    pub fn new(store: S, scheme: P, surface: V) -> Self {
        Self {
            store,
            scheme,
            surface,
            key: THEME_KEY.to_owned(),
            double_click_ms: DOUBLE_CLICK_MS,
            last_click_ms: Cell::new(None),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_double_click_ms(mut self, ms: f64) -> Self {
        self.double_click_ms = ms;
        self
    }

    // --- Queries ---

    /// The manual override, or `None` in auto mode.
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(&self.key).as_deref().and_then(Theme::parse)
    }

    pub fn is_auto(&self) -> bool {
        self.stored().is_none()
    }

    /// The theme actually rendered.
    pub fn effective(&self) -> Theme {
        self.stored()
            .unwrap_or_else(|| Theme::from_dark(self.scheme.prefers_dark()))
    }

    /// The surface this holder renders onto.
    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn display(&self) -> ButtonDisplay {
        toggle_display(self.effective(), self.is_auto())
    }

    // --- Mutations ---

    /// Render the effective theme and refresh the button.
    pub fn apply(&self) {
        self.surface.apply_theme(self.effective());
        self.surface.render_button(&self.display());
    }

    /// Store `theme`, or clear the override with `None`, then re-render.
    pub fn set(&self, theme: Option<Theme>) {
        match theme {
            Some(theme) => {
                self.store.set(&self.key, theme.as_str());
                log::info!("theme: set to {theme}");
            }
            None => {
                self.store.remove(&self.key);
                log::info!("theme: reset to auto (following system)");
            }
        }
        self.apply();
    }

    /// Store the inverse of the current effective theme.
    pub fn toggle(&self) -> Theme {
        let next = self.effective().inverse();
        self.set(Some(next));
        next
    }

    pub fn reset(&self) {
        self.set(None);
    }

    /// Interpret a click at `now_ms` (milliseconds on any monotonic-enough
    /// clock, e.g. `Date.now()`).
    pub fn handle_click(&self, now_ms: f64) -> ClickAction {
        let double = self
            .last_click_ms
            .get()
            .is_some_and(|last| now_ms - last < self.double_click_ms);

        if double {
            self.reset();
            self.last_click_ms.set(None);
            ClickAction::Reset
        } else {
            let theme = self.toggle();
            self.last_click_ms.set(Some(now_ms));
            ClickAction::Toggled(theme)
        }
    }

    /// React to a system color-scheme change. Only auto mode re-renders;
    /// returns whether it did.
    pub fn on_system_change(&self, prefers_dark: bool) -> bool {
        if !self.is_auto() {
            log::debug!("theme: system changed to {}, manual override kept", Theme::from_dark(prefers_dark));
            return false;
        }
        log::info!("theme: system changed to {}, updating (auto mode)", Theme::from_dark(prefers_dark));
        self.apply();
        true
    }
}
