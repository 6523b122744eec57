//! Three-state theme cycle.
//!
//! `auto`, `light`, and `dark` are all stored explicitly and every click
//! advances one step: `auto → light → dark → auto`. An empty or
//! unrecognised stored value reads as `auto`.

use crate::consts::THEME_KEY;
use crate::scheme::ColorScheme;
use crate::storage::KeyValueStore;
use crate::surface::ThemeSurface;
use crate::theme::{ButtonDisplay, Theme, ThemePreference, cycle_display};

#[cfg(test)]
#[path = "cycle_test.rs"]
mod cycle_test;

pub struct ThemeCycle<S, P, V> {
    store: S,
    scheme: P,
    surface: V,
    key: String,
}

impl<S, P, V> ThemeCycle<S, P, V>
where
    S: KeyValueStore,
    P: ColorScheme,
    V: ThemeSurface,
{
    pub fn new(store: S, scheme: P, surface: V) -> Self {
        Self { store, scheme, surface, key: THEME_KEY.to_owned() }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn stored(&self) -> ThemePreference {
        self.store
            .get(&self.key)
            .as_deref()
            .and_then(ThemePreference::parse)
            .unwrap_or_default()
    }

    pub fn effective(&self) -> Theme {
        self.stored().resolve(self.scheme.prefers_dark())
    }

    /// The surface this holder renders onto.
    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn display(&self) -> ButtonDisplay {
        cycle_display(self.stored())
    }

    pub fn apply(&self) {
        self.surface.apply_theme(self.effective());
        self.surface.render_button(&self.display());
    }

    pub fn set(&self, preference: ThemePreference) {
        self.store.set(&self.key, preference.as_str());
        self.apply();
        log::info!("theme: set to {preference} (effective: {})", self.effective());
    }

    /// Advance one step and return the new preference.
    pub fn cycle(&self) -> ThemePreference {
        let next = self.stored().next();
        self.set(next);
        next
    }

    /// Every click is one step; there is no double-click handling here.
    pub fn handle_click(&self) -> ThemePreference {
        self.cycle()
    }

    /// Re-render on a system change, but only while the preference is `auto`.
    pub fn on_system_change(&self, prefers_dark: bool) -> bool {
        if self.stored() != ThemePreference::Auto {
            return false;
        }
        log::info!("theme: system theme changed to {}", Theme::from_dark(prefers_dark));
        self.apply();
        true
    }
}
