//! Theme and preference types plus the toggle button's display text.

use std::fmt;

use crate::consts::{ICON_AUTO, ICON_DARK, ICON_LIGHT};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A theme that can actually be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Parse a stored value. Anything other than `light` or `dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored preference in the three-state design, where `auto` is explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "auto" => Some(Self::Auto),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Next step in the `auto → light → dark → auto` cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
        }
    }

    /// Resolve to a renderable theme, consulting the system only for `auto`.
    #[must_use]
    pub fn resolve(self, system_dark: bool) -> Theme {
        match self {
            Self::Auto => Theme::from_dark(system_dark),
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon, label, and tooltip shown on the toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDisplay {
    pub icon: &'static str,
    pub label: &'static str,
    pub title: &'static str,
}

/// Display for the two-state toggle: the effective theme plus whether it is
/// following the system.
#[must_use]
pub fn toggle_display(effective: Theme, auto: bool) -> ButtonDisplay {
    match (effective, auto) {
        (Theme::Light, true) => ButtonDisplay {
            icon: ICON_LIGHT,
            label: "Light (auto)",
            title: "Light mode (following system)\nClick: Switch to dark\nDouble-click: Keep auto mode",
        },
        (Theme::Light, false) => ButtonDisplay {
            icon: ICON_LIGHT,
            label: "Light",
            title: "Light mode\nClick: Switch to dark\nDouble-click: Reset to auto",
        },
        (Theme::Dark, true) => ButtonDisplay {
            icon: ICON_DARK,
            label: "Dark (auto)",
            title: "Dark mode (following system)\nClick: Switch to light\nDouble-click: Keep auto mode",
        },
        (Theme::Dark, false) => ButtonDisplay {
            icon: ICON_DARK,
            label: "Dark",
            title: "Dark mode\nClick: Switch to light\nDouble-click: Reset to auto",
        },
    }
}

/// Display for the three-state cycle, keyed on the stored preference.
#[must_use]
pub fn cycle_display(preference: ThemePreference) -> ButtonDisplay {
    match preference {
        ThemePreference::Auto => ButtonDisplay {
            icon: ICON_AUTO,
            label: "Auto",
            title: "Theme: Auto (following system)",
        },
        ThemePreference::Light => ButtonDisplay { icon: ICON_LIGHT, label: "Light", title: "Theme: Light" },
        ThemePreference::Dark => ButtonDisplay { icon: ICON_DARK, label: "Dark", title: "Theme: Dark" },
    }
}
