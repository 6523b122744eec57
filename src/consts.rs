//! Default keys, selectors, and timings shared by the page modules.

// ── Preview flag ────────────────────────────────────────────────

/// Query parameter that switches preview mode on or off.
pub const PREVIEW_PARAM: &str = "preview";

/// Storage key holding `"true"` while preview mode is active.
pub const PREVIEW_KEY: &str = "preview_mode";

/// Element id of the injected preview badge.
pub const BADGE_ID: &str = "preview-badge";

/// Text shown inside the preview badge.
pub const BADGE_TEXT: &str = "Preview Mode";

/// Inline style declarations for the preview badge, joined with `;`.
pub const BADGE_STYLE: [&str; 11] = [
    "position: fixed",
    "bottom: 10px",
    "right: 10px",
    "background: rgba(255, 165, 0, 0.9)",
    "color: white",
    "padding: 5px 10px",
    "border-radius: 4px",
    "font-size: 12px",
    "font-family: monospace",
    "z-index: 10000",
    "box-shadow: 0 2px 4px rgba(0,0,0,0.2)",
];

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the manual theme preference.
pub const THEME_KEY: &str = "theme-preference";

/// Media query used to read the OS color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Element id of the theme toggle button.
pub const BUTTON_ID: &str = "theme-toggle";

/// Selector for the icon element inside the toggle button.
pub const ICON_SELECTOR: &str = ".theme-icon";

/// Selector for the text label inside the toggle button.
pub const LABEL_SELECTOR: &str = ".theme-label";

/// Class placed on `<html>` while the light theme is applied.
pub const LIGHT_CLASS: &str = "light-theme";

/// Class placed on `<html>` while the dark theme is applied.
pub const DARK_CLASS: &str = "dark-theme";

/// Two clicks closer together than this count as a double-click.
pub const DOUBLE_CLICK_MS: f64 = 300.0;

// ── Icons ───────────────────────────────────────────────────────

pub const ICON_LIGHT: &str = "\u{2600}";
pub const ICON_DARK: &str = "\u{263E}";
pub const ICON_AUTO: &str = "\u{25D0}";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "sitekit-config";
