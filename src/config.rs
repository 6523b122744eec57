//! Page configuration parsed from JSON.
//!
//! Every field is optional; omitted fields take the defaults in
//! [`crate::consts`]. In the browser the JSON comes from a
//! `<script id="sitekit-config" type="application/json">` element.

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Which theme switcher design the page installs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Click toggles light/dark, double-click resets to auto.
    #[default]
    Toggle,
    /// Click cycles `auto → light → dark`.
    Cycle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Install the preview flag module.
    pub preview: bool,
    /// Install the theme module.
    pub theme: bool,
    pub variant: ThemeVariant,
    pub preview_param: String,
    pub preview_key: String,
    pub badge_id: String,
    pub badge_text: String,
    pub theme_key: String,
    pub button_id: String,
    pub icon_selector: String,
    pub label_selector: String,
    pub light_class: String,
    pub dark_class: String,
    pub double_click_ms: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview: true,
            theme: true,
            variant: ThemeVariant::default(),
            preview_param: consts::PREVIEW_PARAM.to_owned(),
            preview_key: consts::PREVIEW_KEY.to_owned(),
            badge_id: consts::BADGE_ID.to_owned(),
            badge_text: consts::BADGE_TEXT.to_owned(),
            theme_key: consts::THEME_KEY.to_owned(),
            button_id: consts::BUTTON_ID.to_owned(),
            icon_selector: consts::ICON_SELECTOR.to_owned(),
            label_selector: consts::LABEL_SELECTOR.to_owned(),
            light_class: consts::LIGHT_CLASS.to_owned(),
            dark_class: consts::DARK_CLASS.to_owned(),
            double_click_ms: consts::DOUBLE_CLICK_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Parse a config document. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured console log level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
