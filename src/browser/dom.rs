//! Document glue: theme markers, the toggle button, the preview badge, and
//! DOM-ready scheduling.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Window};

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::{BrowserError, ConfigError};
use crate::preview::Badge;
use crate::surface::ThemeSurface;
use crate::theme::{ButtonDisplay, Theme};

pub fn window() -> Result<Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::Missing("window"))
}

pub fn document() -> Result<Document, BrowserError> {
    window()?.document().ok_or(BrowserError::Missing("document"))
}

/// Run `f` once the document has been parsed: immediately if it already has,
/// otherwise on `DOMContentLoaded`.
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<(), BrowserError> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
        .map_err(|e| BrowserError::js("addEventListener(DOMContentLoaded)", &e))
}

/// Value of the named query parameter on the current URL.
pub fn query_param(name: &str) -> Result<Option<String>, BrowserError> {
    let search = window()?
        .location()
        .search()
        .map_err(|e| BrowserError::js("location.search", &e))?;
    let params =
        web_sys::UrlSearchParams::new_with_str(&search).map_err(|e| BrowserError::js("URLSearchParams", &e))?;
    Ok(params.get(name))
}

/// Parse the page's `<script id="sitekit-config">` JSON, if present.
pub fn read_config(document: &Document) -> Result<Config, ConfigError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    Config::from_json(&raw)
}

/// Append the preview badge to `<body>` unless one is already there.
pub fn inject_badge(document: &Document, badge: &Badge) -> Result<(), BrowserError> {
    if document.get_element_by_id(&badge.id).is_some() {
        return Ok(());
    }
    let body = document.body().ok_or(BrowserError::Missing("document.body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| BrowserError::js("createElement", &e))?;
    el.set_id(&badge.id);
    el.set_text_content(Some(&badge.text));
    el.set_attribute("style", &badge.style)
        .map_err(|e| BrowserError::js("setAttribute(style)", &e))?;
    body.append_child(&el)
        .map_err(|e| BrowserError::js("appendChild", &e))?;
    Ok(())
}

/// Renders theme state onto `<html>` and the toggle button.
pub struct DocumentSurface {
    document: Document,
    button_id: String,
    icon_selector: String,
    label_selector: String,
    light_class: String,
    dark_class: String,
}

impl DocumentSurface {
    pub fn new(document: Document, config: &Config) -> Self {
        Self {
            document,
            button_id: config.button_id.clone(),
            icon_selector: config.icon_selector.clone(),
            label_selector: config.label_selector.clone(),
            light_class: config.light_class.clone(),
            dark_class: config.dark_class.clone(),
        }
    }

    /// The toggle button, if the page has one.
    pub fn button(&self) -> Option<web_sys::Element> {
        self.document.get_element_by_id(&self.button_id)
    }

    fn mark_root(&self, theme: Theme) -> Result<(), BrowserError> {
        let root = self
            .document
            .document_element()
            .ok_or(BrowserError::Missing("document.documentElement"))?;
        let (add, remove) = match theme {
            Theme::Dark => (&self.dark_class, &self.light_class),
            Theme::Light => (&self.light_class, &self.dark_class),
        };
        let classes = root.class_list();
        classes.add_1(add).map_err(|e| BrowserError::js("classList.add", &e))?;
        classes
            .remove_1(remove)
            .map_err(|e| BrowserError::js("classList.remove", &e))?;
        Ok(())
    }

    fn write_button(&self, display: &ButtonDisplay) -> Result<(), BrowserError> {
        let Some(button) = self.button() else {
            return Ok(());
        };
        let icon = button
            .query_selector(&self.icon_selector)
            .map_err(|e| BrowserError::js("querySelector(icon)", &e))?;
        let label = button
            .query_selector(&self.label_selector)
            .map_err(|e| BrowserError::js("querySelector(label)", &e))?;
        let (Some(icon), Some(label)) = (icon, label) else {
            return Ok(());
        };
        icon.set_text_content(Some(display.icon));
        label.set_text_content(Some(display.label));
        button
            .set_attribute("title", display.title)
            .map_err(|e| BrowserError::js("setAttribute(title)", &e))?;
        Ok(())
    }
}

impl ThemeSurface for DocumentSurface {
    fn apply_theme(&self, theme: Theme) {
        if let Err(e) = self.mark_root(theme) {
            log::warn!("theme: {e}");
        }
    }

    fn render_button(&self, display: &ButtonDisplay) {
        if let Err(e) = self.write_button(display) {
            log::warn!("theme: {e}");
        }
    }
}
