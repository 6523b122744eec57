//! System color scheme via `matchMedia("(prefers-color-scheme: dark)")`.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::MediaQueryList;

use crate::consts::DARK_SCHEME_QUERY;
use crate::error::BrowserError;
use crate::scheme::ColorScheme;

pub struct MediaScheme {
    query: Option<MediaQueryList>,
}

impl MediaScheme {
    pub fn open() -> Self {
        let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        Self { query }
    }

    /// Call `on_change` with the new dark preference whenever the system
    /// scheme changes, for the lifetime of the page.
    ///
    /// Uses `addEventListener("change")` where the browser has it and the
    /// legacy `addListener` otherwise. Without media-query support this does
    /// nothing.
    pub fn subscribe(&self, mut on_change: impl FnMut(bool) + 'static) -> Result<(), BrowserError> {
        let Some(query) = self.query.clone() else {
            log::debug!("theme: matchMedia unsupported, not watching system scheme");
            return Ok(());
        };

        let watched = query.clone();
        let cb = Closure::wrap(Box::new(move |_event: JsValue| {
            on_change(watched.matches());
        }) as Box<dyn FnMut(JsValue)>);

        let modern = js_sys::Reflect::has(&query, &JsValue::from_str("addEventListener")).unwrap_or(false);
        if modern {
            query
                .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
                .map_err(|e| BrowserError::js("MediaQueryList.addEventListener", &e))?;
        } else {
            query
                .add_listener_with_opt_callback(Some(cb.as_ref().unchecked_ref()))
                .map_err(|e| BrowserError::js("MediaQueryList.addListener", &e))?;
        }

        // The listener stays registered until the page unloads.
        cb.forget();
        Ok(())
    }
}

impl ColorScheme for MediaScheme {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map_or(false, MediaQueryList::matches)
    }
}
