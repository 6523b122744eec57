//! Browser glue and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here runs on the page's main thread. State holders are shared
//! between event callbacks through `Rc`; their interior state lives in
//! `localStorage` and a `Cell`, so no handler needs `&mut`.
//!
//! Load order: read config, start console logging, install the preview flag,
//! then install the configured theme variant. Each module publishes its
//! `window` accessor first; later optional steps (reading the URL, watching
//! the system scheme) log failures and carry on. The theme is applied before
//! the DOM is ready; the button is wired afterwards. Pages loading the module
//! with `type="module"` run it after first paint and need an inline pre-paint
//! class, as `demo/index.html` shows.

pub mod dom;
pub mod install;
pub mod media;
pub mod storage;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::{Config, ThemeVariant};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            let _ = console_log::init_with_level(log::Level::Info);
            log::warn!("sitekit: {e}, nothing installed");
            return;
        }
    };

    let (config, config_err) = match dom::read_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let level = config.log_level();
    let _ = console_log::init_with_level(level.as_ref().copied().unwrap_or(log::Level::Info));
    if let Some(e) = config_err {
        log::warn!("config: {e}, using defaults");
    }
    if let Err(e) = level {
        log::warn!("config: {e}, logging at info");
    }

    if config.preview {
        if let Err(e) = install::preview(&document, &config) {
            log::warn!("preview: {e}");
        }
    }

    if config.theme {
        let installed = match config.variant {
            ThemeVariant::Toggle => install::toggle(&document, &config),
            ThemeVariant::Cycle => install::cycle(&document, &config),
        };
        if let Err(e) = installed {
            log::warn!("theme: {e}");
        }
    }
}
