//! Installs the page modules and publishes their `window` accessors.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::Document;

use super::dom::{self, DocumentSurface};
use super::media::MediaScheme;
use super::storage::LocalStorage;
use crate::config::Config;
use crate::cycle::ThemeCycle;
use crate::error::{BrowserError, warn_on_err};
use crate::preview::PreviewFlag;
use crate::theme::{Theme, ThemePreference};
use crate::toggle::ThemeToggle;

type PageToggle = ThemeToggle<LocalStorage, Rc<MediaScheme>, DocumentSurface>;
type PageCycle = ThemeCycle<LocalStorage, Rc<MediaScheme>, DocumentSurface>;

// =============================================================================
// EXPORT HELPERS
// =============================================================================

fn set_property(target: &JsValue, name: &str, value: &JsValue) -> Result<(), BrowserError> {
    js_sys::Reflect::set(target, &JsValue::from_str(name), value).map_err(|e| BrowserError::js("Reflect.set", &e))?;
    Ok(())
}

fn getter(f: impl Fn() -> JsValue + 'static) -> JsValue {
    Closure::wrap(Box::new(f) as Box<dyn Fn() -> JsValue>).into_js_value()
}

fn setter(f: impl Fn(JsValue) + 'static) -> JsValue {
    Closure::wrap(Box::new(f) as Box<dyn Fn(JsValue)>).into_js_value()
}

// =============================================================================
// PREVIEW FLAG
// =============================================================================

/// Apply the `preview` query parameter, publish `window.isPreviewMode`, and
/// schedule the badge when preview mode is on.
pub fn preview(document: &Document, config: &Config) -> Result<(), BrowserError> {
    let flag = Rc::new(
        PreviewFlag::new(LocalStorage::open())
            .with_key(config.preview_key.clone())
            .with_badge(config.badge_id.clone(), config.badge_text.clone()),
    );

    // Published first so analytics loaders can always ask, even if the URL
    // cannot be read.
    let query = Rc::clone(&flag);
    set_property(&JsValue::from(dom::window()?), "isPreviewMode", &getter(move || JsValue::from_bool(query.is_enabled())))?;

    flag.apply_lookup(dom::query_param(&config.preview_param));

    if let Some(badge) = flag.badge() {
        let doc = document.clone();
        warn_on_err(
            "preview",
            dom::on_ready(document, move || {
                if let Err(e) = dom::inject_badge(&doc, &badge) {
                    log::warn!("preview: badge not shown: {e}");
                }
            }),
        );
    }
    Ok(())
}

// =============================================================================
// THEME
// =============================================================================

/// Attach `on_click` to the toggle button once the DOM is ready, rendering its
/// initial state. Pages without the button are left alone.
fn wire_button(
    document: &Document,
    find_button: impl Fn() -> Option<web_sys::Element> + 'static,
    render: impl Fn() + 'static,
    on_click: impl Fn() + 'static,
) -> Result<(), BrowserError> {
    dom::on_ready(document, move || {
        let Some(button) = find_button() else {
            log::debug!("theme: no toggle button on this page");
            return;
        };
        let cb = Closure::wrap(Box::new(move |_event: web_sys::Event| on_click()) as Box<dyn Fn(web_sys::Event)>);
        if let Err(e) = button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
            log::warn!("theme: {}", BrowserError::js("addEventListener(click)", &e));
            return;
        }
        cb.forget();
        render();
    })
}

/// Install the two-state toggle and publish `window.themeToggle`.
pub fn toggle(document: &Document, config: &Config) -> Result<(), BrowserError> {
    let scheme = Rc::new(MediaScheme::open());
    let toggle: Rc<PageToggle> = Rc::new(
        ThemeToggle::new(
            LocalStorage::open(),
            Rc::clone(&scheme),
            DocumentSurface::new(document.clone(), config),
        )
        .with_key(config.theme_key.clone())
        .with_double_click_ms(config.double_click_ms),
    );

    warn_on_err("theme", publish_toggle(&toggle));

    // Before the button exists, so the page never flashes the wrong theme.
    toggle.apply();

    let watcher = Rc::clone(&toggle);
    warn_on_err(
        "theme",
        scheme.subscribe(move |dark| {
            watcher.on_system_change(dark);
        }),
    );

    let finder = Rc::clone(&toggle);
    let render = Rc::clone(&toggle);
    let clicks = Rc::clone(&toggle);
    wire_button(
        document,
        move || finder.surface().button(),
        move || render.apply(),
        move || {
            clicks.handle_click(js_sys::Date::now());
        },
    )
}

fn publish_toggle(toggle: &Rc<PageToggle>) -> Result<(), BrowserError> {
    let api = js_sys::Object::new();

    let t = Rc::clone(toggle);
    set_property(
        &api,
        "get",
        &getter(move || t.stored().map_or(JsValue::NULL, |theme| JsValue::from_str(theme.as_str()))),
    )?;

    let t = Rc::clone(toggle);
    set_property(
        &api,
        "set",
        &setter(move |value| match value.as_string() {
            None => t.set(None),
            Some(raw) => match Theme::parse(&raw) {
                Some(theme) => t.set(Some(theme)),
                None => log::warn!("theme: ignoring unknown theme '{raw}'"),
            },
        }),
    )?;

    let t = Rc::clone(toggle);
    set_property(&api, "toggle", &getter(move || JsValue::from_str(t.toggle().as_str())))?;

    let t = Rc::clone(toggle);
    set_property(
        &api,
        "reset",
        &getter(move || {
            t.reset();
            JsValue::UNDEFINED
        }),
    )?;

    let t = Rc::clone(toggle);
    set_property(&api, "getEffective", &getter(move || JsValue::from_str(t.effective().as_str())))?;

    let t = Rc::clone(toggle);
    set_property(&api, "isAuto", &getter(move || JsValue::from_bool(t.is_auto())))?;

    set_property(&JsValue::from(dom::window()?), "themeToggle", &api)
}

/// Install the three-state cycle and publish `window.themeToggle`.
pub fn cycle(document: &Document, config: &Config) -> Result<(), BrowserError> {
    let scheme = Rc::new(MediaScheme::open());
    let cycle: Rc<PageCycle> = Rc::new(
        ThemeCycle::new(
            LocalStorage::open(),
            Rc::clone(&scheme),
            DocumentSurface::new(document.clone(), config),
        )
        .with_key(config.theme_key.clone()),
    );

    warn_on_err("theme", publish_cycle(&cycle));

    cycle.apply();

    let watcher = Rc::clone(&cycle);
    warn_on_err(
        "theme",
        scheme.subscribe(move |dark| {
            watcher.on_system_change(dark);
        }),
    );

    let finder = Rc::clone(&cycle);
    let render = Rc::clone(&cycle);
    let clicks = Rc::clone(&cycle);
    wire_button(
        document,
        move || finder.surface().button(),
        move || render.apply(),
        move || {
            clicks.handle_click();
        },
    )
}

fn publish_cycle(cycle: &Rc<PageCycle>) -> Result<(), BrowserError> {
    let api = js_sys::Object::new();

    let c = Rc::clone(cycle);
    set_property(&api, "get", &getter(move || JsValue::from_str(c.stored().as_str())))?;

    let c = Rc::clone(cycle);
    set_property(
        &api,
        "set",
        &setter(move |value| {
            let raw = value.as_string().unwrap_or_default();
            match ThemePreference::parse(&raw) {
                Some(preference) => c.set(preference),
                None => log::warn!("theme: ignoring unknown preference '{raw}'"),
            }
        }),
    )?;

    let c = Rc::clone(cycle);
    set_property(&api, "cycle", &getter(move || JsValue::from_str(c.cycle().as_str())))?;

    let c = Rc::clone(cycle);
    set_property(&api, "getEffective", &getter(move || JsValue::from_str(c.effective().as_str())))?;

    set_property(&JsValue::from(dom::window()?), "themeToggle", &api)
}
