use std::rc::Rc;

use super::*;
use crate::scheme::FixedScheme;
use crate::storage::MemoryStore;
use crate::testing::RecordingSurface;

type Cycle = ThemeCycle<Rc<MemoryStore>, Rc<FixedScheme>, Rc<RecordingSurface>>;

fn fixture(stored: Option<&str>, system_dark: bool) -> (Rc<MemoryStore>, Rc<FixedScheme>, Rc<RecordingSurface>, Cycle) {
    let store = Rc::new(MemoryStore::new());
    if let Some(value) = stored {
        store.set("theme-preference", value);
    }
    let scheme = Rc::new(FixedScheme::new(system_dark));
    let surface = Rc::new(RecordingSurface::default());
    let cycle = ThemeCycle::new(Rc::clone(&store), Rc::clone(&scheme), Rc::clone(&surface));
    (store, scheme, surface, cycle)
}

#[test]
fn empty_storage_reads_as_auto() {
    let (_, _, _, cycle) = fixture(None, true);
    assert_eq!(cycle.stored(), ThemePreference::Auto);
    assert_eq!(cycle.effective(), Theme::Dark);
}

#[test]
fn malformed_storage_reads_as_auto() {
    let (_, _, _, cycle) = fixture(Some("midnight"), false);
    assert_eq!(cycle.stored(), ThemePreference::Auto);
    assert_eq!(cycle.effective(), Theme::Light);
}

#[test]
fn three_clicks_from_auto_walk_the_cycle() {
    let (store, _, _, cycle) = fixture(Some("auto"), false);
    let mut seen = Vec::new();
    for _ in 0..3 {
        cycle.handle_click();
        seen.push(store.get("theme-preference").unwrap());
    }
    assert_eq!(seen, ["light", "dark", "auto"]);
}

#[test]
fn auto_is_stored_explicitly() {
    let (store, _, _, cycle) = fixture(Some("dark"), false);
    assert_eq!(cycle.cycle(), ThemePreference::Auto);
    assert_eq!(store.get("theme-preference").as_deref(), Some("auto"));
}

#[test]
fn set_renders_effective_theme_and_display() {
    let (_, _, surface, cycle) = fixture(None, true);
    cycle.set(ThemePreference::Light);
    assert_eq!(surface.theme(), Some(Theme::Light));
    assert_eq!(surface.button().unwrap().label, "Light");

    cycle.set(ThemePreference::Auto);
    assert_eq!(surface.theme(), Some(Theme::Dark));
    let button = surface.button().unwrap();
    assert_eq!(button.label, "Auto");
    assert_eq!(button.title, "Theme: Auto (following system)");
}

#[test]
fn surface_accessor_exposes_render_target() {
    let (_, _, surface, cycle) = fixture(Some("dark"), false);
    cycle.apply();
    assert!(Rc::ptr_eq(cycle.surface(), &surface));
    assert_eq!(cycle.surface().button().unwrap().label, "Dark");
}

#[test]
fn apply_is_idempotent() {
    let (_, _, surface, cycle) = fixture(Some("light"), true);
    cycle.apply();
    let first = (surface.theme(), surface.button());
    cycle.apply();
    assert_eq!(first, (surface.theme(), surface.button()));
}

#[test]
fn system_change_follows_only_in_auto() {
    let (_, scheme, surface, cycle) = fixture(Some("auto"), false);
    cycle.apply();
    scheme.set_dark(true);
    assert!(cycle.on_system_change(true));
    assert_eq!(surface.theme(), Some(Theme::Dark));

    cycle.set(ThemePreference::Light);
    scheme.set_dark(false);
    assert!(!cycle.on_system_change(false));
    scheme.set_dark(true);
    assert!(!cycle.on_system_change(true));
    assert_eq!(surface.theme(), Some(Theme::Light));
}

#[test]
fn custom_key_is_used() {
    let store = Rc::new(MemoryStore::new());
    let cycle = ThemeCycle::new(Rc::clone(&store), FixedScheme::new(false), RecordingSurface::default())
        .with_key("site-theme");
    cycle.cycle();
    assert_eq!(store.get("site-theme").as_deref(), Some("light"));
}
