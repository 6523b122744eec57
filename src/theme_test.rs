use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_only_light_and_dark() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("auto"), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_inverse_flips() {
    assert_eq!(Theme::Light.inverse(), Theme::Dark);
    assert_eq!(Theme::Dark.inverse(), Theme::Light);
}

#[test]
fn theme_from_dark_defaults_to_light() {
    assert_eq!(Theme::from_dark(false), Theme::Light);
    assert_eq!(Theme::from_dark(true), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_cycle_order() {
    assert_eq!(ThemePreference::Auto.next(), ThemePreference::Light);
    assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.next(), ThemePreference::Auto);
}

#[test]
fn preference_resolve_consults_system_only_for_auto() {
    assert_eq!(ThemePreference::Auto.resolve(true), Theme::Dark);
    assert_eq!(ThemePreference::Auto.resolve(false), Theme::Light);
    assert_eq!(ThemePreference::Light.resolve(true), Theme::Light);
    assert_eq!(ThemePreference::Dark.resolve(false), Theme::Dark);
}

#[test]
fn preference_strings_match_storage_values() {
    for pref in [ThemePreference::Auto, ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        assert_eq!(pref.to_string(), pref.as_str());
    }
    assert_eq!(ThemePreference::parse("system"), None);
}

// =============================================================
// Button display
// =============================================================

#[test]
fn toggle_display_marks_auto() {
    let auto = toggle_display(Theme::Dark, true);
    assert_eq!(auto.icon, "\u{263E}");
    assert_eq!(auto.label, "Dark (auto)");
    assert!(auto.title.starts_with("Dark mode (following system)"));
    assert!(auto.title.ends_with("Double-click: Keep auto mode"));

    let manual = toggle_display(Theme::Light, false);
    assert_eq!(manual.icon, "\u{2600}");
    assert_eq!(manual.label, "Light");
    assert!(manual.title.contains("Click: Switch to dark"));
    assert!(manual.title.ends_with("Double-click: Reset to auto"));
}

#[test]
fn cycle_display_has_three_states() {
    assert_eq!(cycle_display(ThemePreference::Auto).label, "Auto");
    assert_eq!(cycle_display(ThemePreference::Auto).icon, "\u{25D0}");
    assert_eq!(cycle_display(ThemePreference::Light).title, "Theme: Light");
    assert_eq!(cycle_display(ThemePreference::Dark).title, "Theme: Dark");
}
