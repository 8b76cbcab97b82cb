//! Integration tests for theme resolution through the public API.

use shade::{
    keys, ColorMode, MemoryStore, MockAppearance, PreferenceStore, ResolvedTheme, Rule,
    ThemeSelector,
};

fn selector_at(brightness: f32) -> ThemeSelector<MemoryStore, MockAppearance> {
    ThemeSelector::new(MemoryStore::new(), MockAppearance::light()).with_brightness(brightness)
}

#[test]
fn test_auto_brightness_threshold_below_brightness_is_light() {
    let mut selector = selector_at(0.5);
    selector.set_auto_brightness(true);
    selector.set_brightness_threshold(0.25);
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);
}

#[test]
fn test_auto_brightness_threshold_above_brightness_is_dark() {
    let mut selector = selector_at(0.5);
    selector.set_auto_brightness(true);
    selector.set_brightness_threshold(0.75);
    assert_eq!(selector.current_theme(), ResolvedTheme::Dark);
    assert_eq!(selector.active_rule(), Rule::AutoBrightness);
}

#[test]
fn test_auto_brightness_threshold_equal_is_light() {
    let mut selector = selector_at(0.5);
    selector.set_auto_brightness(true);
    selector.set_brightness_threshold(0.5);
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);
}

#[test]
fn test_auto_brightness_tracks_brightness_changes() {
    let mut selector = selector_at(0.9);
    selector.set_auto_brightness(true);
    selector.set_brightness_threshold(0.4);
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);

    selector.set_screen_brightness(0.1);
    assert_eq!(selector.current_theme(), ResolvedTheme::Dark);

    selector.set_screen_brightness(0.4);
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);
}

#[test]
fn test_auto_brightness_overrides_system() {
    let appearance = MockAppearance::dark();
    let mut selector =
        ThemeSelector::new(MemoryStore::new(), appearance.clone()).with_brightness(0.8);
    assert_eq!(selector.current_theme(), ResolvedTheme::Dark);

    selector.set_auto_brightness(true);
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);

    selector.set_auto_brightness(false);
    assert_eq!(selector.current_theme(), ResolvedTheme::Dark);
}

#[test]
fn test_private_mode_on_is_private() {
    let mut selector = selector_at(0.5);
    selector.set_private_mode(true);
    assert_eq!(selector.current_theme(), ResolvedTheme::Private);

    selector.set_auto_brightness(true);
    selector.set_brightness_threshold(0.75);
    assert_eq!(selector.current_theme(), ResolvedTheme::Private);
}

#[test]
fn test_private_mode_off_restores_normal_theme() {
    for normal in [ColorMode::Light, ColorMode::Dark] {
        let mut selector = selector_at(0.5);
        selector.set_follow_system(false);
        selector.set_explicit_theme(normal);
        let before = selector.current_theme();

        selector.set_private_mode(true);
        selector.set_private_mode(false);

        assert_eq!(selector.current_theme(), before);
        assert_eq!(selector.current_theme(), ResolvedTheme::from(normal));
    }
}

#[test]
fn test_private_mode_never_writes_theme_key() {
    let mut selector = selector_at(0.5);
    selector.set_follow_system(false);
    selector.set_explicit_theme(ColorMode::Dark);

    selector.set_private_mode(true);
    assert_eq!(
        selector.store().text(keys::THEME_NAME),
        Some("dark".to_string())
    );

    selector.set_private_mode(false);
    assert_eq!(
        selector.store().text(keys::THEME_NAME),
        Some("dark".to_string())
    );
}

#[test]
fn test_normal_saved_theme_survives_private_mode() {
    let mut selector = selector_at(0.5);
    selector.set_explicit_theme(ColorMode::Dark);
    selector.set_private_mode(true);
    assert_eq!(selector.normal_saved_theme(), ColorMode::Dark);
}

#[test]
fn test_system_theme_off_then_on_returns_to_light() {
    let mut selector = selector_at(0.5);
    selector.set_follow_system(false);
    selector.set_follow_system(true);
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);
    assert_eq!(selector.active_rule(), Rule::FollowSystem);
}

#[test]
fn test_follow_system_off_reverts_to_explicit() {
    let mut selector = ThemeSelector::new(MemoryStore::new(), MockAppearance::light());
    selector.set_explicit_theme(ColorMode::Dark);
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);

    selector.set_follow_system(false);
    assert_eq!(selector.current_theme(), ResolvedTheme::Dark);
    assert_eq!(selector.active_rule(), Rule::Explicit);
}

#[test]
fn test_system_appearance_change() {
    let appearance = MockAppearance::light();
    let mut selector = ThemeSelector::new(MemoryStore::new(), appearance.clone());
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);

    appearance.set(ColorMode::Dark);
    // Not observed until the host signals the change
    assert_eq!(selector.current_theme(), ResolvedTheme::Light);

    selector.system_appearance_changed();
    assert_eq!(selector.current_theme(), ResolvedTheme::Dark);
}

#[test]
fn test_state_persists_across_selectors() {
    let mut selector = selector_at(0.5);
    selector.set_follow_system(false);
    selector.set_explicit_theme(ColorMode::Dark);
    selector.set_private_mode(true);
    let store = selector.into_store();

    let mut restored = ThemeSelector::new(store, MockAppearance::light());
    assert_eq!(restored.current_theme(), ResolvedTheme::Private);

    restored.set_private_mode(false);
    assert_eq!(restored.current_theme(), ResolvedTheme::Dark);
}
