use super::*;
use crate::storage::MemoryStore;
use crate::testing::BrokenStore;

#[test]
fn theme_strings_round_trip() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn persisted_value_wins_over_system_signal() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "light").unwrap();
    let controller = ThemeController::initialize(&store, Some(true));
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn no_persisted_value_follows_dark_system_signal_then_toggle_persists_light() {
    let store = MemoryStore::new();
    let mut controller = ThemeController::initialize(&store, Some(true));
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY), Ok(None), "initialize must not write");

    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(store.get(THEME_KEY), Ok(Some("light".to_owned())));
}

#[test]
fn missing_signal_defaults_to_light() {
    let store = MemoryStore::new();
    assert_eq!(ThemeController::initialize(&store, None).current(), Theme::Light);
    assert_eq!(ThemeController::initialize(&store, Some(false)).current(), Theme::Light);
}

#[test]
fn unrecognised_stored_value_falls_back_to_system() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "sepia").unwrap();
    let controller = ThemeController::initialize(&store, Some(true));
    assert_eq!(controller.current(), Theme::Dark);
    assert!(controller.is_persistent());
}

#[test]
fn unreadable_storage_degrades_to_memory() {
    let store = BrokenStore::unreadable();
    let mut controller = ThemeController::initialize(&store, Some(true));
    assert_eq!(controller.current(), Theme::Dark);
    assert!(!controller.is_persistent());
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(store.writes.get(), 0);
}

#[test]
fn failed_write_keeps_toggling_in_memory() {
    let store = BrokenStore::read_only();
    let mut controller = ThemeController::initialize(&store, None);
    assert!(controller.is_persistent());
    assert_eq!(controller.toggle(), Theme::Dark);
    assert!(!controller.is_persistent());
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(store.writes.get(), 1);
}
