use super::*;
use crate::storage::MemoryStore;

#[test]
fn test_stored_value_wins_over_system_signal() {
    let store = MemoryStore::new().with_entry(keys::THEME, "light");
    assert_eq!(resolve_theme(&store, Some(true)).unwrap(), Theme::Light);
}

#[test]
fn test_falls_back_to_system_signal_when_absent() {
    let store = MemoryStore::new();
    assert_eq!(resolve_theme(&store, Some(true)).unwrap(), Theme::Dark);
    assert_eq!(resolve_theme(&store, Some(false)).unwrap(), Theme::Light);
    assert_eq!(resolve_theme(&store, None).unwrap(), Theme::Light);
}

#[test]
fn test_unknown_stored_value_is_ignored() {
    let store = MemoryStore::new().with_entry(keys::THEME, "sepia");
    assert_eq!(stored_theme(&store).unwrap(), None);
    assert_eq!(resolve_theme(&store, Some(true)).unwrap(), Theme::Dark);
}

#[test]
fn test_save_then_resolve() {
    let store = MemoryStore::new();
    save_theme(&store, Theme::Dark).unwrap();
    assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("dark"));
    assert_eq!(resolve_theme(&store, Some(false)).unwrap(), Theme::Dark);
}
