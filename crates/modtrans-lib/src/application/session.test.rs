use super::*;
use crate::application::session_mocks::{
    MockConfigProvider, MockInteractiveProvider, MockNetworkProvider,
};
use crate::storage::MemoryStore;
use tempfile::TempDir;

#[test]
fn test_live_filesystem_write_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("nested/dir/mod.jar");
    let provider = LiveFileSystemProvider;

    provider.write_bytes(&target, b"jar").unwrap();

    assert!(provider.exists(&target));
    assert_eq!(provider.read_bytes(&target).unwrap(), b"jar");
}

#[test]
fn test_live_filesystem_read_missing_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let err = LiveFileSystemProvider.read_bytes(&missing).unwrap_err();

    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_colors_follow_explicit_intent() {
    assert!(colors_enabled(ColorIntent::Always));
    assert!(!colors_enabled(ColorIntent::Never));
}

#[test]
fn test_live_interactive_yes_mode_skips_prompts() {
    let provider = LiveInteractiveProvider::new(true);

    assert!(provider.confirm("Overwrite?", true).unwrap());
    assert!(!provider.confirm("Overwrite?", false).unwrap());
    assert_eq!(provider.select("Pick", &["a".to_string()]).unwrap(), None);
}

#[test]
fn test_session_with_custom_providers() {
    let temp_dir = TempDir::new().unwrap();
    let store = MemoryStore::new().with_entry("theme", "light");
    let session = CommandSession::new_with_providers(
        LiveFileSystemProvider,
        MockNetworkProvider::new(),
        store,
        MockConfigProvider::new(AppConfig {
            cache_dir: Some(temp_dir.path().to_path_buf()),
            ..AppConfig::default()
        }),
        MockInteractiveProvider::new(),
    );

    assert_eq!(
        session.storage().get("theme").unwrap(),
        Some("light".to_string())
    );
    assert_eq!(
        session.config().app_config().cache_dir.as_deref(),
        Some(temp_dir.path())
    );
}

#[test]
fn test_live_config_carries_terminal_background() {
    let environment = EnvironmentConfig::from_vars([("COLORFGBG", "15;0")]).unwrap();

    let provider = LiveConfigProvider::new(AppConfig::default()).with_environment(&environment);
    assert_eq!(provider.terminal_prefers_dark(), Some(true));

    let unset = LiveConfigProvider::new(AppConfig::default());
    assert_eq!(unset.terminal_prefers_dark(), None);
}
