use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.catalog_url, defaults::CATALOG_URL);
    assert_eq!(config.cache_ttl_secs, 3600);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.download_delay_ms, 500);
    assert_eq!(config.log_level, 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(!config.yes);
}

#[test]
fn test_parsed_defaults_match_default_impl() {
    let parsed = AppConfig::try_parse_from(["modtrans"]).unwrap();
    let default = AppConfig::default();
    assert_eq!(parsed.cache_ttl_secs, default.cache_ttl_secs);
    assert_eq!(parsed.download_delay_ms, default.download_delay_ms);
    assert_eq!(parsed.log_format, default.log_format);
}

#[test]
fn test_config_merging() {
    let override_config = AppConfig {
        log_level: 3,
        color: ColorIntent::Never,
        cache_dir: Some(PathBuf::from("/tmp/modtrans")),
        download_delay_ms: 0,
        yes: true,
        ..AppConfig::default()
    };

    let merged = AppConfig::default().merge_with(override_config);
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.cache_dir, Some(PathBuf::from("/tmp/modtrans")));
    assert_eq!(merged.download_delay_ms, 0);
    assert!(merged.yes);
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_merge_keeps_base_when_other_is_default() {
    let base = AppConfig {
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.color, ColorIntent::Never);
}

#[test]
fn test_validate_keeps_explicit_cache_dir() {
    let mut config = AppConfig {
        cache_dir: Some(PathBuf::from("/var/cache/mt")),
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(
        config.store_path().unwrap(),
        PathBuf::from("/var/cache/mt").join(STORE_FILE_NAME)
    );
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut empty_url = AppConfig {
        catalog_url: " ".to_string(),
        ..AppConfig::default()
    };
    assert!(matches!(
        empty_url.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let mut loud = AppConfig {
        log_level: 9,
        cache_dir: Some(PathBuf::from("/x")),
        ..AppConfig::default()
    };
    assert!(loud.validate().is_err());
}

#[test]
fn test_store_path_requires_cache_dir() {
    assert!(matches!(
        AppConfig::default().store_path(),
        Err(ConfigError::CacheDirUnavailable)
    ));
}

#[test]
fn test_durations() {
    let config = AppConfig {
        cache_ttl_secs: 60,
        download_delay_ms: 250,
        ..AppConfig::default()
    };
    assert_eq!(config.cache_window(), Duration::from_secs(60));
    assert_eq!(config.download_delay(), Duration::from_millis(250));
    assert_eq!(config.networking_config().timeout_seconds, 30);
}
