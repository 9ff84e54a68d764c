use clap::Parser;
use modtrans_lib::application::cli::{Cli, CliConfig, Commands};
use modtrans_lib::application::config::AppConfig;
use modtrans_lib::application::env::EnvironmentConfig;
use modtrans_lib::primitives::{ColorIntent, ConfigError};
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.net_timeout > 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.cache_ttl_secs, 3600);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        download_delay_ms: 0,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.download_delay_ms, 0);
    assert_eq!(merged.color, ColorIntent::Never);

    // Default values should remain for non-overridden fields
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_command_line_resolves_with_environment() {
    let cli = Cli::try_parse_from([
        "modtrans",
        "--cache-dir",
        "/tmp/modtrans-it",
        "get",
        "Create",
        "--version",
        "1.20.1",
        "--pick",
        "2",
    ])
    .unwrap();
    let cli = CliConfig::from(cli);
    let env = EnvironmentConfig::from_vars([("CI", "true")]).unwrap();

    let config = AppConfig::resolve(cli.app_config, &env).unwrap();

    assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/modtrans-it")));
    assert_eq!(
        config.store_path().unwrap(),
        PathBuf::from("/tmp/modtrans-it/store.json")
    );
    match cli.command {
        Some(Commands::Get {
            name,
            filters,
            pick,
            ..
        }) => {
            assert_eq!(name, "Create");
            assert_eq!(filters.game_version.as_deref(), Some("1.20.1"));
            assert_eq!(pick, Some(2));
        }
        other => panic!("expected get, got {other:?}"),
    }
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let cli = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };

    let err = AppConfig::resolve(cli, &EnvironmentConfig::default()).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}
