use super::*;
use crate::primitives::ColorIntent;
use std::path::PathBuf;

fn cli_config() -> AppConfig {
    AppConfig {
        cache_dir: Some(PathBuf::from("/tmp/modtrans-cache")),
        ..AppConfig::default()
    }
}

#[test]
fn test_environment_disables_color_by_default() {
    let env = EnvironmentConfig::from_vars([("NO_COLOR", "1")]).unwrap();
    let config = AppConfig::resolve(cli_config(), &env).unwrap();
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_cli_color_beats_environment() {
    let env = EnvironmentConfig::from_vars([("NO_COLOR", "1")]).unwrap();
    let cli = AppConfig {
        color: ColorIntent::Always,
        ..cli_config()
    };
    let config = AppConfig::resolve(cli, &env).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_resolve_validates() {
    let cli = AppConfig {
        log_level: 7,
        ..cli_config()
    };
    let env = EnvironmentConfig::default();
    assert!(AppConfig::resolve(cli, &env).is_err());
}
