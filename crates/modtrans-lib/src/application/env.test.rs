use super::*;

fn env(vars: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(vars.iter().copied()).unwrap()
}

#[test]
fn test_no_color_disables_color() {
    let config = env(&[("NO_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let config = env(&[("NO_COLOR", "")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_force_color_wins_over_no_color() {
    let config = env(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_ci_always_disables_color() {
    let config = env(&[("CI", "true"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_unset_environment_keeps_intent() {
    let config = env(&[]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Always);
    assert_eq!(config.prefers_dark(), None);
}

#[test]
fn test_colorfgbg_dark_background() {
    assert_eq!(env(&[("COLORFGBG", "15;0")]).prefers_dark(), Some(true));
    assert_eq!(env(&[("COLORFGBG", "7;default;8")]).prefers_dark(), Some(true));
}

#[test]
fn test_colorfgbg_light_background() {
    assert_eq!(env(&[("COLORFGBG", "0;15")]).prefers_dark(), Some(false));
    assert_eq!(env(&[("COLORFGBG", "0;7")]).prefers_dark(), Some(false));
}

#[test]
fn test_colorfgbg_unparseable() {
    assert_eq!(env(&[("COLORFGBG", "default;default")]).prefers_dark(), None);
    assert_eq!(env(&[("COLORFGBG", "0;200")]).prefers_dark(), None);
}
