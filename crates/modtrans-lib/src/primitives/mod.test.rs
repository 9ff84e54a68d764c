use super::*;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("PossibleValue should exist for all variants");
                let parsed: $enum_type = possible_value
                    .get_name()
                    .parse()
                    .expect("primary name should parse");
                assert_eq!(parsed, *variant, "Round-trip should preserve variant");
            }
        }
    };
}

test_enum_completeness!(LogLevel, log_level_round_trips);
test_enum_completeness!(LogFormat, log_format_round_trips);
test_enum_completeness!(LogOutput, log_output_round_trips);
test_enum_completeness!(ColorIntent, color_intent_round_trips);
test_enum_completeness!(Theme, theme_round_trips);

#[test]
fn test_aliases_parse() {
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Yaml);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("verbose".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert_eq!("off".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
}

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "purple".parse::<Theme>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "purple");
            assert_eq!(reason, "invalid theme");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_verbosity_mapping_saturates_at_trace() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
}

#[test]
fn test_theme_toggle_and_storage_value() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}
