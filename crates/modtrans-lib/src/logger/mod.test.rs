use super::*;

#[test]
fn test_default_filter_sets_crate_level() {
    let directives = default_filter_directives(LogLevel::Debug);
    assert!(directives.starts_with("debug,"));
    assert!(directives.contains("modtrans_lib=debug"));
    assert!(directives.contains("modtrans=debug"));
}

#[test]
fn test_default_filter_quiets_http_stack() {
    let directives = default_filter_directives(LogLevel::Trace);
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("hyper_util=warn"));
    assert!(!directives.contains("reqwest=trace"));
}

#[test]
fn test_default_filter_parses() {
    for level in [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let _ = EnvFilter::try_new(default_filter_directives(level)).unwrap();
    }
}

#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Another test binary thread may have installed a subscriber already
    let _ = Logger::init(config.clone());
    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::InitializationFailed { .. })
    ));
}
