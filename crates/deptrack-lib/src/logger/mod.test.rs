use super::*;
use crate::primitives::LogLevel;

#[test]
fn test_default_filter_scopes_to_the_library_crate() {
    // Tracing targets in this crate are deptrack_lib::*, so the scoped
    // directive must use the crate name, not the binary name
    assert_eq!(default_filter("debug"), "deptrack_lib=debug,debug");
    assert!(default_filter("trace").starts_with("deptrack_lib=trace"));
}

#[test]
fn test_init_then_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        output: LogOutput::Stderr,
    };

    let first = Logger::init(config);
    assert!(first.is_ok());
    assert!(Logger::is_initialized());
    assert!(Logger::global().is_some());

    let second = Logger::init(config);
    assert!(matches!(second, Err(LoggerError::AlreadyInitialized)));
}
