use super::*;

#[test]
fn test_verbosity_mapping() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
}

#[test]
fn test_should_log_respects_ordering() {
    assert!(LogLevel::Error.should_log(LogLevel::Error));
    assert!(LogLevel::Warning.should_log(LogLevel::Info));
    assert!(!LogLevel::Debug.should_log(LogLevel::Warning));
    assert!(LogLevel::Trace.should_log(LogLevel::Trace));
}

#[test]
fn test_filter_strings() {
    assert_eq!(LogLevel::Error.as_filter_str(), "error");
    assert_eq!(LogLevel::Warning.as_filter_str(), "warn");
    assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
}
