//! Tests for logging helpers

use authsvc_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_known_levels() {
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
}

#[test]
fn test_parse_unknown_level_fails() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}
