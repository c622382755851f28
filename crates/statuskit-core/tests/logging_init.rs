//! Global subscriber installation.
//!
//! Kept in its own test binary: installing a subscriber is process-wide.

use statuskit_core::config::LoggingSettings;
use statuskit_core::logging::init_logging;

#[test]
fn test_init_once_then_rejects_second_subscriber() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        format: "compact".to_string(),
    };

    init_logging(&settings).unwrap();

    let err = init_logging(&settings).unwrap_err();
    assert_eq!(err.error_code(), "STATUS_CONFIG");
    assert!(err.to_string().contains("Failed to install subscriber"));
}
