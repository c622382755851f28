//! Logging setup for applications embedding statuskit
//!
//! The library itself only emits `tracing` events; binaries and tests call
//! [`init_logging`] once to install a subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{StatusError, StatusResult};

/// Build the filter: `RUST_LOG` wins over the configured level
pub fn build_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Install a global fmt subscriber in the configured format.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(settings: &LoggingSettings) -> StatusResult<()> {
    let filter = build_filter(settings);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match settings.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        "pretty" => builder.pretty().try_init(),
        other => {
            return Err(StatusError::config_with_context(
                format!("Unknown log format: {}", other),
                "Expected one of: json, pretty, compact",
            ));
        }
    };

    result.map_err(|e| StatusError::config(format!("Failed to install subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_rejected() {
        let settings = LoggingSettings {
            level: "info".to_string(),
            format: "xml".to_string(),
        };
        let err = init_logging(&settings).unwrap_err();
        assert!(err.to_string().contains("Unknown log format: xml"));
    }
}
