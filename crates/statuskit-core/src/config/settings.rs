//! Settings types

use serde::{Deserialize, Serialize};

/// Default message of a status with no errors
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";

/// Settings consumed by [`StatusHandler`](crate::status::StatusHandler)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSettings {
    /// Message reported by a status with no errors
    pub success_message: String,
    /// Copy caught faults into record debug data. Turn off where stack
    /// traces must not reach callers.
    pub capture_debug_data: bool,
    /// Joins rendered records when listing all errors
    pub error_separator: String,
    pub logging: LoggingSettings,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            capture_debug_data: true,
            error_separator: "\n".to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl StatusSettings {
    /// Apply the fields an overlay sets
    pub fn merge(&mut self, overlay: SettingsOverlay) {
        if let Some(message) = overlay.success_message {
            self.success_message = message;
        }
        if let Some(capture) = overlay.capture_debug_data {
            self.capture_debug_data = capture;
        }
        if let Some(separator) = overlay.error_separator {
            self.error_separator = separator;
        }
        if let Some(level) = overlay.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overlay.log_format {
            self.logging.format = format;
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Partial settings read from a single source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsOverlay {
    pub success_message: Option<String>,
    pub capture_debug_data: Option<bool>,
    pub error_separator: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}
