//! Core error type for statuskit

use thiserror::Error;

/// Result type alias for statuskit operations
pub type StatusResult<T> = Result<T, StatusError>;

/// Main error type for statuskit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// A required constructor argument was missing
    #[error("Invalid argument: `{argument}` must be provided")]
    InvalidArgument { argument: &'static str },

    /// Settings could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl StatusError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "STATUS_INVALID_ARGUMENT",
            Self::Config { .. } => "STATUS_CONFIG",
            Self::Io { .. } => "STATUS_IO",
        }
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            Self::InvalidArgument { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = StatusError::invalid_argument("header");
        assert_eq!(
            err.to_string(),
            "Invalid argument: `header` must be provided"
        );
        assert_eq!(err.error_code(), "STATUS_INVALID_ARGUMENT");
        assert!(err.context().is_none());
    }

    #[test]
    fn test_config_context() {
        let err = StatusError::config_with_context("bad value", "Reading 'status.toml'");
        assert_eq!(err.to_string(), "Configuration error: bad value");
        assert_eq!(err.context(), Some("Reading 'status.toml'"));
        assert_eq!(err.error_code(), "STATUS_CONFIG");
    }
}
