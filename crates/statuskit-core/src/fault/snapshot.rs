//! Owned fault snapshots built from common error types

use std::backtrace::BacktraceStatus;

use super::CapturedFault;

/// An owned copy of a fault's message, trace, and diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultSnapshot {
    message: String,
    stack_trace: Option<String>,
    data: Vec<(String, String)>,
}

impl FaultSnapshot {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack_trace: None,
            data: Vec::new(),
        }
    }

    /// Attach a stack trace
    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }

    /// Append an auxiliary diagnostic entry
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    /// Snapshot a standard error. Each `source()` link becomes a
    /// `source.{n}` entry, nearest cause first.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut snapshot = Self::new(error.to_string());
        let mut source = error.source();
        let mut depth = 1;
        while let Some(cause) = source {
            snapshot = snapshot.with_data(format!("source.{}", depth), cause.to_string());
            source = cause.source();
            depth += 1;
        }
        snapshot
    }

    /// Snapshot an `anyhow` error, keeping its backtrace when one was captured
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        let mut snapshot = Self::new(error.to_string());

        let backtrace = error.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            snapshot.stack_trace = Some(backtrace.to_string());
        }

        for (depth, cause) in error.chain().skip(1).enumerate() {
            snapshot = snapshot.with_data(format!("cause.{}", depth + 1), cause.to_string());
        }
        snapshot
    }
}

impl CapturedFault for FaultSnapshot {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn stack_trace(&self) -> Option<String> {
        self.stack_trace.clone()
    }

    fn data(&self) -> Vec<(String, String)> {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer {
        #[source]
        inner: std::io::Error,
    }

    #[test]
    fn test_from_error_walks_sources() {
        let err = Outer {
            inner: std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
        };
        let snapshot = FaultSnapshot::from_error(&err);

        assert_eq!(snapshot.message(), "outer failure");
        assert!(snapshot.stack_trace().is_none());
        assert_eq!(
            snapshot.data(),
            vec![("source.1".to_string(), "disk gone".to_string())]
        );
    }

    #[test]
    fn test_from_anyhow_lists_causes() {
        let err = anyhow::anyhow!("root cause")
            .context("loading author")
            .context("update failed");
        let snapshot = FaultSnapshot::from_anyhow(&err);

        assert_eq!(snapshot.message(), "update failed");
        assert_eq!(
            snapshot.data(),
            vec![
                ("cause.1".to_string(), "loading author".to_string()),
                ("cause.2".to_string(), "root cause".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_fields() {
        let snapshot = FaultSnapshot::new("boom")
            .with_stack_trace("at X")
            .with_data("k", "v");
        assert_eq!(snapshot.stack_trace().as_deref(), Some("at X"));
        assert_eq!(snapshot.data().len(), 1);
    }
}
