//! StatusHandler implementation

use crate::config::{DEFAULT_SUCCESS_MESSAGE, StatusSettings};
use crate::fault::CapturedFault;
use crate::record::ErrorRecord;
use crate::validation::ValidationMessage;

/// Accumulates the error records of one operation
#[derive(Debug, Clone)]
pub struct StatusHandler {
    header: String,
    errors: Vec<ErrorRecord>,
    success_message: String,
    settings: StatusSettings,
}

impl Default for StatusHandler {
    fn default() -> Self {
        Self::from_settings(&StatusSettings::default())
    }
}

impl StatusHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status whose records are scoped under `header`
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &StatusSettings) -> Self {
        Self {
            header: String::new(),
            errors: Vec::new(),
            success_message: settings.success_message.clone(),
            settings: settings.clone(),
        }
    }

    /// Set the header used for records added from now on
    pub fn set_header(&mut self, header: impl Into<String>) -> &mut Self {
        self.header = header.into();
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Add an error under this status's header
    pub fn add_error<I, S>(&mut self, message: impl Into<String>, member_names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let validation = ValidationMessage::with_members(message, member_names);
        self.push(ErrorRecord::new(self.header.clone(), validation))
    }

    /// Add an error carrying a transport status code
    pub fn add_error_with_status<I, S>(
        &mut self,
        message: impl Into<String>,
        status_code: u16,
        member_names: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let validation = ValidationMessage::with_members(message, member_names);
        self.push(ErrorRecord::with_status(
            self.header.clone(),
            status_code,
            validation,
        ))
    }

    /// Add an already built validation payload
    pub fn add_validation(&mut self, validation: ValidationMessage) -> &mut Self {
        self.push(ErrorRecord::new(self.header.clone(), validation))
    }

    /// Add several validation payloads, keeping their order
    pub fn add_validation_results<I>(&mut self, results: I) -> &mut Self
    where
        I: IntoIterator<Item = ValidationMessage>,
    {
        for validation in results {
            self.add_validation(validation);
        }
        self
    }

    /// Add an error for a caught fault. The fault is copied into the
    /// record's debug data unless `capture_debug_data` is off.
    pub fn add_fault_error<I, S>(
        &mut self,
        fault: &dyn CapturedFault,
        message: impl Into<String>,
        member_names: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let validation = ValidationMessage::with_members(message, member_names);
        let mut record = ErrorRecord::new(self.header.clone(), validation);
        if self.settings.capture_debug_data {
            record.capture_fault(fault);
        }
        self.push(record)
    }

    /// Merge another status into this one.
    ///
    /// Each of `other`'s records is derived with this status's header as
    /// prefix. When neither status has errors, `other`'s success message is
    /// adopted unless it is the built-in default.
    pub fn combine_statuses(&mut self, other: &StatusHandler) -> &mut Self {
        if other.has_errors() {
            tracing::debug!(
                count = other.errors.len(),
                prefix = %self.header,
                "combining child status errors"
            );
            let prefix = self.header.as_str();
            self.errors
                .extend(other.errors.iter().map(|e| e.with_prefix(prefix)));
        } else if self.is_valid() && other.success_message != DEFAULT_SUCCESS_MESSAGE {
            self.success_message = other.success_message.clone();
        }
        self
    }

    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The success message when valid, otherwise a failure summary
    pub fn message(&self) -> String {
        match self.errors.len() {
            0 => self.success_message.clone(),
            1 => "Failed with 1 error".to_string(),
            n => format!("Failed with {} errors", n),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.success_message = message.into();
        self
    }

    /// Every record rendered and joined with `separator`, or `None` when
    /// the status is valid
    pub fn all_errors(&self, separator: &str) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(separator),
        )
    }

    /// [`StatusHandler::all_errors`] with the configured separator
    pub fn all_errors_default(&self) -> Option<String> {
        self.all_errors(&self.settings.error_separator)
    }

    /// `Ok(value)` when valid, otherwise the collected records
    pub fn into_result<T>(self, value: T) -> Result<T, Vec<ErrorRecord>> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }

    fn push(&mut self, record: ErrorRecord) -> &mut Self {
        tracing::debug!(error = %record, "status error added");
        self.errors.push(record);
        self
    }
}
