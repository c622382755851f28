//! ErrorRecord definition and constructors

use crate::error::{StatusError, StatusResult};
use crate::fault::{CapturedFault, render_debug_data};
use crate::validation::ValidationMessage;

use super::header::compose_header;

/// One error registered in an operation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    header: String,
    status_code: Option<u16>,
    validation: ValidationMessage,
    debug_data: Option<String>,
}

impl ErrorRecord {
    /// Create a record. An empty header means the error is not scoped.
    pub fn new(header: impl Into<String>, validation: ValidationMessage) -> Self {
        Self {
            header: header.into(),
            status_code: None,
            validation,
            debug_data: None,
        }
    }

    /// Create a record carrying a transport status code
    pub fn with_status(
        header: impl Into<String>,
        status_code: u16,
        validation: ValidationMessage,
    ) -> Self {
        Self {
            status_code: Some(status_code),
            ..Self::new(header, validation)
        }
    }

    /// Create a record from inputs that may be missing.
    ///
    /// Fails with [`StatusError::InvalidArgument`] naming the first missing
    /// argument. An empty header is not missing.
    pub fn try_new(
        header: Option<String>,
        validation: Option<ValidationMessage>,
    ) -> StatusResult<Self> {
        let header = header.ok_or(StatusError::invalid_argument("header"))?;
        let validation = validation.ok_or(StatusError::invalid_argument("validation"))?;
        Ok(Self::new(header, validation))
    }

    /// Fallible counterpart of [`ErrorRecord::with_status`]
    pub fn try_with_status(
        header: Option<String>,
        status_code: u16,
        validation: Option<ValidationMessage>,
    ) -> StatusResult<Self> {
        let record = Self::try_new(header, validation)?;
        Ok(Self {
            status_code: Some(status_code),
            ..record
        })
    }

    /// Derive a record scoped under `prefix`. Everything but the header is
    /// copied; `self` is left as it was.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            header: compose_header(prefix, &self.header),
            ..self.clone()
        }
    }

    /// Replace the debug data with the rendered fault.
    ///
    /// Meant to run once, right after the record is created for a caught
    /// fault and before it is handed to anyone else.
    pub fn capture_fault(&mut self, fault: &dyn CapturedFault) {
        tracing::trace!(header = %self.header, "capturing fault into debug data");
        self.debug_data = Some(render_debug_data(fault));
    }

    /// By-value form of [`ErrorRecord::capture_fault`]
    pub fn with_fault(mut self, fault: &dyn CapturedFault) -> Self {
        self.capture_fault(fault);
        self
    }

    /// Scoping label, empty when the error is not scoped
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether the header is non-empty
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// Transport status code, if one was given
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// The validation payload
    pub fn validation(&self) -> &ValidationMessage {
        &self.validation
    }

    /// Shorthand for the validation message text
    pub fn message(&self) -> &str {
        self.validation.message()
    }

    /// Members the error relates to, in order
    pub fn member_names(&self) -> &[String] {
        self.validation.member_names()
    }

    /// Debug text captured from a fault, if any
    pub fn debug_data(&self) -> Option<&str> {
        self.debug_data.as_deref()
    }
}
