//! Validation payload carried by every error record
//!
//! A [`ValidationMessage`] is a human-readable message plus the names of the
//! fields or members it relates to. It renders as the message alone; member
//! names are data for callers that map errors back onto input forms.

use std::fmt;

/// Message plus the member names a failure relates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    message: String,
    member_names: Vec<String>,
}

impl ValidationMessage {
    /// Create a payload that relates to no particular member
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            member_names: Vec::new(),
        }
    }

    /// Create a payload for the given members, keeping their order
    pub fn with_members<I, S>(message: impl Into<String>, member_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            member_names: member_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a member name
    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.member_names.push(name.into());
        self
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Related member names, in order
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for ValidationMessage {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationMessage {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_keep_order() {
        let payload = ValidationMessage::with_members("Bad range", ["Start", "End"]).with_member("Step");
        assert_eq!(payload.member_names(), ["Start", "End", "Step"]);
    }

    #[test]
    fn test_display_is_message_only() {
        let payload = ValidationMessage::with_members("Name required", ["Name"]);
        assert_eq!(payload.to_string(), "Name required");
    }

    #[test]
    fn test_empty_members() {
        let payload: ValidationMessage = "Oops".into();
        assert!(payload.member_names().is_empty());
        assert_eq!(payload.message(), "Oops");
    }
}
