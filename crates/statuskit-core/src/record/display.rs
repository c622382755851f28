//! Human-readable rendering of error records

use std::fmt;

use super::types::ErrorRecord;

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_header() {
            write!(f, "{}: ", self.header())?;
        }
        write!(f, "{}", self.validation())
    }
}
