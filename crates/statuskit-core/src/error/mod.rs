//! Error types for statuskit
//!
//! These are the failures of the library itself (misuse of a constructor,
//! unreadable settings), not the business errors an [`ErrorRecord`] carries.
//!
//! [`ErrorRecord`]: crate::record::ErrorRecord

mod constructors;
mod types;

pub use types::{StatusError, StatusResult};
