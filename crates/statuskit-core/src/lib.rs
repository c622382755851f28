//! Statuskit Core Library
//!
//! Composable error records for operations that report failures through a
//! status object instead of returning early: scoped headers that nest as
//! statuses are combined, validation payloads, optional transport status
//! codes, and debug text captured from caught faults.

pub mod config;
pub mod error;
pub mod fault;
pub mod logging;
pub mod record;
pub mod status;
pub mod validation;

// Re-export commonly used types
pub use config::{LoggingSettings, SettingsLoader, SettingsSource, StatusSettings};
pub use error::{StatusError, StatusResult};
pub use fault::{CapturedFault, FaultSnapshot, render_debug_data};
pub use record::{ErrorRecord, HEADER_SEPARATOR, compose_header};
pub use status::StatusHandler;
pub use validation::ValidationMessage;
