//! Statuskit
//!
//! Facade over [`statuskit_core`]. See that crate for the error record and
//! status handler documentation.

pub use statuskit_core::*;
