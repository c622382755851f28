//! Fault capture for error records
//!
//! A fault is whatever was caught when an operation blew up: an error value,
//! an `anyhow` chain, or something foreign. [`CapturedFault`] is the small
//! capability the record needs from it, so the capture routine never binds
//! to a concrete error type.

mod snapshot;

pub use snapshot::FaultSnapshot;

use std::fmt::Write;

/// Marker written before the stack trace in captured debug data
pub const STACK_TRACE_LABEL: &str = "StackTrace:";

/// Prefix of each auxiliary data line in captured debug data
pub const DATA_LABEL: &str = "Data: ";

/// What an error record needs to know about a caught fault
#[cfg_attr(test, mockall::automock)]
pub trait CapturedFault {
    /// The fault's message
    fn message(&self) -> String;

    /// Full stack trace text, if one was captured
    fn stack_trace(&self) -> Option<String>;

    /// Auxiliary key/value diagnostics in enumeration order
    fn data(&self) -> Vec<(String, String)>;
}

/// Render a fault into the multi-line debug text stored on a record.
///
/// Layout: the message line, a `StackTrace:` line followed directly by the
/// trace, then one `Data: {key}\t{value}` line per entry. A missing trace or
/// empty data renders as nothing after the label.
pub fn render_debug_data(fault: &dyn CapturedFault) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", fault.message());
    let _ = writeln!(
        out,
        "{}{}",
        STACK_TRACE_LABEL,
        fault.stack_trace().unwrap_or_default()
    );
    for (key, value) in fault.data() {
        let _ = writeln!(out, "{}{}\t{}", DATA_LABEL, key, value);
    }
    out
}
