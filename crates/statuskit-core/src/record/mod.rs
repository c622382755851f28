//! The error record: one reported problem inside an operation status
//!
//! An [`ErrorRecord`] carries:
//! - header: scoping label of the operation that produced it, possibly empty
//! - status_code: optional HTTP-style code for surfacing the error externally
//! - validation: message plus related member names
//! - debug_data: text captured from a caught fault, if any
//!
//! Records are values. Nesting a child operation's errors under a parent
//! derives new records with a composed header (`Update>Author`) and leaves
//! the originals untouched.

mod display;
mod header;
mod types;


pub use header::{HEADER_SEPARATOR, compose_header};
pub use types::ErrorRecord;
