//! Operation status: collects error records instead of failing fast
//!
//! A [`StatusHandler`] is returned by an operation to say whether it
//! succeeded. Child operations' statuses are merged into the parent with
//! [`StatusHandler::combine_statuses`], which scopes each child record under
//! the parent's header so the full call path survives (`Update>Author`).

mod handler;

pub use handler::StatusHandler;
