//! Nested status demo
//!
//! Runs an "Update" operation that calls an "Author" sub-operation, merges
//! the child's errors, and prints the combined listing.
//!
//! Run with `RUST_LOG=debug cargo run --example nested_status` to see the
//! tracing events emitted while errors are added and combined.

use anyhow::Context;
use statuskit::logging::init_logging;
use statuskit::{FaultSnapshot, SettingsLoader, StatusHandler, StatusSettings};

fn update_author(name: &str, settings: &StatusSettings) -> StatusHandler {
    let mut status = StatusHandler::from_settings(settings);
    status.set_header("Author");

    if name.trim().is_empty() {
        status.add_error("Name required", ["Name"]);
    }

    let lookup: anyhow::Result<u32> = "not-a-number"
        .parse::<u32>()
        .context("parsing author id");
    if let Err(err) = lookup {
        let fault = FaultSnapshot::from_anyhow(&err);
        status.add_fault_error(&fault, "Author id is invalid", ["Id"]);
    }

    status
}

fn update_book(settings: &StatusSettings) -> StatusHandler {
    let mut status = StatusHandler::from_settings(settings);
    status.set_header("Update");
    status.combine_statuses(&update_author("", settings));
    status
}

fn main() -> anyhow::Result<()> {
    let settings = SettingsLoader::new().with_defaults().with_env().load()?;
    init_logging(&settings.logging)?;

    let status = update_book(&settings);
    println!("{}", status.message());
    if let Some(listing) = status.all_errors_default() {
        println!("{}", listing);
    }

    for record in status.errors() {
        if let Some(debug) = record.debug_data() {
            println!("--- debug for '{}' ---\n{}", record.header(), debug);
        }
    }

    Ok(())
}
