//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs.

mod diff;

pub use diff::{run_diff, DiffArgs};
