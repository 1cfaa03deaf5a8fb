//! Shared utilities.

mod version;

pub use version::{compare_evr, compare_versions, Evr};
