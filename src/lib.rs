//! **Compare the binary package sets of two repository branches.**
//!
//! `branch-compare` loads the package manifests of two branches, walks them
//! once in name order and reports three lists:
//!
//! - packages present only in the second branch
//! - packages present only in the first branch
//! - packages present in both whose version is newer in the first branch
//!
//! Version ordering follows RPM conventions: digit runs compare numerically,
//! letter runs lexically, and `~` marks a pre-release.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Package`] records, the [`BranchManifest`] that owns
//!   them and the [`ManifestView`] trait the engine reads through.
//! - **[`diff`]**: the [`DiffEngine`] and the [`DiffStatistics`] it produces.
//! - **[`loader`]**: manifest sources (local files, HTTP with a file cache)
//!   and the concurrent two-branch load.
//! - **[`reports`]**: JSON and summary renderers.
//! - **[`pipeline`]**: load → diff → report orchestration with stage-named
//!   errors.
//! - **[`utils`]**: the version comparator.
//!
//! ## Comparing Two Manifests
//!
//! ```
//! use branch_compare::{BranchManifest, DiffEngine, Package};
//! use branch_compare::diff::Branch;
//!
//! let p10 = BranchManifest::new("p10", vec![
//!     Package::new("bash", "5.2.15", "x86_64"),
//!     Package::new("zsh", "5.9", "x86_64"),
//! ]);
//! let p9 = BranchManifest::new("p9", vec![
//!     Package::new("bash", "5.1.8", "x86_64"),
//!     Package::new("tcsh", "6.24", "x86_64"),
//! ]);
//!
//! let stats = DiffEngine::new().diff(&p10, &p9).unwrap();
//! assert_eq!(stats.newer_in_branch0(), &[0]);
//! assert_eq!(stats.absent_from(Branch::First), &[1]);
//! assert_eq!(stats.absent_from(Branch::Second), &[1]);
//! ```
//!
//! ## Feature Flags
//!
//! - `http` (default): download manifests with `reqwest` and cache them on
//!   disk. Without it only local manifest directories are supported.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, BehaviorConfig, ComparisonConfig, OutputConfig, SourceConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{Branch, DiffEngine, DiffStatistics, DiffSummary, VersionPolicy};
pub use error::{BranchCompareError, DiffError, ErrorContext, Result};
pub use loader::{load_branch, load_branches, LocalSource, ManifestSource};
pub use model::{BranchManifest, ManifestView, Package, PackageRecord};
pub use reports::{ReportFormat, ReportGenerator};
pub use utils::{compare_evr, compare_versions, Evr};
