//! Branch manifest comparison.
//!
//! [`DiffEngine`] walks two name-sorted manifests with one cursor each and
//! records three index lists in a [`DiffStatistics`]:
//!
//! - packages of the second branch that the first branch lacks
//! - packages of the first branch that the second branch lacks
//! - packages present in both whose version is newer in the first branch
//!
//! # Example
//!
//! ```
//! use branch_compare::diff::{Branch, DiffEngine};
//! use branch_compare::model::Package;
//!
//! let p10 = vec![Package::new("bash", "5.2", "x86_64")];
//! let p9 = vec![Package::new("bash", "5.1", "x86_64")];
//!
//! let stats = DiffEngine::new().diff(&p10, &p9).unwrap();
//! assert_eq!(stats.newer_in_branch0(), &[0]);
//! assert!(stats.absent_from(Branch::First).is_empty());
//! ```

mod engine;
mod policy;
mod result;
mod scan;

pub use engine::DiffEngine;
pub use policy::VersionPolicy;
pub use result::{Branch, DiffStatistics, DiffSummary, ResolvedDiff};
pub use scan::{Cursors, ScanState};
