//! Pipeline orchestration for branch comparisons.
//!
//! Shared load → diff → report logic used by the CLI command handlers. Every
//! failure is wrapped in a [`PipelineError`] naming the stage it came from.

mod diff_stage;
mod load;
mod output;
mod report_stage;

pub use diff_stage::compute_diff;
pub use load::{load_manifests, open_source};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::output_report;

use crate::error::BranchCompareError;

/// Structured pipeline error types for better diagnostics.
///
/// The message names the stage only; the cause is reachable through
/// [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A manifest could not be fetched or the source could not be set up
    #[error("load failed")]
    LoadFailed {
        #[source]
        source: BranchCompareError,
    },

    /// A local manifest file could not be opened or read
    #[error("open failed")]
    OpenFailed {
        #[source]
        source: BranchCompareError,
    },

    /// A manifest document was not valid
    #[error("parse failed")]
    ParseFailed {
        #[source]
        source: BranchCompareError,
    },

    /// The diff engine rejected its input
    #[error("diff failed")]
    DiffFailed {
        #[source]
        source: BranchCompareError,
    },

    /// Report generation or output failed
    #[error("report failed")]
    ReportFailed {
        #[source]
        source: BranchCompareError,
    },
}

impl PipelineError {
    /// Attribute a loader error to the stage that produced it.
    #[must_use]
    pub fn from_load_error(source: BranchCompareError) -> Self {
        match source {
            BranchCompareError::Io { .. } => Self::OpenFailed { source },
            BranchCompareError::Parse { .. } => Self::ParseFailed { source },
            _ => Self::LoadFailed { source },
        }
    }

    /// Short stage name: `load`, `open`, `parse`, `diff` or `report`
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::LoadFailed { .. } => "load",
            Self::OpenFailed { .. } => "open",
            Self::ParseFailed { .. } => "parse",
            Self::DiffFailed { .. } => "diff",
            Self::ReportFailed { .. } => "report",
        }
    }
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success (no differences, or differences without --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Differences were found and --fail-on-change was given
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
