//! Diff computation stage.

use super::PipelineError;
use crate::config::ComparisonConfig;
use crate::diff::{DiffEngine, DiffStatistics};
use crate::error::ErrorContext;
use crate::model::BranchManifest;

/// Run the merge-diff engine over two loaded branches.
pub fn compute_diff(
    config: &ComparisonConfig,
    first: &BranchManifest,
    second: &BranchManifest,
) -> Result<DiffStatistics, PipelineError> {
    tracing::info!(
        "Comparing {} against {} ({} policy)",
        first.branch(),
        second.branch(),
        config.version_policy
    );

    let engine = DiffEngine::new().with_version_policy(config.version_policy);
    let stats = engine
        .diff(first, second)
        .with_context(|| format!("comparing {} with {}", first.branch(), second.branch()))
        .map_err(|source| PipelineError::DiffFailed { source })?;

    tracing::info!("Found {} differences", stats.total_changes());
    Ok(stats)
}
