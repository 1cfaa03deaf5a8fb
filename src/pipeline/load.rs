//! Manifest loading stage.

use super::PipelineError;
use crate::config::SourceConfig;
use crate::error::{BranchCompareError, LoadErrorKind};
use crate::loader::{load_branches, LocalSource, ManifestSource};
use crate::model::BranchManifest;

/// Build the manifest source described by `config`.
///
/// A configured `local_dir` always wins over the network.
pub fn open_source(config: &SourceConfig) -> Result<Box<dyn ManifestSource>, PipelineError> {
    if let Some(dir) = &config.local_dir {
        tracing::debug!("Reading manifests from {}", dir.display());
        return Ok(Box::new(LocalSource::new(dir)));
    }
    open_http_source(config)
}

#[cfg(feature = "http")]
fn open_http_source(config: &SourceConfig) -> Result<Box<dyn ManifestSource>, PipelineError> {
    use crate::loader::{HttpSource, HttpSourceConfig};

    let source = HttpSource::new(HttpSourceConfig {
        base_url: config.base_url.clone(),
        timeout: config.timeout(),
        cache_dir: Some(config.resolved_cache_dir()),
        cache_ttl: config.cache_ttl(),
        bypass_cache: config.bypass_cache,
    })
    .map_err(|source| PipelineError::LoadFailed { source })?;
    Ok(Box::new(source))
}

#[cfg(not(feature = "http"))]
fn open_http_source(_config: &SourceConfig) -> Result<Box<dyn ManifestSource>, PipelineError> {
    Err(PipelineError::LoadFailed {
        source: BranchCompareError::load(
            "opening manifest source",
            LoadErrorKind::FeatureDisabled(
                "built without the 'http' feature; set source.local_dir".to_string(),
            ),
        ),
    })
}

/// Load both branches of a comparison.
///
/// Naming the same branch twice is rejected before anything is fetched: the
/// report keys its arrays by branch name and would collapse.
pub fn load_manifests(
    source: &dyn ManifestSource,
    branch0: &str,
    branch1: &str,
    ensure_sorted: bool,
) -> Result<(BranchManifest, BranchManifest), PipelineError> {
    if branch0 == branch1 {
        return Err(PipelineError::LoadFailed {
            source: BranchCompareError::load(
                "comparing branches",
                LoadErrorKind::SameBranch(branch0.to_string()),
            ),
        });
    }
    tracing::info!("Loading branches {} and {}", branch0, branch1);
    let (first, second) = load_branches(source, branch0, branch1, ensure_sorted)
        .map_err(PipelineError::from_load_error)?;
    tracing::info!(
        "Loaded {} packages from {}, {} from {}",
        first.packages().len(),
        branch0,
        second.packages().len(),
        branch1
    );
    Ok((first, second))
}
