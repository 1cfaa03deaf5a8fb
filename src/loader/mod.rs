//! Manifest acquisition.
//!
//! A [`ManifestSource`] turns a branch identifier into the raw bytes of its
//! export document. [`load_branch`] validates the identifier, fetches,
//! parses and optionally sorts; [`load_branches`] does that for both sides of
//! a comparison concurrently.

#[cfg(feature = "http")]
mod cache;
mod file;
#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use cache::ManifestCache;
pub use file::LocalSource;
#[cfg(feature = "http")]
pub use http::{HttpSource, HttpSourceConfig};

use crate::error::{BranchCompareError, ErrorContext, LoadErrorKind, Result};
use crate::model::BranchManifest;
use regex::Regex;
use std::sync::LazyLock;

static BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("static regex"));

/// Somewhere branch export documents can be read from.
pub trait ManifestSource: Send + Sync {
    /// Raw bytes of the export document for `branch`.
    ///
    /// `branch` has already passed [`validate_branch`].
    fn fetch(&self, branch: &str) -> Result<Vec<u8>>;

    /// Human-readable location of `branch`'s document, for logs.
    fn locate(&self, branch: &str) -> String;
}

/// Reject identifiers that could escape a URL path segment or a directory.
pub fn validate_branch(branch: &str) -> Result<()> {
    if BRANCH_RE.is_match(branch) {
        Ok(())
    } else {
        Err(BranchCompareError::load(
            "validating branch name",
            LoadErrorKind::InvalidBranch(branch.to_string()),
        ))
    }
}

/// Fetch and parse one branch.
///
/// With `ensure_sorted`, a manifest whose names are out of order is stably
/// sorted after a warning. Without it the manifest is returned as published.
pub fn load_branch(
    source: &dyn ManifestSource,
    branch: &str,
    ensure_sorted: bool,
) -> Result<BranchManifest> {
    validate_branch(branch)?;
    tracing::debug!("Fetching {} from {}", branch, source.locate(branch));

    let data = source
        .fetch(branch)
        .with_context(|| format!("loading branch {branch}"))?;
    let mut manifest = BranchManifest::from_slice(branch, &data)
        .with_context(|| format!("parsing branch {branch}"))?;
    tracing::debug!(
        "Parsed {} packages for {} ({} bytes)",
        manifest.packages().len(),
        branch,
        data.len()
    );

    if ensure_sorted && !manifest.is_sorted_by_name() {
        tracing::warn!("Manifest of {} is not sorted by name, sorting", branch);
        manifest.sort_by_name();
    }

    Ok(manifest)
}

/// Load both branches of a comparison in parallel.
///
/// Both loads always run to completion; when both fail, the first branch's
/// error is returned.
pub fn load_branches(
    source: &dyn ManifestSource,
    first: &str,
    second: &str,
    ensure_sorted: bool,
) -> Result<(BranchManifest, BranchManifest)> {
    let (a, b) = rayon::join(
        || load_branch(source, first, ensure_sorted),
        || load_branch(source, second, ensure_sorted),
    );
    Ok((a?, b?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MemorySource(HashMap<&'static str, &'static str>);

    impl ManifestSource for MemorySource {
        fn fetch(&self, branch: &str) -> Result<Vec<u8>> {
            self.0
                .get(branch)
                .map(|doc| doc.as_bytes().to_vec())
                .ok_or_else(|| {
                    BranchCompareError::load(
                        format!("fetching {branch}"),
                        LoadErrorKind::Network("no such branch".into()),
                    )
                })
        }

        fn locate(&self, branch: &str) -> String {
            format!("memory:{branch}")
        }
    }

    fn source() -> MemorySource {
        MemorySource(HashMap::from([
            (
                "p10",
                r#"{"packages":[{"name":"b","version":"1","arch":"noarch"},{"name":"a","version":"1","arch":"noarch"}]}"#,
            ),
            ("p9", r#"{"packages":[{"name":"a","version":"1","arch":"noarch"}]}"#),
        ]))
    }

    #[test]
    fn test_validate_branch() {
        for ok in ["p10", "sisyphus", "c9f2", "p10_e2k", "4.0.1-test"] {
            assert!(validate_branch(ok).is_ok(), "{ok}");
        }
        for bad in ["", "../etc", "-p10", "p10/../x", "p 10", ".hidden"] {
            assert!(validate_branch(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_load_sorts_when_asked() {
        let src = source();
        let sorted = load_branch(&src, "p10", true).unwrap();
        assert_eq!(sorted.packages()[0].name, "a");

        let raw = load_branch(&src, "p10", false).unwrap();
        assert_eq!(raw.packages()[0].name, "b");
    }

    #[test]
    fn test_load_branches_pair() {
        let (first, second) = load_branches(&source(), "p10", "p9", true).unwrap();
        assert_eq!(first.branch(), "p10");
        assert_eq!(second.branch(), "p9");
    }

    #[test]
    fn test_load_branches_propagates_failure() {
        let err = load_branches(&source(), "p10", "p8", true).unwrap_err();
        assert!(matches!(
            err,
            BranchCompareError::Load {
                source: LoadErrorKind::Network(_),
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_branch_never_fetches() {
        let err = load_branch(&source(), "../p10", true).unwrap_err();
        assert!(matches!(
            err,
            BranchCompareError::Load {
                source: LoadErrorKind::InvalidBranch(_),
                ..
            }
        ));
    }
}
