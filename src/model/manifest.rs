//! Branch manifests and the index-based view the diff engine reads through.

use super::{Package, PackageRecord};
use crate::error::{BranchCompareError, Result};
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_64;

/// Read-only, index-addressed access to a manifest's packages.
///
/// Implementors must return `Some` for every `index < len()` and keep records
/// ordered by name ascending; the diff engine relies on both and checks
/// neither beyond reporting a missing record as corruption. Names are
/// expected to be unique; repeated names are paired in order and any surplus
/// is reported as absent.
pub trait ManifestView {
    /// Number of package records
    fn len(&self) -> usize;

    /// Record at `index`, or `None` when it cannot be produced
    fn get(&self, index: usize) -> Option<PackageRecord<'_>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hash of the raw document this view was built from, 0 when unknown.
    fn content_hash(&self) -> u64 {
        0
    }
}

impl ManifestView for [Package] {
    fn len(&self) -> usize {
        <[Package]>::len(self)
    }

    fn get(&self, index: usize) -> Option<PackageRecord<'_>> {
        <[Package]>::get(self, index).map(Package::record)
    }
}

impl ManifestView for Vec<Package> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<PackageRecord<'_>> {
        self.as_slice().get(index).map(Package::record)
    }
}

/// Top-level shape of a branch export document.
#[derive(Debug, Deserialize)]
struct ManifestDocument {
    #[serde(default)]
    length: Option<usize>,
    #[serde(default)]
    packages: Option<Vec<Package>>,
}

/// The package list of one repository branch.
#[derive(Debug, Clone)]
pub struct BranchManifest {
    branch: String,
    packages: Vec<Package>,
    declared_length: Option<usize>,
    content_hash: u64,
}

impl BranchManifest {
    /// Build a manifest from already materialised packages.
    pub fn new(branch: impl Into<String>, packages: Vec<Package>) -> Self {
        Self {
            branch: branch.into(),
            packages,
            declared_length: None,
            content_hash: 0,
        }
    }

    /// Parse a branch export document.
    ///
    /// The document must contain a `packages` array; other top-level fields
    /// besides `length` are ignored.
    pub fn from_slice(branch: impl Into<String>, data: &[u8]) -> Result<Self> {
        let branch = branch.into();
        let document: ManifestDocument = serde_json::from_slice(data)?;
        let packages = document.packages.ok_or_else(|| {
            BranchCompareError::missing_field("packages", format!("manifest of branch {branch}"))
        })?;

        if let Some(declared) = document.length {
            if declared != packages.len() {
                tracing::warn!(
                    "Manifest of {} declares {} packages but lists {}",
                    branch,
                    declared,
                    packages.len()
                );
            }
        }

        Ok(Self {
            branch,
            packages,
            declared_length: document.length,
            content_hash: xxh3_64(data),
        })
    }

    /// Parse a branch export document from a string.
    pub fn from_json_str(branch: impl Into<String>, data: &str) -> Result<Self> {
        Self::from_slice(branch, data.as_bytes())
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// The `length` field of the source document, if it had one
    #[must_use]
    pub const fn declared_length(&self) -> Option<usize> {
        self.declared_length
    }

    /// Whether package names are in ascending byte order.
    #[must_use]
    pub fn is_sorted_by_name(&self) -> bool {
        self.packages.windows(2).all(|w| w[0].name <= w[1].name)
    }

    /// Stable sort by package name.
    pub fn sort_by_name(&mut self) {
        self.packages.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Look a package up by name. Requires the manifest to be sorted.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Package> {
        self.packages
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.packages[i])
    }
}

impl ManifestView for BranchManifest {
    fn len(&self) -> usize {
        self.packages.len()
    }

    fn get(&self, index: usize) -> Option<PackageRecord<'_>> {
        self.packages.as_slice().get(index).map(Package::record)
    }

    fn content_hash(&self) -> u64 {
        self.content_hash
    }
}
