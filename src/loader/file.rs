//! Manifests stored as `<dir>/<branch>.json`.

use super::ManifestSource;
use crate::error::{BranchCompareError, Result};
use std::path::PathBuf;

/// Reads previously downloaded export documents from a directory.
#[derive(Debug, Clone)]
pub struct LocalSource {
    dir: PathBuf,
}

impl LocalSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of `branch`'s document
    #[must_use]
    pub fn path_for(&self, branch: &str) -> PathBuf {
        self.dir.join(format!("{branch}.json"))
    }
}

impl ManifestSource for LocalSource {
    fn fetch(&self, branch: &str) -> Result<Vec<u8>> {
        let path = self.path_for(branch);
        std::fs::read(&path).map_err(|e| BranchCompareError::io(path, e))
    }

    fn locate(&self, branch: &str) -> String {
        self.path_for(branch).display().to_string()
    }
}
