//! File cache for downloaded export documents.

use crate::error::{BranchCompareError, LoadErrorKind, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stores response bodies keyed by request URL, expiring after a TTL.
#[derive(Debug, Clone)]
pub struct ManifestCache {
    cache_dir: PathBuf,
    ttl: Duration,
}

impl ManifestCache {
    /// Open a cache rooted at `cache_dir`, creating the directory if needed.
    pub fn new(cache_dir: impl Into<PathBuf>, ttl: Duration) -> Result<Self> {
        let cache_dir = cache_dir.into();
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).map_err(|e| {
                BranchCompareError::load(
                    format!("creating cache directory {}", cache_dir.display()),
                    LoadErrorKind::Cache(e.to_string()),
                )
            })?;
        }
        Ok(Self { cache_dir, ttl })
    }

    /// Filesystem-safe entry name for a URL
    #[must_use]
    pub fn filename(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        format!("{:x}.json", hasher.finalize())
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(Self::filename(url))
    }

    /// Cached body for `url`, or `None` when absent or expired.
    ///
    /// Expired entries are removed.
    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(url);
        let metadata = fs::metadata(&path).ok()?;

        let age = metadata.modified().ok()?.elapsed().ok()?;
        if age > self.ttl {
            let _ = fs::remove_file(&path);
            return None;
        }

        fs::read(&path).ok()
    }

    /// Store the body fetched from `url`.
    ///
    /// The body is written to a temporary file and renamed into place, so
    /// readers and concurrent writers never see a partial entry.
    pub fn put(&self, url: &str, body: &[u8]) -> Result<()> {
        let path = self.entry_path(url);
        let tmp = self.cache_dir.join(format!(
            ".{}.{}.{}.tmp",
            Self::filename(url),
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let written = fs::write(&tmp, body).and_then(|()| fs::rename(&tmp, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(BranchCompareError::load(
                format!("writing cache entry {}", path.display()),
                LoadErrorKind::Cache(e.to_string()),
            ));
        }
        Ok(())
    }
}
