//! Default values shared by configuration types and sources.

use std::path::PathBuf;

/// Export endpoint of the ALT Linux repository database
pub const DEFAULT_BASE_URL: &str = "https://rdb.altlinux.org/api/export/branch_binary_packages";

/// Network timeout for one manifest download, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Lifetime of a cached manifest, in hours
pub const DEFAULT_CACHE_TTL_HOURS: u64 = 24;

/// Upper bound accepted for `source.cache_ttl_hours` (one year)
pub const MAX_CACHE_TTL_HOURS: u64 = 24 * 365;

/// Platform cache directory for downloaded manifests.
///
/// Falls back to `./.cache/branch-compare` when the platform has none.
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("branch-compare")
}
