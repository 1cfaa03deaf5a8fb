//! Configuration types for branch-compare.

use super::defaults::{
    default_cache_dir, DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_HOURS, DEFAULT_TIMEOUT_SECS,
};
use crate::diff::VersionPolicy;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File values are loaded first; command-line flags are applied on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where manifests come from
    pub source: SourceConfig,
    /// How package versions are compared
    pub comparison: ComparisonConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

// ============================================================================
// Sections
// ============================================================================

/// Manifest source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourceConfig {
    /// Export endpoint; the branch name is appended as the last path segment
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Download cache directory (platform cache dir when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
    /// Lifetime of cached downloads in hours
    pub cache_ttl_hours: u64,
    /// Ignore cached downloads
    pub bypass_cache: bool,
    /// Read `<local_dir>/<branch>.json` instead of downloading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_dir: Option<PathBuf>,
    /// Sort manifests by name when they arrive unsorted
    pub ensure_sorted: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_dir: None,
            cache_ttl_hours: DEFAULT_CACHE_TTL_HOURS,
            bypass_cache: false,
            local_dir: None,
            ensure_sorted: true,
        }
    }
}

impl SourceConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours.saturating_mul(3600))
    }

    /// Configured cache directory, or the platform default
    #[must_use]
    pub fn resolved_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }
}

/// Comparison settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Fields deciding which side of a shared package is newer
    pub version_policy: VersionPolicy,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Write the report here instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Indent JSON output
    pub pretty: bool,
    /// Append difference counts to the JSON report
    pub include_summary: bool,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            file: None,
            pretty: true,
            include_summary: false,
            no_color: false,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Log warnings and errors only
    pub quiet: bool,
    /// Exit with code 1 when the branches differ
    pub fail_on_change: bool,
}
