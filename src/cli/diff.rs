//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two branches.

use crate::config::AppConfig;
use crate::diff::{DiffStatistics, VersionPolicy};
use crate::pipeline::{compute_diff, exit_codes, load_manifests, open_source, output_report};
use crate::reports::ReportFormat;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `diff` subcommand
///
/// Every flag left unset keeps the value from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct DiffArgs {
    /// Reference branch; newer versions are reported for this side
    pub branch0: String,

    /// Branch to compare against
    pub branch1: String,

    /// Output format
    #[arg(short, long)]
    pub output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    pub output_file: Option<PathBuf>,

    /// Emit JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Append difference counts to the JSON report
    #[arg(long)]
    pub include_summary: bool,

    /// Read <DIR>/<branch>.json instead of downloading
    #[arg(long, value_name = "DIR", env = "BRANCH_COMPARE_LOCAL_DIR")]
    pub local_dir: Option<PathBuf>,

    /// Export endpoint the branch name is appended to
    #[arg(long, env = "BRANCH_COMPARE_BASE_URL")]
    pub base_url: Option<String>,

    /// Download timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Cache directory for downloaded manifests
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Cache TTL in hours
    #[arg(long, value_name = "HOURS")]
    pub cache_ttl: Option<u64>,

    /// Ignore cached manifests and download fresh copies
    #[arg(long)]
    pub refresh: bool,

    /// Fields deciding which side of a shared package is newer
    #[arg(long)]
    pub version_policy: Option<VersionPolicy>,

    /// Trust the published order instead of sorting unsorted manifests
    #[arg(long)]
    pub no_sort: bool,

    /// Exit with code 1 if the branches differ
    #[arg(long)]
    pub fail_on_change: bool,
}

impl DiffArgs {
    /// Layer the command-line flags over a loaded configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(format) = self.output {
            config.output.format = format;
        }
        if self.output_file.is_some() {
            config.output.file.clone_from(&self.output_file);
        }
        if self.compact {
            config.output.pretty = false;
        }
        if self.include_summary {
            config.output.include_summary = true;
        }

        if self.local_dir.is_some() {
            config.source.local_dir.clone_from(&self.local_dir);
        }
        if let Some(url) = &self.base_url {
            config.source.base_url.clone_from(url);
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_secs = timeout;
        }
        if self.cache_dir.is_some() {
            config.source.cache_dir.clone_from(&self.cache_dir);
        }
        if let Some(ttl) = self.cache_ttl {
            config.source.cache_ttl_hours = ttl;
        }
        if self.refresh {
            config.source.bypass_cache = true;
        }
        if self.no_sort {
            config.source.ensure_sorted = false;
        }

        if let Some(policy) = self.version_policy {
            config.comparison.version_policy = policy;
        }
        if self.fail_on_change {
            config.behavior.fail_on_change = true;
        }
    }
}

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(branch0: &str, branch1: &str, config: &AppConfig) -> Result<i32> {
    let source = open_source(&config.source)?;
    let (first, second) = load_manifests(
        source.as_ref(),
        branch0,
        branch1,
        config.source.ensure_sorted,
    )?;

    let stats = compute_diff(&config.comparison, &first, &second)?;
    let exit_code = determine_exit_code(config, &stats);

    output_report(&config.output, &stats, &first, &second)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &AppConfig, stats: &DiffStatistics) -> i32 {
    if config.behavior.fail_on_change && !stats.is_empty() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    }
}
