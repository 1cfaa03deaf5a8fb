//! Report generation for branch comparisons.
//!
//! Two output formats are provided:
//! - JSON: one array per difference section, keyed by branch name
//! - Summary: compact shell-friendly counts

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffStatistics;
use crate::error::Result;
use crate::model::ManifestView;
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render `stats` against the manifests its indexes point into.
    fn generate_diff_report(
        &self,
        stats: &DiffStatistics,
        first: &dyn ManifestView,
        second: &dyn ManifestView,
        config: &ReportConfig,
    ) -> Result<String>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        stats: &DiffStatistics,
        first: &dyn ManifestView,
        second: &dyn ManifestView,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let report = self.generate_diff_report(stats, first, second, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true, true)
}

/// Create a report generator with color and layout control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    pretty: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(pretty)),
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}
