//! JSON report generator.

use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::diff::DiffStatistics;
use crate::error::{BranchCompareError, ReportErrorKind, Result};
use crate::model::{ManifestView, PackageRecord};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        stats: &DiffStatistics,
        first: &dyn ManifestView,
        second: &dyn ManifestView,
        config: &ReportConfig,
    ) -> Result<String> {
        let resolved = stats.resolve(first, second).map_err(|e| {
            BranchCompareError::report(
                "resolving package indexes",
                ReportErrorKind::DanglingIndex(e.to_string()),
            )
        })?;

        let b0 = &config.metadata.branch0;
        let b1 = &config.metadata.branch1;

        let mut report: IndexMap<String, Value> = IndexMap::new();
        report.insert(
            format!("absent_in_{b0}_packages"),
            section(&resolved.absent_in_branch0)?,
        );
        report.insert(
            format!("absent_in_{b1}_packages"),
            section(&resolved.absent_in_branch1)?,
        );
        report.insert(
            format!("{b0}_packages_newer_versions"),
            section(&resolved.newer_in_branch0)?,
        );

        if config.include_summary {
            let summary = JsonSummary {
                branch0: b0,
                branch1: b1,
                generated_at: Utc::now().to_rfc3339(),
                counts: stats.summary(first.len(), second.len()),
            };
            report.insert("summary".to_string(), to_value(&summary)?);
        }

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        rendered.map_err(|e| {
            BranchCompareError::report(
                "serializing report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

/// One package entry of a report section
#[derive(Serialize)]
struct JsonPackage<'a> {
    name: &'a str,
    version: &'a str,
    arch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    epoch: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release: Option<&'a str>,
}

impl<'a> From<&PackageRecord<'a>> for JsonPackage<'a> {
    fn from(rec: &PackageRecord<'a>) -> Self {
        Self {
            name: rec.name,
            version: rec.version,
            arch: rec.arch,
            epoch: rec.epoch,
            release: rec.release,
        }
    }
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    branch0: &'a str,
    branch1: &'a str,
    generated_at: String,
    #[serde(flatten)]
    counts: crate::diff::DiffSummary,
}

fn section(records: &[PackageRecord<'_>]) -> Result<Value> {
    let entries: Vec<JsonPackage<'_>> = records.iter().map(JsonPackage::from).collect();
    to_value(&entries)
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| {
        BranchCompareError::report(
            "serializing report section",
            ReportErrorKind::JsonSerializationError(e.to_string()),
        )
    })
}
