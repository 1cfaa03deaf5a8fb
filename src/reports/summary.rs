//! Summary report generator for shell output.
//!
//! Prints the difference counts and the first few entries of each section.

use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::diff::DiffStatistics;
use crate::error::{BranchCompareError, ReportErrorKind, Result};
use crate::model::{ManifestView, PackageRecord};

/// Entries listed per section before eliding the rest
const PREVIEW_LIMIT: usize = 5;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn push_section(
        &self,
        lines: &mut Vec<String>,
        title: &str,
        marker: &str,
        color: &str,
        records: &[PackageRecord<'_>],
    ) {
        lines.push(format!(
            "{} {}",
            self.color(&format!("{title}:"), "cyan"),
            self.color(&records.len().to_string(), "bold")
        ));
        for rec in records.iter().take(PREVIEW_LIMIT) {
            lines.push(format!("  {} {}", self.color(marker, color), rec));
        }
        if records.len() > PREVIEW_LIMIT {
            lines.push(self.color(
                &format!("  ... and {} more", records.len() - PREVIEW_LIMIT),
                "dim",
            ));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
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

        let mut lines = Vec::new();
        lines.push(self.color("Branch Comparison Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} ({} packages) vs {} ({} packages)",
            self.color("Branches:", "cyan"),
            b0,
            first.len(),
            b1,
            second.len()
        ));
        lines.push(String::new());

        self.push_section(
            &mut lines,
            &format!("Only in {b1}"),
            "+",
            "green",
            &resolved.absent_in_branch0,
        );
        self.push_section(
            &mut lines,
            &format!("Only in {b0}"),
            "-",
            "red",
            &resolved.absent_in_branch1,
        );
        self.push_section(
            &mut lines,
            &format!("Newer in {b0}"),
            "~",
            "yellow",
            &resolved.newer_in_branch0,
        );

        lines.push(String::new());
        if stats.is_empty() {
            lines.push(self.color("No differences", "green"));
        } else {
            lines.push(format!(
                "{} {}",
                self.color("Total changes:", "bold"),
                stats.total_changes()
            ));
        }

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::Package;

    #[test]
    fn test_plain_summary() {
        let first = vec![
            Package::new("a", "2.0", "x86_64"),
            Package::new("b", "1.0", "x86_64"),
        ];
        let second = vec![
            Package::new("a", "1.0", "x86_64"),
            Package::new("c", "1.0", "noarch"),
        ];
        let stats = DiffEngine::new().diff(&first, &second).unwrap();
        let out = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&stats, &first, &second, &ReportConfig::for_branches("p10", "p9"))
            .unwrap();

        assert!(out.contains("p10 (2 packages) vs p9 (2 packages)"));
        assert!(out.contains("Only in p9: 1"));
        assert!(out.contains("+ c-1.0.noarch"));
        assert!(out.contains("Only in p10: 1"));
        assert!(out.contains("- b-1.0.x86_64"));
        assert!(out.contains("Newer in p10: 1"));
        assert!(out.contains("Total changes: 3"));
        assert!(!out.contains("\x1b["));
    }

    #[test]
    fn test_long_section_is_elided() {
        let first: Vec<Package> = (0..8)
            .map(|i| Package::new(format!("pkg{i}"), "1", "noarch"))
            .collect();
        let second = vec![Package::new("zzz", "1", "noarch")];
        let stats = DiffEngine::new().diff(&first, &second).unwrap();
        let out = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&stats, &first, &second, &ReportConfig::for_branches("a", "b"))
            .unwrap();
        assert!(out.contains("... and 3 more"));
    }

    #[test]
    fn test_identical_branches() {
        let first = vec![Package::new("a", "1", "noarch")];
        let stats = DiffEngine::new().diff(&first, &first).unwrap();
        let out = SummaryReporter::new()
            .generate_diff_report(&stats, &first, &first, &ReportConfig::for_branches("a", "b"))
            .unwrap();
        assert!(out.contains("No differences"));
    }
}
