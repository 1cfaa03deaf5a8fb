//! Report output stage.

use super::{should_use_color, write_output, OutputTarget, PipelineError};
use crate::config::OutputConfig;
use crate::diff::DiffStatistics;
use crate::model::BranchManifest;
use crate::reports::{create_reporter_with_options, ReportConfig};

/// Render the comparison and write it to the configured destination.
///
/// Nothing is written when rendering fails.
pub fn output_report(
    config: &OutputConfig,
    stats: &DiffStatistics,
    first: &BranchManifest,
    second: &BranchManifest,
) -> Result<(), PipelineError> {
    let target = OutputTarget::from_option(config.file.clone());
    // Escape codes only make sense on a terminal
    let use_color = target == OutputTarget::Stdout && should_use_color(config.no_color);

    let report_config = ReportConfig::for_branches(first.branch(), second.branch())
        .with_summary(config.include_summary);
    let reporter = create_reporter_with_options(config.format, use_color, config.pretty);

    let report = reporter
        .generate_diff_report(stats, first, second, &report_config)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    write_output(&report, &target).map_err(|source| PipelineError::ReportFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::Package;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_report_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let first = BranchManifest::new("p10", vec![Package::new("a", "1", "noarch")]);
        let second = BranchManifest::new("p9", vec![Package::new("b", "1", "noarch")]);
        let stats = DiffEngine::new().diff(&first, &second).unwrap();

        let config = OutputConfig {
            file: Some(path.clone()),
            pretty: false,
            ..OutputConfig::default()
        };
        output_report(&config, &stats, &first, &second).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["absent_in_p9_packages"][0]["name"], "a");
        assert_eq!(json["absent_in_p10_packages"][0]["name"], "b");
    }

    #[test]
    fn test_summary_file_has_no_escape_codes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let first = BranchManifest::new("p10", vec![Package::new("a", "2", "noarch")]);
        let second = BranchManifest::new("p9", vec![Package::new("a", "1", "noarch")]);
        let stats = DiffEngine::new().diff(&first, &second).unwrap();

        let config = OutputConfig {
            format: ReportFormat::Summary,
            file: Some(path.clone()),
            ..OutputConfig::default()
        };
        output_report(&config, &stats, &first, &second).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("Newer in p10: 1"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_unwritable_target_is_report_stage() {
        let dir = TempDir::new().unwrap();
        let first = BranchManifest::new("p10", vec![Package::new("a", "1", "noarch")]);
        let stats = DiffEngine::new().diff(&first, &first).unwrap();
        let config = OutputConfig {
            file: Some(dir.path().join("nope").join("out.json")),
            ..OutputConfig::default()
        };
        let err = output_report(&config, &stats, &first, &first).unwrap_err();
        assert_eq!(err.stage(), "report");
    }
}
