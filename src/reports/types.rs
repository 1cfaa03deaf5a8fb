//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Structured JSON with one array per difference section
    #[default]
    Json,
    /// Brief human-readable counts
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub metadata: ReportMetadata,
    /// Append a `summary` object with counts to the JSON report
    pub include_summary: bool,
}

impl ReportConfig {
    /// Report configuration for comparing `branch0` against `branch1`.
    pub fn for_branches(branch0: impl Into<String>, branch1: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                branch0: branch0.into(),
                branch1: branch1.into(),
            },
            include_summary: false,
        }
    }

    #[must_use]
    pub const fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }
}

/// Names of the compared branches, used to label report sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub branch0: String,
    pub branch1: String,
}
