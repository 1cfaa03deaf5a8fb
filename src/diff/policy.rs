//! How two records with the same name are ordered.

use crate::model::PackageRecord;
use crate::utils::{compare_evr, compare_versions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which package fields decide that one side is newer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum VersionPolicy {
    /// Compare the `version` field only
    #[default]
    Version,
    /// Compare epoch, then version, then release when both sides carry one
    Evr,
}

impl VersionPolicy {
    #[must_use]
    pub fn compare(self, a: &PackageRecord<'_>, b: &PackageRecord<'_>) -> Ordering {
        match self {
            Self::Version => compare_versions(a.version, b.version),
            Self::Evr => compare_evr(&a.evr(), &b.evr()),
        }
    }
}

impl std::fmt::Display for VersionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Version => write!(f, "version"),
            Self::Evr => write!(f, "evr"),
        }
    }
}
