//! Package records as published in a branch manifest.

use crate::utils::Evr;
use serde::{Deserialize, Serialize};

/// One binary package entry of a branch manifest.
///
/// Only `name`, `version` and `arch` are required. The remaining fields are
/// present in full repository exports and are kept when available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub arch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disttag: Option<String>,
    /// Build time as a Unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildtime: Option<i64>,
    /// Name of the source package this binary was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Package {
    /// Create a package with the three required fields.
    pub fn new(name: impl Into<String>, version: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            arch: arch.into(),
            epoch: None,
            release: None,
            disttag: None,
            buildtime: None,
            source: None,
        }
    }

    #[must_use]
    pub const fn with_epoch(mut self, epoch: u64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    #[must_use]
    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }

    /// Borrow this package as a record view.
    #[must_use]
    pub fn record(&self) -> PackageRecord<'_> {
        PackageRecord {
            name: &self.name,
            version: &self.version,
            arch: &self.arch,
            epoch: self.epoch,
            release: self.release.as_deref(),
        }
    }
}

/// Borrowed view of a package, handed out by a [`ManifestView`](super::ManifestView).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRecord<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub arch: &'a str,
    pub epoch: Option<u64>,
    pub release: Option<&'a str>,
}

impl<'a> PackageRecord<'a> {
    /// A record carrying only name, version and arch.
    #[must_use]
    pub const fn new(name: &'a str, version: &'a str, arch: &'a str) -> Self {
        Self {
            name,
            version,
            arch,
            epoch: None,
            release: None,
        }
    }

    #[must_use]
    pub const fn evr(&self) -> Evr<'a> {
        Evr::new(self.epoch, self.version, self.release)
    }
}

impl std::fmt::Display for PackageRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}.{}", self.name, self.version, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_export_entry() {
        let json = r#"{
            "name": "bash",
            "epoch": 0,
            "version": "5.1.8",
            "release": "alt3",
            "arch": "x86_64",
            "disttag": "p10+300000.100.1.1",
            "buildtime": 1650000000,
            "source": "bash5"
        }"#;
        let pkg: Package = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.name, "bash");
        assert_eq!(pkg.epoch, Some(0));
        assert_eq!(pkg.release.as_deref(), Some("alt3"));
        assert_eq!(pkg.source.as_deref(), Some("bash5"));
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let pkg: Package =
            serde_json::from_str(r#"{"name":"zsh","version":"5.9","arch":"noarch"}"#).unwrap();
        assert_eq!(pkg, Package::new("zsh", "5.9", "noarch"));
    }

    #[test]
    fn test_missing_version_is_rejected() {
        let res: Result<Package, _> = serde_json::from_str(r#"{"name":"zsh","arch":"noarch"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_record_view() {
        let pkg = Package::new("vim", "9.0", "x86_64").with_epoch(2).with_release("alt1");
        let rec = pkg.record();
        assert_eq!(rec.name, "vim");
        assert_eq!(rec.evr().epoch, 2);
        assert_eq!(rec.evr().release, Some("alt1"));
        assert_eq!(rec.to_string(), "vim-9.0.x86_64");
    }
}
