//! Data model for branch manifests.
//!
//! A [`BranchManifest`] owns the parsed package list of one branch. The diff
//! engine never touches it directly; it reads through the [`ManifestView`]
//! trait, which hands out borrowed [`PackageRecord`]s by index.

mod manifest;
mod package;

pub use manifest::{BranchManifest, ManifestView};
pub use package::{Package, PackageRecord};
