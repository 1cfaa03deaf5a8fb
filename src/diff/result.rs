//! Statistics accumulated by one comparison run.

use crate::error::DiffError;
use crate::model::{ManifestView, PackageRecord};
use serde::Serialize;

/// Position of a manifest in a two-branch comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// Branch 0, the reference side for newer-version reporting
    First,
    Second,
}

impl Branch {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Index lists produced by the merge-diff engine.
///
/// `absent_from(b)` holds indexes into the *other* branch's manifest: the
/// packages that branch has and `b` lacks. `newer_in_branch0` holds indexes
/// into the first manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffStatistics {
    absent_from: [Vec<usize>; 2],
    newer_in_branch0: Vec<usize>,
}

impl DiffStatistics {
    /// Empty statistics sized for the worst case of the given manifest lengths.
    #[must_use]
    pub fn with_capacity(first_len: usize, second_len: usize) -> Self {
        Self {
            absent_from: [Vec::with_capacity(second_len), Vec::with_capacity(first_len)],
            newer_in_branch0: Vec::with_capacity(first_len),
        }
    }

    /// Indexes into the opposite branch's manifest of packages missing from `branch`.
    #[must_use]
    pub fn absent_from(&self, branch: Branch) -> &[usize] {
        &self.absent_from[branch.index()]
    }

    /// Indexes into the first manifest of packages whose version there is newer.
    #[must_use]
    pub fn newer_in_branch0(&self) -> &[usize] {
        &self.newer_in_branch0
    }

    pub(crate) fn record_absent(&mut self, missing_in: Branch, index: usize) {
        self.absent_from[missing_in.index()].push(index);
    }

    pub(crate) fn record_newer(&mut self, index: usize) {
        self.newer_in_branch0.push(index);
    }

    /// True when the manifests showed no difference at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }

    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.absent_from[0].len() + self.absent_from[1].len() + self.newer_in_branch0.len()
    }

    /// Counts together with the sizes of the compared manifests.
    #[must_use]
    pub fn summary(&self, first_len: usize, second_len: usize) -> DiffSummary {
        DiffSummary {
            branch0_packages: first_len,
            branch1_packages: second_len,
            absent_in_branch0: self.absent_from[0].len(),
            absent_in_branch1: self.absent_from[1].len(),
            newer_in_branch0: self.newer_in_branch0.len(),
        }
    }

    /// Turn the recorded indexes back into records of the manifests they
    /// point into.
    pub fn resolve<'a, F, S>(
        &self,
        first: &'a F,
        second: &'a S,
    ) -> Result<ResolvedDiff<'a>, DiffError>
    where
        F: ManifestView + ?Sized,
        S: ManifestView + ?Sized,
    {
        Ok(ResolvedDiff {
            absent_in_branch0: resolve_all(second, Branch::Second, self.absent_from(Branch::First))?,
            absent_in_branch1: resolve_all(first, Branch::First, self.absent_from(Branch::Second))?,
            newer_in_branch0: resolve_all(first, Branch::First, &self.newer_in_branch0)?,
        })
    }
}

fn resolve_all<'a, V>(
    view: &'a V,
    side: Branch,
    indexes: &[usize],
) -> Result<Vec<PackageRecord<'a>>, DiffError>
where
    V: ManifestView + ?Sized,
{
    indexes
        .iter()
        .map(|&index| view.get(index).ok_or(DiffError::CorruptManifest { side, index }))
        .collect()
}

/// [`DiffStatistics`] with every index replaced by the record it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDiff<'a> {
    /// Packages of the second branch missing from the first
    pub absent_in_branch0: Vec<PackageRecord<'a>>,
    /// Packages of the first branch missing from the second
    pub absent_in_branch1: Vec<PackageRecord<'a>>,
    pub newer_in_branch0: Vec<PackageRecord<'a>>,
}

/// Size and difference counts of one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub branch0_packages: usize,
    pub branch1_packages: usize,
    pub absent_in_branch0: usize,
    pub absent_in_branch1: usize,
    pub newer_in_branch0: usize,
}

impl DiffSummary {
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.absent_in_branch0 + self.absent_in_branch1 + self.newer_in_branch0
    }
}
