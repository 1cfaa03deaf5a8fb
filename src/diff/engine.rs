//! Merge-diff engine over two name-sorted manifests.

use super::policy::VersionPolicy;
use super::result::{Branch, DiffStatistics};
use super::scan::{Cursors, ScanState};
use crate::error::DiffError;
use crate::model::ManifestView;
use std::cmp::Ordering;

/// Compares two manifests in a single linear pass.
///
/// Both inputs must be sorted by name ascending. Each record is visited once,
/// so a run costs `O(n + m)` name comparisons plus one version comparison per
/// shared name.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    version_policy: VersionPolicy,
    hash_shortcut: bool,
}

impl DiffEngine {
    /// Engine comparing the `version` field, with the identical-content
    /// shortcut enabled.
    pub fn new() -> Self {
        Self {
            version_policy: VersionPolicy::Version,
            hash_shortcut: true,
        }
    }

    /// Set how same-named records are ordered
    #[must_use]
    pub const fn with_version_policy(mut self, policy: VersionPolicy) -> Self {
        self.version_policy = policy;
        self
    }

    /// Skip the walk when both views report the same non-zero content hash
    #[must_use]
    pub const fn with_hash_shortcut(mut self, enabled: bool) -> Self {
        self.hash_shortcut = enabled;
        self
    }

    #[must_use]
    pub const fn version_policy(&self) -> VersionPolicy {
        self.version_policy
    }

    /// Compare `first` (branch 0) against `second` (branch 1).
    ///
    /// Fails with [`DiffError::EmptyManifest`] when either side has no
    /// records, and with [`DiffError::CorruptManifest`] when a view cannot
    /// produce a record inside its own length.
    pub fn diff<F, S>(&self, first: &F, second: &S) -> Result<DiffStatistics, DiffError>
    where
        F: ManifestView + ?Sized,
        S: ManifestView + ?Sized,
    {
        let first_len = first.len();
        let second_len = second.len();
        if first_len == 0 {
            return Err(DiffError::EmptyManifest { side: Branch::First });
        }
        if second_len == 0 {
            return Err(DiffError::EmptyManifest {
                side: Branch::Second,
            });
        }

        let mut stats = DiffStatistics::with_capacity(first_len, second_len);

        if self.hash_shortcut {
            let hash = first.content_hash();
            if hash != 0 && hash == second.content_hash() {
                tracing::debug!("Manifests share content hash {:016x}, skipping scan", hash);
                return Ok(stats);
            }
        }

        let mut cursors = Cursors::default();
        let mut state = ScanState::GoAhead;

        while state != ScanState::BothFinished {
            let first_rec = first.get(cursors.first).ok_or(DiffError::CorruptManifest {
                side: Branch::First,
                index: cursors.first,
            })?;
            let second_rec = second.get(cursors.second).ok_or(DiffError::CorruptManifest {
                side: Branch::Second,
                index: cursors.second,
            })?;

            let outcome = match state.forced_outcome() {
                Some(forced) => forced,
                None => first_rec.name.cmp(second_rec.name),
            };

            match outcome {
                Ordering::Equal => {
                    if self.version_policy.compare(&first_rec, &second_rec) == Ordering::Greater {
                        stats.record_newer(cursors.first);
                    }
                }
                Ordering::Less => stats.record_absent(Branch::Second, cursors.first),
                Ordering::Greater => stats.record_absent(Branch::First, cursors.second),
            }

            state = cursors.advance(outcome, first_len, second_len, state);
        }

        tracing::debug!(
            "Scan done: {} absent in first, {} absent in second, {} newer in first",
            stats.absent_from(Branch::First).len(),
            stats.absent_from(Branch::Second).len(),
            stats.newer_in_branch0().len()
        );

        Ok(stats)
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}
