//! Property-based tests for the merge-diff engine.
//!
//! Every result is checked against a ground truth computed independently
//! with hash sets and maps over the same manifests.

use branch_compare::diff::Branch;
use branch_compare::{compare_versions, BranchManifest, DiffEngine, Package};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A non-empty manifest with unique names in ascending order.
fn manifest_strategy() -> impl Strategy<Value = Vec<Package>> {
    prop::collection::btree_map("[a-z]{1,4}", "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}", 1..60).prop_map(
        |entries: BTreeMap<String, String>| {
            entries
                .into_iter()
                .map(|(name, version)| Package::new(name, version, "x86_64"))
                .collect()
        },
    )
}

fn names(packages: &[Package]) -> HashSet<&str> {
    packages.iter().map(|p| p.name.as_str()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn identical_manifests_have_no_differences(packages in manifest_strategy()) {
        let stats = DiffEngine::new().diff(&packages, &packages.clone()).unwrap();
        prop_assert!(stats.is_empty());
    }

    #[test]
    fn absences_match_set_difference(a in manifest_strategy(), b in manifest_strategy()) {
        let stats = DiffEngine::new().diff(&a, &b).unwrap();
        let a_names = names(&a);
        let b_names = names(&b);

        let missing_from_a: HashSet<&str> = stats
            .absent_from(Branch::First)
            .iter()
            .map(|&i| b[i].name.as_str())
            .collect();
        let missing_from_b: HashSet<&str> = stats
            .absent_from(Branch::Second)
            .iter()
            .map(|&i| a[i].name.as_str())
            .collect();

        prop_assert_eq!(missing_from_a, b_names.difference(&a_names).copied().collect::<HashSet<_>>());
        prop_assert_eq!(missing_from_b, a_names.difference(&b_names).copied().collect::<HashSet<_>>());
    }

    #[test]
    fn every_record_is_visited_once(a in manifest_strategy(), b in manifest_strategy()) {
        let stats = DiffEngine::new().diff(&a, &b).unwrap();
        let shared = names(&a).intersection(&names(&b)).count();

        prop_assert_eq!(stats.absent_from(Branch::Second).len() + shared, a.len());
        prop_assert_eq!(stats.absent_from(Branch::First).len() + shared, b.len());

        // Indexes come out in walk order
        for list in [stats.absent_from(Branch::First), stats.absent_from(Branch::Second), stats.newer_in_branch0()] {
            prop_assert!(list.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn newer_matches_version_comparison(a in manifest_strategy(), b in manifest_strategy()) {
        let stats = DiffEngine::new().diff(&a, &b).unwrap();
        let b_versions: HashMap<&str, &str> =
            b.iter().map(|p| (p.name.as_str(), p.version.as_str())).collect();

        let expected: Vec<usize> = a
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                b_versions
                    .get(p.name.as_str())
                    .is_some_and(|v| compare_versions(&p.version, v) == Ordering::Greater)
            })
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(stats.newer_in_branch0(), expected.as_slice());
    }

    #[test]
    fn swapping_sides_swaps_absences(a in manifest_strategy(), b in manifest_strategy()) {
        let forward = DiffEngine::new().diff(&a, &b).unwrap();
        let backward = DiffEngine::new().diff(&b, &a).unwrap();

        prop_assert_eq!(forward.absent_from(Branch::First), backward.absent_from(Branch::Second));
        prop_assert_eq!(forward.absent_from(Branch::Second), backward.absent_from(Branch::First));
    }

    #[test]
    fn hash_shortcut_does_not_change_results(a in manifest_strategy(), b in manifest_strategy()) {
        let a = BranchManifest::new("a", a);
        let b = BranchManifest::new("b", b);
        let fast = DiffEngine::new().diff(&a, &b).unwrap();
        let slow = DiffEngine::new().with_hash_shortcut(false).diff(&a, &b).unwrap();
        prop_assert_eq!(fast, slow);
    }
}
