#![no_main]
use branch_compare::{DiffEngine, Package};
use libfuzzer_sys::fuzz_target;

/// Fuzz the merge-diff engine with arbitrary, possibly unsorted manifests.
///
/// Unsorted input gives meaningless results but must never panic or record
/// an index outside the manifest it points into.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (left, right) = s.split_once('|').unwrap_or((s, ""));
    let parse = |side: &str| -> Vec<Package> {
        side.split(',')
            .filter_map(|entry| entry.split_once('='))
            .map(|(name, version)| Package::new(name, version, "noarch"))
            .collect()
    };
    let (first, second) = (parse(left), parse(right));

    if let Ok(stats) = DiffEngine::new().diff(&first, &second) {
        assert!(stats.resolve(&first, &second).is_ok());
    }
});
