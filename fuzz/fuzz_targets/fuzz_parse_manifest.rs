#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz export document parsing.
///
/// Arbitrary bytes must either parse into a manifest or produce an error,
/// and a parsed manifest must survive sorting and lookup.
fuzz_target!(|data: &[u8]| {
    if let Ok(mut manifest) = branch_compare::BranchManifest::from_slice("fuzz", data) {
        manifest.sort_by_name();
        if let Some(first) = manifest.packages().first() {
            let name = first.name.clone();
            assert!(manifest.find(&name).is_some());
        }
    }
});
