#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the version comparator with two strings split from one input.
///
/// Checks that comparison never panics and stays antisymmetric.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (a, b) = s.split_once('\0').unwrap_or((s, ""));
    let forward = branch_compare::compare_versions(a, b);
    let backward = branch_compare::compare_versions(b, a);
    assert_eq!(forward, backward.reverse());
});
