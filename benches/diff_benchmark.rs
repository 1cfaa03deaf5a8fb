//! Benchmarks for the merge-diff engine and the version comparator.
//!
//! Run with: cargo bench --bench diff_benchmark

use branch_compare::{compare_versions, BranchManifest, DiffEngine, Package};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate a sorted manifest with `count` packages.
fn generate_manifest(branch: &str, count: usize) -> BranchManifest {
    let packages = (0..count)
        .map(|i| {
            Package::new(
                format!("pkg-{i:07}"),
                format!("1.{}.{}", i % 10, i % 100),
                if i % 3 == 0 { "noarch" } else { "x86_64" },
            )
        })
        .collect();
    BranchManifest::new(branch, packages)
}

/// Generate two related manifests: roughly `change_percent` of the packages
/// are bumped, dropped or added on the second side.
fn generate_manifest_pair(size: usize, change_percent: usize) -> (BranchManifest, BranchManifest) {
    let first = generate_manifest("sisyphus", size);
    let step = (100 / change_percent.max(1)).max(1);

    let mut packages = Vec::with_capacity(size + size / step);
    for (i, pkg) in first.packages().iter().enumerate() {
        match (i % step == 0, i % 3) {
            (true, 0) => {}
            (true, 1) => packages.push(Package::new(&pkg.name, "0.9", &pkg.arch)),
            (true, _) => {
                packages.push(pkg.clone());
                packages.push(Package::new(format!("{}-extra", pkg.name), "1.0", "noarch"));
            }
            (false, _) => packages.push(pkg.clone()),
        }
    }
    (first, BranchManifest::new("p10", packages))
}

fn bench_diff_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_by_size");
    group.sample_size(20);

    for size in [1_000, 10_000, 100_000] {
        let (first, second) = generate_manifest_pair(size, 5);
        group.throughput(Throughput::Elements((first.packages().len() + second.packages().len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let engine = DiffEngine::new();
            b.iter(|| engine.diff(black_box(&first), black_box(&second)));
        });
    }
    group.finish();
}

fn bench_diff_change_rates(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_by_change_rate");
    group.sample_size(20);

    for percent in [1, 10, 50] {
        let (first, second) = generate_manifest_pair(20_000, percent);
        group.bench_with_input(BenchmarkId::from_parameter(percent), &percent, |b, _| {
            let engine = DiffEngine::new();
            b.iter(|| engine.diff(black_box(&first), black_box(&second)));
        });
    }
    group.finish();
}

fn bench_compare_versions(c: &mut Criterion) {
    let pairs = [
        ("1.0", "1.0"),
        ("1.9", "1.10"),
        ("2.4.58", "2.4.57"),
        ("1.0~rc1", "1.0"),
        ("20240101git3f2a1c", "20240101git3f2a1d"),
    ];
    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (a, v) in &pairs {
                black_box(compare_versions(black_box(a), black_box(v)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_diff_sizes,
    bench_diff_change_rates,
    bench_compare_versions
);
criterion_main!(benches);
