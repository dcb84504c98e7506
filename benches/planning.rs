//! Benchmarks for vase production planning
//!
//! Measures the single profit-maximising solve and the feasibility sweep at a
//! few supply sizes. The sweep cost grows with the product of the natural
//! bounds, so supplies are kept deliberately small.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kiln::workshop::{ResourceSupply, feasible_targets, optimal_target};

/// Supply scenarios used by both benchmarks
const SCENARIOS: &[(&str, ResourceSupply)] = &[
    (
        "tiny",
        ResourceSupply {
            clay: 4.0,
            glaze: 2.0,
        },
    ),
    (
        "small",
        ResourceSupply {
            clay: 10.0,
            glaze: 7.0,
        },
    ),
    (
        "medium",
        ResourceSupply {
            clay: 25.0,
            glaze: 18.0,
        },
    ),
];

/// Benchmark the single optimal solve
fn bench_optimal_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimal_target");

    for (name, supply) in SCENARIOS {
        group.bench_with_input(BenchmarkId::from_parameter(name), supply, |b, supply| {
            b.iter(|| black_box(optimal_target(black_box(supply))))
        });
    }

    group.finish();
}

/// Benchmark the per-candidate feasibility sweep
fn bench_feasible_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("feasible_targets");
    // One solver run per candidate pair makes these slow; keep samples low.
    group.sample_size(10);

    for (name, supply) in SCENARIOS {
        group.bench_with_input(BenchmarkId::from_parameter(name), supply, |b, supply| {
            b.iter(|| black_box(feasible_targets(black_box(supply))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_optimal_target, bench_feasible_targets);

criterion_main!(benches);
