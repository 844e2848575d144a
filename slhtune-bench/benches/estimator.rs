//! Estimator Benchmarks
//!
//! Benchmarks for the security estimator using the Criterion framework, on the
//! FIPS 205 parameter sets at their design volume and under heavy overuse.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slhtune::estimator::{estimate_security_bits, max_signatures_at_level, meets_security_level};
use slhtune_bench::{FIPS205_LOG_SIGNATURES, FIPS205_SETS};

/// Benchmark the converged estimate at the design volume and far past it.
fn bench_security_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Estimator security_bits");
    group.throughput(Throughput::Elements(1));

    for set in FIPS205_SETS {
        for overuse in [0.0, 8.0, 16.0] {
            let m = FIPS205_LOG_SIGNATURES + overuse;
            group.bench_with_input(BenchmarkId::new(set.name, m), &m, |b, &m| {
                b.iter(|| {
                    black_box(estimate_security_bits(
                        black_box(m),
                        set.hypertree_height,
                        set.fors_height,
                        set.fors_count,
                    ))
                })
            });
        }
    }

    group.finish();
}

/// Benchmark the early-exit check against both sides of the level.
fn bench_meets_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("Estimator meets_level");
    group.throughput(Throughput::Elements(1));

    let set = FIPS205_SETS[0];
    for target in [96.0, 128.0, 160.0] {
        group.bench_with_input(BenchmarkId::new(set.name, target), &target, |b, &target| {
            b.iter(|| {
                black_box(meets_security_level(
                    FIPS205_LOG_SIGNATURES,
                    set.hypertree_height,
                    set.fors_height,
                    set.fors_count,
                    black_box(target),
                ))
            })
        });
    }

    group.finish();
}

/// Benchmark the overuse scan used to score every selected candidate.
fn bench_max_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("Estimator max_signatures_at_level");
    // Each scan evaluates the estimate a hundred times or more
    group.sample_size(20);

    for set in &FIPS205_SETS[..2] {
        group.bench_function(set.name, |b| {
            b.iter(|| {
                black_box(max_signatures_at_level(
                    black_box(96.0),
                    set.hypertree_height,
                    set.fors_height,
                    set.fors_count,
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_security_bits,
    bench_meets_level,
    bench_max_signatures
);
criterion_main!(benches);
