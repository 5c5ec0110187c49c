//! Criterion micro-benchmarks for container append, reserve, and read paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growvec::GrowVec;
use growvec_bench::filled;

/// Benchmark: push 1K elements from empty, paying the full growth staircase.
fn bench_push_1k_cold(c: &mut Criterion) {
    c.bench_function("push_1k_cold", |b| {
        b.iter(|| {
            let gv = filled(1_000);
            black_box(gv.len());
        });
    });
}

/// Benchmark: push 64K elements from empty.
fn bench_push_64k_cold(c: &mut Criterion) {
    c.bench_function("push_64k_cold", |b| {
        b.iter(|| {
            let gv = filled(64 * 1024);
            black_box(gv.len());
        });
    });
}

/// Benchmark: push 64K elements into a pre-reserved store (no reallocation).
fn bench_push_64k_reserved(c: &mut Criterion) {
    c.bench_function("push_64k_reserved", |b| {
        b.iter(|| {
            let mut gv = GrowVec::new();
            gv.reserve(64 * 1024).unwrap();
            for i in 0..64 * 1024u64 {
                gv.push(i).unwrap();
            }
            black_box(gv.len());
        });
    });
}

/// Benchmark: sum 64K elements through the slice view.
fn bench_read_64k(c: &mut Criterion) {
    let gv = filled(64 * 1024);
    c.bench_function("read_64k", |b| {
        b.iter(|| {
            let sum: u64 = gv.iter().sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_push_1k_cold,
    bench_push_64k_cold,
    bench_push_64k_reserved,
    bench_read_64k
);
criterion_main!(benches);
