//! Benchmarks for the puzzle engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tileslide::Frame;

/// Benchmark scrambling a 4x4 board, parity correction included.
fn bench_scramble(c: &mut Criterion) {
    c.bench_function("scramble_4x4", |b| {
        let mut rng = StdRng::seed_from_u64(99);
        b.iter(|| black_box(Frame::new(4, &mut rng)))
    });
}

/// Benchmark a single slide on a scrambled board.
fn bench_slide(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let frame = Frame::new(4, &mut rng);
    let (row, col) = frame.allowed_moves()[0];

    c.bench_function("slide", |b| {
        b.iter(|| {
            let mut working = frame.clone();
            black_box(working.slide(row, col))
        })
    });
}

/// Benchmark one-move successor expansion.
fn bench_visit(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(21);
    let frame = Frame::new(4, &mut rng);

    c.bench_function("visit", |b| b.iter(|| black_box(&frame).visit()));
}

/// Benchmark the summed Manhattan heuristic.
fn bench_total_distance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let frame = Frame::new(4, &mut rng);

    c.bench_function("total_distance", |b| {
        b.iter(|| black_box(&frame).total_distance())
    });
}

criterion_group!(
    benches,
    bench_scramble,
    bench_slide,
    bench_visit,
    bench_total_distance
);
criterion_main!(benches);
