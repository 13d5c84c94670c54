//! Benchmarks for twist dispatch and notation parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cuber::geometry::{Axis, Sense};
use cuber::grid::{permute, twist_table, Layer};
use cuber::{Cube, CubeConfig, Twist};

/// Benchmark queueing and settling a sequence of quarter turns.
fn bench_twist_sequence(c: &mut Criterion) {
    c.bench_function("twist_sequence", |b| {
        b.iter(|| {
            let mut cube = Cube::default();
            cube.queue(black_box("RUrFDlBbLdfuR"));
            cube.run(1000);
            cube.is_solved()
        })
    });
}

/// Benchmark a seeded shuffle followed by a full rewind.
fn bench_shuffle_and_rewind(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewind");
    group.sample_size(20);
    group.bench_function("shuffle_40", |b| {
        b.iter(|| {
            let mut cube = Cube::new(&CubeConfig {
                seed: Some(1),
                ..CubeConfig::default()
            });
            cube.shuffle(40);
            cube.run(1000);
            cube.set_solver(Box::new(cuber::solver::Rewind::new()));
            cube.is_solving = true;
            cube.run(1000);
            cube.is_solved()
        })
    });
    group.finish();
}

/// Benchmark parsing mixed notation with explicit degrees.
fn bench_parse_notation(c: &mut Criterion) {
    c.bench_function("parse_notation", |b| {
        b.iter(|| Twist::parse(black_box("Udr10Lf-30bXyzMES45rR180")))
    });
}

/// Benchmark applying a single slot permutation.
fn bench_permute(c: &mut Criterion) {
    let table = twist_table(Axis::X, Layer::Positive, Sense::Clockwise);
    let slots: Vec<usize> = (0..27).collect();

    c.bench_function("permute_slots", |b| {
        b.iter(|| permute(black_box(slots.clone()), table))
    });
}

criterion_group!(
    benches,
    bench_twist_sequence,
    bench_shuffle_and_rewind,
    bench_parse_notation,
    bench_permute
);
criterion_main!(benches);
