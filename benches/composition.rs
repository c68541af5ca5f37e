//! Arrow overhead benchmarks.
//!
//! - Direct call vs. `apply` through an arrow
//! - Composition chains of increasing depth
//! - Lifted arrows on pairs
//! - Shared (Arc-backed) vs. owned arrows

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use arrows::make;

fn step(x: u64) -> u64 {
    x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}

fn bench_direct_vs_arrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    group.bench_function("direct_call", |b| b.iter(|| step(black_box(42))));

    let arrow = make(step);
    group.bench_function("arrow_apply", |b| b.iter(|| arrow.apply(black_box(42))));

    let closure = make(|x: u64| step(x));
    group.bench_function("closure_arrow_apply", |b| {
        b.iter(|| closure.apply(black_box(42)))
    });

    group.finish();
}

fn bench_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_depth");
    let a = make(step);

    let depth_2 = a >> a;
    let depth_4 = depth_2 >> depth_2;
    let depth_8 = depth_4 >> depth_4;
    let depth_16 = depth_8 >> depth_8;

    group.bench_with_input(BenchmarkId::new("composed", 2), &2, |b, _| {
        b.iter(|| depth_2.apply(black_box(7)))
    });
    group.bench_with_input(BenchmarkId::new("composed", 4), &4, |b, _| {
        b.iter(|| depth_4.apply(black_box(7)))
    });
    group.bench_with_input(BenchmarkId::new("composed", 8), &8, |b, _| {
        b.iter(|| depth_8.apply(black_box(7)))
    });
    group.bench_with_input(BenchmarkId::new("composed", 16), &16, |b, _| {
        b.iter(|| depth_16.apply(black_box(7)))
    });

    // Baseline: hand-written loop doing the same work.
    for depth in [2u32, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("loop", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut x = black_box(7u64);
                for _ in 0..depth {
                    x = step(x);
                }
                x
            })
        });
    }

    group.finish();
}

fn bench_lifted(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifted");
    let a = make(step);

    let first = a.first::<[u8; 32]>();
    group.bench_function("first_with_32_byte_bypass", |b| {
        b.iter(|| first.apply(black_box((7, [0xAB; 32]))))
    });

    let second = a.second::<String>();
    let bypass = String::from("bypass");
    group.bench_function("second_with_string_bypass", |b| {
        b.iter(|| second.apply(black_box((bypass.clone(), 7))))
    });

    group.finish();
}

fn bench_shared(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared");
    let table: Vec<u64> = (0..4096).map(step).collect();

    let owned = make(move |i: usize| table[i & 4095]);
    let shared = owned.clone().shared();

    group.bench_function("owned_clone", |b| b.iter(|| black_box(owned.clone())));
    group.bench_function("shared_clone", |b| b.iter(|| black_box(shared.clone())));
    group.bench_function("shared_apply", |b| b.iter(|| shared.apply(black_box(1234))));

    group.finish();
}

criterion_group!(
    benches,
    bench_direct_vs_arrow,
    bench_chain_depth,
    bench_lifted,
    bench_shared
);
criterion_main!(benches);
