/////////////////////////////////////////////////////////////////////////////////////////////
//
// Benchmarks NUFFT plan construction and application against direct evaluation.
//
// Created on: 15 Nov 2025     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ferreus_nufft::{Complex64, Nufft2Plan, NufftParams, build_nufft1, ndft1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_problem(n: usize, seed: u64) -> (Vec<f64>, Vec<Complex64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..n).map(|_| rng.random_range(0.0..1.0)).collect();
    let coefficients = (0..n)
        .map(|_| Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect();
    (points, coefficients)
}

fn bench_type1(c: &mut Criterion) {
    let mut group = c.benchmark_group("type1");

    for &n in &[256usize, 1024, 4096] {
        let (points, coefficients) = random_problem(n, n as u64);
        let plan = build_nufft1(&points, 1e-10).expect("plan builds");

        group.bench_with_input(BenchmarkId::new("plan_apply", n), &coefficients, |b, c| {
            b.iter(|| black_box(plan.apply(black_box(c)).expect("apply succeeds")))
        });

        group.bench_with_input(BenchmarkId::new("direct", n), &coefficients, |b, c| {
            b.iter(|| black_box(ndft1(black_box(c), &points).expect("direct succeeds")))
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let params = NufftParams::builder().cache_coefficients(false).build();

    for &epsilon in &[1e-4, 1e-8, 1e-12] {
        let (points, _) = random_problem(2048, 7);
        let frequencies: Vec<f64> = points.iter().map(|x| x * 2048.0).collect();

        group.bench_with_input(
            BenchmarkId::new("type2", format!("{epsilon:e}")),
            &frequencies,
            |b, w| {
                b.iter(|| {
                    black_box(Nufft2Plan::new(black_box(w), epsilon, Some(params)).expect("plan builds"))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_type1, bench_construction);
criterion_main!(benches);
