//! Criterion benchmarks for rasterization, relaxation and layout.
//! Focus sizes: lattice radius ρ in {1.0, 0.5, 0.25} on a radius-10 polygon.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p circlepack

use circlepack::api::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

const RADII: [f64; 3] = [1.0, 0.5, 0.25];

fn star() -> Polygon {
    draw_star(StarCfg::default(), ReplayToken { seed: 43, index: 0 })
}

fn hyperbolic_graph(rho: f64) -> Graph {
    let mut g = cut_thick(&regular(8, 10.0), rho).unwrap();
    g.set_radii(1e-5);
    g
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    let star = star();
    for &rho in &RADII {
        group.bench_with_input(BenchmarkId::new("hexagonal_fit_star", rho), &rho, |b, &rho| {
            b.iter(|| hexagonal_fit(&star, rho).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("cut_thick_star", rho), &rho, |b, &rho| {
            b.iter(|| cut_thick(&star, rho).unwrap())
        });
    }
    group.finish();
}

fn bench_relax(c: &mut Criterion) {
    let mut group = c.benchmark_group("relax");
    for &rho in &RADII {
        group.bench_with_input(BenchmarkId::new("hyperbolic_pass", rho), &rho, |b, &rho| {
            b.iter_batched(
                || hyperbolic_graph(rho),
                |mut g| relax(&mut g, Model::Hyperbolic).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("hyperbolic_layout", rho), &rho, |b, &rho| {
            let mut solved = hyperbolic_graph(rho);
            for _ in 0..64 {
                relax(&mut solved, Model::Hyperbolic).unwrap();
            }
            b.iter_batched(
                || solved.clone(),
                |mut g| layout(&mut g, Model::Hyperbolic, Traversal::Depth).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rasterize, bench_relax);
criterion_main!(benches);
