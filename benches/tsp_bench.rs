//! Criterion benchmarks for u-tsp constructive heuristics.
//!
//! Uses seeded uniform instances to compare both heuristics on both
//! distance paths (precomputed matrix vs on-demand).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::constructive::HeuristicKind;
use u_tsp::distance::ModelConfig;
use u_tsp::io::random_model;

const SIZES: [usize; 3] = [100, 500, 2_000];

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic");
    for n in SIZES {
        let model = random_model(n, 100_000, 42, &ModelConfig::default()).expect("valid model");
        for kind in HeuristicKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &model, |b, m| {
                b.iter(|| kind.compute_tour(m, black_box(0)).expect("valid start").length())
            });
        }
    }
    group.finish();
}

fn bench_distance_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_path");
    let n = 500;
    for (label, config) in [
        ("matrix", ModelConfig::default()),
        ("on_demand", ModelConfig::on_demand()),
    ] {
        let model = random_model(n, 100_000, 42, &config).expect("valid model");
        group.bench_with_input(BenchmarkId::new(label, n), &model, |b, m| {
            b.iter(|| {
                HeuristicKind::NearestNeighbor
                    .compute_tour(m, black_box(0))
                    .expect("valid start")
                    .length()
            })
        });
    }
    group.finish();
}

fn bench_model_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_build");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| random_model(n, 100_000, 42, &ModelConfig::default()).expect("valid model"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heuristics, bench_distance_paths, bench_model_build);
criterion_main!(benches);
