use criterion::{criterion_group, criterion_main, Criterion};
use densemine::pipeline::triangulation::triangulate;
use densemine::{Edge, EdgeSet, Miner, MinerConfig, SearchMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_graph(vertices: u32, density: f64, seed: u64) -> EdgeSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = EdgeSet::default();
    for a in 0..vertices {
        for b in (a + 1)..vertices {
            if rng.gen_bool(density) {
                edges.insert(Edge::new(a, b));
            }
        }
    }
    edges
}

fn bench_triangulation(c: &mut Criterion) {
    let edges = random_graph(300, 0.05, 42);
    c.bench_function("triangulate_300v", |b| {
        b.iter(|| triangulate(black_box(&edges), 5))
    });
}

fn bench_full_mine(c: &mut Criterion) {
    let edges = random_graph(150, 0.08, 7);
    let sequential = Miner::new(MinerConfig {
        partitions: 4,
        search_mode: SearchMode::Sequential,
        max_iterations: 100,
    });
    let binary = Miner::new(MinerConfig {
        partitions: 4,
        search_mode: SearchMode::Binary,
        max_iterations: 100,
    });

    c.bench_function("mine_sequential_150v", |b| {
        b.iter(|| sequential.mine(black_box(&edges)))
    });
    c.bench_function("mine_binary_150v", |b| {
        b.iter(|| binary.mine(black_box(&edges)))
    });
}

criterion_group!(benches, bench_triangulation, bench_full_mine);
criterion_main!(benches);
