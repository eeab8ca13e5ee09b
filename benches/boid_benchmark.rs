/*
 * Boid Simulation Benchmark
 *
 * Measures the pieces of a tick separately so the quadtree can be compared
 * against the brute-force baseline:
 * - Rebuilding the neighbor index
 * - Radius queries for every boid
 * - A full simulation step
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadflock::{
    BruteForceIndex, IndexKind, NeighborIndex, Quadtree, Rect, Simulation, SimulationParams,
    Vector2,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const WORLD_WIDTH: f32 = 2000.0;
const WORLD_HEIGHT: f32 = 2000.0;
const QUERY_RADIUS: f32 = 50.0;

fn random_positions(n: usize) -> Vec<Vector2> {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(0.0..WORLD_WIDTH), rng.gen_range(0.0..WORLD_HEIGHT)))
        .collect()
}

fn indices() -> [(&'static str, Box<dyn NeighborIndex>); 2] {
    let bounds = Rect::from_size(WORLD_WIDTH, WORLD_HEIGHT);
    [
        ("quadtree", Box::new(Quadtree::new(bounds, 8)) as Box<dyn NeighborIndex>),
        ("brute_force", Box::new(BruteForceIndex::new(bounds)) as Box<dyn NeighborIndex>),
    ]
}

// Benchmark rebuilding the index from scratch
fn bench_index_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_rebuild");

    for num_boids in [100, 500, 1000, 2000, 5000] {
        let positions = random_positions(num_boids);
        for (name, mut index) in indices() {
            group.bench_with_input(BenchmarkId::new(name, num_boids), &positions, |b, positions| {
                b.iter(|| black_box(index.rebuild(black_box(positions))));
            });
        }
    }

    group.finish();
}

// Benchmark one radius query per boid, which is what a tick does three times
fn bench_radius_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_queries");

    for num_boids in [100, 500, 1000, 2000, 5000] {
        let positions = random_positions(num_boids);
        for (name, mut index) in indices() {
            index.rebuild(&positions);
            group.bench_with_input(BenchmarkId::new(name, num_boids), &positions, |b, positions| {
                b.iter(|| {
                    let mut total = 0;
                    for &center in positions {
                        index.visit_radius(center, QUERY_RADIUS, &mut |_, _| total += 1);
                    }
                    black_box(total)
                });
            });
        }
    }

    group.finish();
}

// Benchmark the overall update loop
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for num_boids in [100, 500, 1000, 2000] {
        for (name, index, parallel) in [
            ("quadtree", IndexKind::Quadtree, false),
            ("quadtree_parallel", IndexKind::Quadtree, true),
            ("brute_force", IndexKind::BruteForce, false),
        ] {
            let params = SimulationParams {
                population: num_boids,
                world_width: WORLD_WIDTH,
                world_height: WORLD_HEIGHT,
                rng_seed: Some(7),
                index,
                parallel,
                ..SimulationParams::default()
            };
            let mut sim = match Simulation::new(params) {
                Ok(sim) => sim,
                Err(err) => panic!("benchmark params rejected: {err}"),
            };

            group.bench_function(BenchmarkId::new(name, num_boids), |b| {
                b.iter(|| sim.step());
            });
        }
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_index_rebuild, bench_radius_queries, bench_step
}

criterion_main!(benches);
