//! Benchmarks for GASI-VRP evaluation and search.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gasi_vrp::{
    compute::{
        Game, Vrp,
        evolution::{ChromosomeRng, EvolutionEngine, FitnessEvaluator},
    },
    schema::{GameKind, GasiConfig, Location, ProblemDefinition},
};

/// Customers on a jittered grid around a central depot.
fn grid_instance(customers: u32) -> ProblemDefinition {
    let side = (customers as f64).sqrt().ceil() as u32;
    let mut locations = vec![Location::depot(0, (side as f64 / 2.0, side as f64 / 2.0))];
    for id in 1..=customers {
        let x = ((id - 1) % side) as f64 + 0.1 * (id % 7) as f64;
        let y = ((id - 1) / side) as f64 + 0.1 * (id % 5) as f64;
        locations.push(Location::customer(id, (x, y), 1.0 + (id % 9) as f64));
    }
    ProblemDefinition {
        vehicle_capacity: 100.0,
        locations,
    }
}

fn bench_route_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_distance");

    for size in [32, 64, 128, 256] {
        let vrp = Vrp::new(&grid_instance(size)).unwrap();
        let mut rng = ChromosomeRng::new(1);
        let individual = rng.random_individual(&vrp.customer_ids());

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(vrp.total_distance(black_box(&individual.route))))
        });
    }

    group.finish();
}

fn bench_evaluation_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation_pass");

    for population in [100, 500] {
        let vrp = Vrp::new(&grid_instance(64)).unwrap();
        let game = Game::new(GameKind::PrisonersDilemma);
        let evaluator = FitnessEvaluator::new(&vrp, &game, 0.75, 0.25);
        let mut rng = ChromosomeRng::new(2);
        let mut batch = rng.random_population(&vrp.customer_ids(), population);

        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, _| b.iter(|| black_box(evaluator.evaluate(&mut batch, &mut rng))),
        );
    }

    group.finish();
}

fn bench_short_run(c: &mut Criterion) {
    let vrp = Vrp::new(&grid_instance(32)).unwrap();

    c.bench_function("search_100x20", |b| {
        b.iter(|| {
            let config = GasiConfig {
                population_size: 100,
                generations: 20,
                random_seed: Some(42),
                ..Default::default()
            };
            let mut engine = EvolutionEngine::new(&vrp, config).unwrap();
            black_box(engine.run())
        })
    });
}

criterion_group!(
    benches,
    bench_route_decoding,
    bench_evaluation_pass,
    bench_short_run
);
criterion_main!(benches);
