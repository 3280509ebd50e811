//! Quick search performance and game comparison test

use gasi_vrp::{
    analysis::StrategyDistribution,
    compute::{Vrp, evolution::EvolutionEngine},
    schema::{GameKind, GasiConfig, Location, ProblemDefinition},
};
use std::time::Instant;

fn main() {
    println!("=== GASI-VRP Performance Test ===\n");

    let vrp = Vrp::new(&circle_instance(40)).expect("valid instance");

    for game in GameKind::ALL {
        println!("Game: {:?}", game);

        let config = GasiConfig {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.8,
            crossover_rate: 0.6,
            social_weight: if game == GameKind::None { 0.0 } else { 0.25 },
            game,
            random_seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let mut engine = EvolutionEngine::new(&vrp, config).expect("valid config");
        let result = engine.run();
        let elapsed = start.elapsed();

        let cooperative = StrategyDistribution::cooperative_share(&result.strategies);
        println!(
            "  Best distance: {:.2} over {} routes",
            result.best_distance,
            result.routes.len()
        );
        println!(
            "  Offspring accepted: {}/{}",
            result.stats.offspring_accepted, result.stats.offspring_produced
        );
        println!("  Cooperative share: {:.1}%", cooperative * 100.0);
        println!(
            "  Time: {:.2}s ({:.0} evals/s)\n",
            elapsed.as_secs_f64(),
            result.stats.total_evaluations as f64 / elapsed.as_secs_f64()
        );
    }
}

/// Customers evenly spaced on two rings around the depot.
fn circle_instance(customers: u32) -> ProblemDefinition {
    let mut locations = vec![Location::depot(0, (50.0, 50.0))];
    for id in 1..=customers {
        let angle = id as f64 * std::f64::consts::TAU / customers as f64;
        let radius = if id % 2 == 0 { 20.0 } else { 40.0 };
        locations.push(Location::customer(
            id,
            (50.0 + radius * angle.cos(), 50.0 + radius * angle.sin()),
            (1 + id % 10) as f64,
        ));
    }
    ProblemDefinition {
        vehicle_capacity: 50.0,
        locations,
    }
}
