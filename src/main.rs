//! GASI-VRP CLI - Solve a routing instance from JSON files.

use std::fs;
use std::path::PathBuf;

use gasi_vrp::{
    analysis::StrategyDistribution,
    compute::{Vrp, evolution::EvolutionEngine},
    schema::{GasiConfig, ProblemDefinition},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example();
        return;
    }

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <instance.json> [config.json] [--output <solution.json>]",
            args[0]
        );
        eprintln!();
        eprintln!("Run the genetic algorithm with social interaction on a VRP instance.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  instance.json  Vehicle capacity and locations (exactly one depot)");
        eprintln!("  config.json    Search configuration (default: built-in defaults)");
        eprintln!("  --output       Write the best solution as JSON to this path");
        eprintln!();
        eprintln!("Example files are printed with the --example flag.");
        std::process::exit(1);
    }

    let instance_path = PathBuf::from(&args[1]);
    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-o" | "--output" => match rest.next() {
                Some(path) => output_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: {} needs a file path", arg);
                    std::process::exit(1);
                }
            },
            path if config_path.is_none() => config_path = Some(PathBuf::from(path)),
            other => {
                eprintln!("Error: unexpected argument {}", other);
                std::process::exit(1);
            }
        }
    }

    // Load instance
    let definition = ProblemDefinition::from_json_file(&instance_path).unwrap_or_else(|e| {
        eprintln!("Error loading instance: {}", e);
        std::process::exit(1);
    });

    // Load configuration
    let config: GasiConfig = match &config_path {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => GasiConfig::default(),
    };

    let vrp = Vrp::new(&definition).unwrap_or_else(|e| {
        eprintln!("Invalid instance: {}", e);
        std::process::exit(1);
    });

    println!("GASI-VRP");
    println!("========");
    println!("Instance: {}", instance_path.display());
    println!(
        "Locations: {} ({} customers), capacity {}",
        vrp.location_count(),
        vrp.customer_ids().len(),
        vrp.capacity()
    );
    println!(
        "Population: {}, generations: {}",
        config.population_size, config.generations
    );
    println!(
        "Mutation rate: {}, crossover rate: {}",
        config.mutation_rate, config.crossover_rate
    );
    println!(
        "Game: {:?}, weights: solution {} / social {}",
        config.game,
        config.solution_weight(),
        config.social_weight
    );
    println!();

    let mut engine = EvolutionEngine::new(&vrp, config.clone()).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    println!("Running search...");
    let report_every = (config.generations / 10).max(1);
    let result = engine.run_with_callback(|progress| {
        if progress.generation % report_every == 0 {
            println!(
                "  Generation {}/{}: best={:.3}, mean strategy={:.3}, accepted {}/{}",
                progress.generation,
                progress.total_generations,
                progress.best_distance,
                progress.mean_strategy,
                progress.offspring_accepted,
                progress.offspring_produced
            );
        }
    });

    println!();
    println!("Total distance: {:.3}", result.best_distance);
    for (i, route) in result.routes.iter().enumerate() {
        println!("  route {}: {:?}", i + 1, route);
    }

    if let Some(dist) = StrategyDistribution::from_values(&result.strategies, 10) {
        println!();
        println!(
            "Strategies: mean={:.3}, std={:.3}, range=[{:.3}, {:.3}], cooperative share={:.1}%",
            dist.mean,
            dist.std_dev,
            dist.min,
            dist.max,
            StrategyDistribution::cooperative_share(&result.strategies) * 100.0
        );
        println!("Histogram: {:?}", dist.histogram);
    }

    println!(
        "Time: {:.2}s ({} evaluations)",
        result.stats.elapsed_seconds, result.stats.total_evaluations
    );

    if let Some(path) = output_path {
        let input = instance_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Err(e) = result.to_export(input).to_json_file(&path) {
            eprintln!("Error writing solution: {}", e);
            std::process::exit(1);
        }
        println!("Solution written to {}", path.display());
    }
}

fn print_example() {
    let definition = ProblemDefinition::default();
    let config = GasiConfig::default();

    println!("Example instance (instance.json):");
    println!("{}", serde_json::to_string_pretty(&definition).unwrap());
    println!();
    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
