//! Evolutionary search module for vehicle routing with social interaction.
//!
//! Every individual carries two chromosomes: a route permutation that decodes
//! into vehicle trips, and a strategy value giving its probability of cooperating
//! in a two-player social game. Selection pressure blends both.
//!
//! # Overview
//!
//! - **Individuals** (`individual`): chromosomes plus optional fitness values
//! - **Chromosome Operations** (`chromosome`): random generation, order crossover,
//!   inversion and Gaussian mutation, random pairing
//! - **Fitness** (`fitness`): pairwise evaluation pass with per-pass normalization
//! - **Selection** (`selection`): tournament selection and elitist replacement
//! - **Search** (`search`): the generational loop
//!
//! # Example
//!
//! ```rust,no_run
//! use gasi_vrp::compute::Vrp;
//! use gasi_vrp::compute::evolution::EvolutionEngine;
//! use gasi_vrp::schema::{GasiConfig, ProblemDefinition};
//!
//! let vrp = Vrp::new(&ProblemDefinition::default()).unwrap();
//! let config = GasiConfig {
//!     population_size: 50,
//!     generations: 200,
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new(&vrp, config).unwrap();
//! let result = engine.run_with_callback(|progress| {
//!     println!("Generation {}: best distance = {:.3}",
//!         progress.generation, progress.best_distance);
//! });
//!
//! println!("Best distance: {:.3}", result.best_distance);
//! println!("Routes: {:?}", result.routes);
//! ```

mod chromosome;
mod fitness;
mod individual;
mod search;
mod selection;

pub use chromosome::{
    ChromosomeRng, STRATEGY_SIGMA, invert, order_crossover, perturb_strategy,
};
pub use fitness::{FitnessEvaluator, PassMaxima};
pub use individual::{FitnessParts, Individual};
pub use search::EvolutionEngine;
pub use selection::{
    ELITE_DIVISOR, TOURNAMENT_SIZE, elite_count, fittest, replace, sort_by_solution,
    tournament_select,
};
