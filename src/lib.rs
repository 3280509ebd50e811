//! GASI-VRP - Genetic algorithm with social interaction for vehicle routing.
//!
//! This crate searches for low-cost capacitated vehicle routes with a genetic
//! algorithm in which every candidate also carries a cooperation strategy. Paired
//! candidates play a two-player social game each generation and the payoff is
//! blended with route cost to drive selection.
//!
//! # Architecture
//!
//! - `schema`: Problem definitions, run configuration and result types
//! - `compute`: Problem model, social games and the evolutionary search
//! - `analysis`: Strategy distribution summaries and optimality gaps
//!
//! # Example
//!
//! ```rust,no_run
//! use gasi_vrp::{
//!     compute::{Vrp, evolution::EvolutionEngine},
//!     schema::{GameKind, GasiConfig, ProblemDefinition},
//! };
//!
//! let definition = ProblemDefinition::from_json_file("A-n32-k05.json").unwrap();
//! let vrp = Vrp::new(&definition).unwrap();
//!
//! let config = GasiConfig {
//!     game: GameKind::StagHunt,
//!     social_weight: 0.25,
//!     ..Default::default()
//! };
//!
//! let result = EvolutionEngine::new(&vrp, config).unwrap().run();
//! println!("Total distance: {:.2}", result.best_distance);
//! for (i, route) in result.routes.iter().enumerate() {
//!     println!("route {}: {:?}", i + 1, route);
//! }
//! ```

pub mod analysis;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::EvolutionEngine;
pub use compute::{Game, Vrp};
pub use schema::{GameKind, GasiConfig, ProblemDefinition, SearchResult};
