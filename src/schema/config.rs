//! Configuration types for a GASI search run.

use serde::{Deserialize, Serialize};

/// Top-level search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasiConfig {
    /// Number of individuals in the population (even, at least 4).
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Number of generations to run.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Probability that a child is mutated (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Probability that a selected parent pair reproduces (0.0-1.0).
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,
    /// Weight of the social fitness (0.0-1.0). Solution weight is its complement.
    #[serde(default = "default_social_weight")]
    pub social_weight: f64,
    /// Social game played between paired individuals.
    #[serde(default)]
    pub game: GameKind,
    /// How children inherit the parents' strategy values.
    #[serde(default)]
    pub strategy_inheritance: StrategyInheritance,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for GasiConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            crossover_rate: default_crossover_rate(),
            social_weight: default_social_weight(),
            game: GameKind::default(),
            strategy_inheritance: StrategyInheritance::default(),
            random_seed: None,
        }
    }
}

fn default_population_size() -> usize {
    500
}
fn default_generations() -> usize {
    2000
}
fn default_mutation_rate() -> f64 {
    0.8
}
fn default_crossover_rate() -> f64 {
    0.6
}
fn default_social_weight() -> f64 {
    0.25
}

/// Smallest population a tournament of four distinct participants can draw from.
pub const MIN_POPULATION_SIZE: usize = 4;

/// Named two-player games used to score cooperation strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum GameKind {
    /// Neutral game: every payoff is zero.
    None,
    /// Prisoner's Dilemma (T=5, R=3, P=1, S=0).
    #[default]
    PrisonersDilemma,
    /// Hawk-Dove (T=5, R=3, P=0, S=1).
    HawkDove,
    /// Stag Hunt (T=3, R=5, P=1, S=0).
    StagHunt,
    /// Harmonic game (T=1, R=5, P=0, S=3).
    Harmonic,
}

impl GameKind {
    /// All selectable games, neutral one included.
    pub const ALL: [GameKind; 5] = [
        GameKind::None,
        GameKind::PrisonersDilemma,
        GameKind::HawkDove,
        GameKind::StagHunt,
        GameKind::Harmonic,
    ];
}

/// Strategy inheritance policy used during reproduction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StrategyInheritance {
    /// Parents' strategies are randomly permuted and handed one to each child.
    #[default]
    Shuffled,
    /// First child keeps the first parent's strategy; second child gets the
    /// second value of the randomly permuted pair.
    FirstParentKept,
}

impl GasiConfig {
    /// Weight of the route cost term.
    #[inline]
    pub fn solution_weight(&self) -> f64 {
        1.0 - self.social_weight
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }

        let check_unit = |value: f64, name: &'static str| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::OutOfUnitRange { name, value })
            }
        };

        check_unit(self.mutation_rate, "mutation_rate")?;
        check_unit(self.crossover_rate, "crossover_rate")?;
        check_unit(self.social_weight, "social_weight")?;

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Population size must be at least 4, got {0}")]
    PopulationTooSmall(usize),
    #[error("Population size must be even, got {0}")]
    OddPopulation(usize),
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },
}
