//! Fitness evaluation: route cost plus social game payoff.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::compute::{Game, Vrp};

use super::chromosome::ChromosomeRng;
use super::individual::Individual;

/// Scores a batch of individuals in one pass.
pub struct FitnessEvaluator<'a> {
    vrp: &'a Vrp,
    game: &'a Game,
    w_solution: f64,
    w_social: f64,
}

/// Pass-wide maxima used for normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassMaxima {
    pub solution: f64,
    pub social: f64,
}

impl<'a> FitnessEvaluator<'a> {
    /// Create a new fitness evaluator.
    pub fn new(vrp: &'a Vrp, game: &'a Game, w_solution: f64, w_social: f64) -> Self {
        Self {
            vrp,
            game,
            w_solution,
            w_social,
        }
    }

    /// Evaluate a batch: random pairs play one game each, every individual gets its
    /// route cost, then totals are normalized against this batch's maxima.
    ///
    /// Panics if the batch has odd length.
    pub fn evaluate(&self, batch: &mut [Individual], rng: &mut ChromosomeRng) -> PassMaxima {
        let costs = self.route_costs(batch);
        let pairs = rng.random_pairs(batch.len());

        let mut maxima = PassMaxima {
            solution: f64::NEG_INFINITY,
            social: f64::NEG_INFINITY,
        };

        for (i, j) in pairs {
            let (social_i, social_j) =
                self.game
                    .play(batch[i].strategy, batch[j].strategy, rng.rng());

            batch[i].update_fitness_parts(costs[i], social_i);
            batch[j].update_fitness_parts(costs[j], social_j);

            maxima.solution = maxima.solution.max(costs[i]).max(costs[j]);
            maxima.social = maxima.social.max(social_i).max(social_j);
        }

        for individual in batch.iter_mut() {
            individual.update_total_fitness(
                maxima.solution,
                maxima.social,
                self.w_solution,
                self.w_social,
            );
        }

        maxima
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn route_costs(&self, batch: &[Individual]) -> Vec<f64> {
        let vrp = self.vrp;
        batch
            .par_iter()
            .map(|individual| vrp.total_distance(&individual.route))
            .collect()
    }

    #[cfg(target_arch = "wasm32")]
    fn route_costs(&self, batch: &[Individual]) -> Vec<f64> {
        batch
            .iter()
            .map(|individual| self.vrp.total_distance(&individual.route))
            .collect()
    }
}
