//! Chromosome manipulation utilities for the evolutionary search.
//!
//! Provides random generation, order crossover, inversion and Gaussian strategy
//! mutation, plus the random pairing used by fitness evaluation.

use std::collections::HashSet;

use rand::prelude::*;
use rand::seq::index;

use crate::schema::{LocationId, StrategyInheritance};

use super::individual::Individual;

/// Standard deviation of the Gaussian strategy perturbation.
pub const STRATEGY_SIGMA: f64 = 0.3;

/// Random number generator wrapper for chromosome operations.
pub struct ChromosomeRng {
    rng: StdRng,
}

impl ChromosomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Underlying generator, for draws that are not chromosome operations.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Bernoulli draw: true with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.r#gen::<f64>() < p
    }

    /// Random individual: shuffled customers and a uniform strategy.
    pub fn random_individual(&mut self, customers: &[LocationId]) -> Individual {
        let mut route = customers.to_vec();
        route.shuffle(&mut self.rng);
        let strategy = self.rng.r#gen::<f64>();
        Individual::new(route, strategy)
    }

    /// Random population of the given size.
    pub fn random_population(&mut self, customers: &[LocationId], size: usize) -> Vec<Individual> {
        (0..size)
            .map(|_| self.random_individual(customers))
            .collect()
    }

    /// `count` distinct positions in `0..len`, ascending.
    ///
    /// Returns `None` when the chromosome is shorter than `count`.
    pub fn cut_points(&mut self, len: usize, count: usize) -> Option<Vec<usize>> {
        if len < count {
            return None;
        }
        let mut points = index::sample(&mut self.rng, len, count).into_vec();
        points.sort_unstable();
        Some(points)
    }

    /// Gaussian mutation of a strategy value, clamped into [0, 1].
    pub fn gaussian_perturb(&mut self, strategy: f64) -> f64 {
        let noise: f64 = self.rng.sample(rand_distr::StandardNormal);
        perturb_strategy(strategy, noise * STRATEGY_SIGMA)
    }

    /// Mutate with probability `rate`: either invert part of the route or perturb
    /// the strategy, never both.
    pub fn mutate(&mut self, individual: &mut Individual, rate: f64) {
        if self.rng.r#gen::<f64>() > rate {
            return;
        }

        if self.rng.gen_bool(0.5) {
            if let Some(cp) = self.cut_points(individual.route.len(), 2) {
                invert(&mut individual.route, cp[0], cp[1]);
            }
        } else {
            individual.strategy = self.gaussian_perturb(individual.strategy);
        }
    }

    /// Produce two unevaluated children from two parents.
    pub fn reproduce(
        &mut self,
        parent1: &Individual,
        parent2: &Individual,
        inheritance: StrategyInheritance,
    ) -> (Individual, Individual) {
        let (route1, route2) = match self.cut_points(parent1.route.len(), 2) {
            Some(cp) => order_crossover(&parent1.route, &parent2.route, cp[0], cp[1]),
            None => (parent1.route.clone(), parent2.route.clone()),
        };

        let mut strategies = [parent1.strategy, parent2.strategy];
        strategies.shuffle(&mut self.rng);

        let first = match inheritance {
            StrategyInheritance::Shuffled => strategies[0],
            StrategyInheritance::FirstParentKept => parent1.strategy,
        };

        (
            Individual::new(route1, first),
            Individual::new(route2, strategies[1]),
        )
    }

    /// Non-overlapping random pairs over `0..len`.
    ///
    /// Panics if `len` is odd.
    pub fn random_pairs(&mut self, len: usize) -> Vec<(usize, usize)> {
        assert!(len % 2 == 0, "random pairing needs an even count, got {len}");
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        indices.chunks_exact(2).map(|c| (c[0], c[1])).collect()
    }
}

/// Add noise to a strategy value and clamp it into [0, 1].
#[inline]
pub fn perturb_strategy(strategy: f64, noise: f64) -> f64 {
    (strategy + noise).clamp(0.0, 1.0)
}

/// Order crossover (OX) of two equal-length permutations with `cp1 < cp2`.
///
/// Each child keeps its own parent's `[cp1, cp2)` segment; the other slots are
/// filled with the other parent's remaining genes read circularly from `cp2`.
pub fn order_crossover(
    a: &[LocationId],
    b: &[LocationId],
    cp1: usize,
    cp2: usize,
) -> (Vec<LocationId>, Vec<LocationId>) {
    (ox_child(a, b, cp1, cp2), ox_child(b, a, cp1, cp2))
}

fn ox_child(keep: &[LocationId], fill: &[LocationId], cp1: usize, cp2: usize) -> Vec<LocationId> {
    let n = keep.len();
    let middle = &keep[cp1..cp2];
    let in_middle: HashSet<LocationId> = middle.iter().copied().collect();

    let ends: Vec<LocationId> = (cp2..n)
        .chain(0..cp2)
        .map(|i| fill[i])
        .filter(|gene| !in_middle.contains(gene))
        .collect();

    let split = n - cp2;
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&ends[split..]);
    child.extend_from_slice(middle);
    child.extend_from_slice(&ends[..split]);
    child
}

/// Reverse `[cp1, cp2)` in place.
#[inline]
pub fn invert(chromosome: &mut [LocationId], cp1: usize, cp2: usize) {
    chromosome[cp1..cp2].reverse();
}
