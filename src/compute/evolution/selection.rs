//! Tournament selection and elitist replacement.

use rand::Rng;
use rand::seq::index;

use super::chromosome::ChromosomeRng;
use super::individual::{Individual, or_worst};

/// Participants drawn per tournament.
pub const TOURNAMENT_SIZE: usize = 4;

/// Share of the population protected from replacement, rounded down.
pub const ELITE_DIVISOR: usize = 10;

/// Index of the lowest total fitness among `TOURNAMENT_SIZE` distinct participants.
///
/// Ties go to the first participant drawn. Panics if the population is smaller than
/// the tournament.
pub fn tournament_select(population: &[Individual], rng: &mut ChromosomeRng) -> usize {
    let participants = index::sample(rng.rng(), population.len(), TOURNAMENT_SIZE);

    let mut best_idx = participants.index(0);
    let mut best_fitness = or_worst(population[best_idx].total_fitness());
    for idx in participants.iter().skip(1) {
        let fitness = or_worst(population[idx].total_fitness());
        if fitness < best_fitness {
            best_fitness = fitness;
            best_idx = idx;
        }
    }
    best_idx
}

/// Number of protected elite slots for a population.
#[inline]
pub fn elite_count(population_size: usize) -> usize {
    population_size / ELITE_DIVISOR
}

/// Merge offspring into the population, preserving its size.
///
/// The population is sorted by route cost and its elite block left untouched. Each
/// child challenges one random non-elite slot and takes it only with a strictly lower
/// total fitness. Returns how many children were accepted.
pub fn replace(
    population: &mut [Individual],
    offspring: Vec<Individual>,
    rng: &mut ChromosomeRng,
) -> usize {
    sort_by_solution(population);

    let elite = elite_count(population.len());
    let non_elite = population.len() - elite;
    if non_elite == 0 {
        return 0;
    }

    let mut accepted = 0;
    for child in offspring {
        let slot = elite + rng.rng().gen_range(0..non_elite);
        if or_worst(child.total_fitness()) < or_worst(population[slot].total_fitness()) {
            population[slot] = child;
            accepted += 1;
        }
    }
    accepted
}

/// Stable ascending sort by route cost, unevaluated last.
pub fn sort_by_solution(population: &mut [Individual]) {
    population.sort_by(|a, b| {
        or_worst(a.solution_fitness()).total_cmp(&or_worst(b.solution_fitness()))
    });
}

/// Individual with the lowest route cost.
pub fn fittest(population: &[Individual]) -> Option<&Individual> {
    population.iter().min_by(|a, b| {
        or_worst(a.solution_fitness()).total_cmp(&or_worst(b.solution_fitness()))
    })
}
