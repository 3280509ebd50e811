//! Generational search loop for the genetic algorithm with social interaction.

use std::time::Instant;

use crate::compute::{Game, Vrp};
use crate::schema::{
    ConfigError, EvolutionHistory, GasiConfig, GenerationProgress, LocationId, SearchResult,
    SearchStats,
};

use super::chromosome::ChromosomeRng;
use super::fitness::FitnessEvaluator;
use super::individual::{Individual, or_worst};
use super::selection::{fittest, replace, tournament_select};

/// Generations between debug log lines.
const LOG_INTERVAL: usize = 100;

/// Evolution engine that runs the search.
pub struct EvolutionEngine<'a> {
    vrp: &'a Vrp,
    config: GasiConfig,
    game: Game,
    rng: ChromosomeRng,
    customers: Vec<LocationId>,
    population: Vec<Individual>,
    history: EvolutionHistory,
    generation: usize,
    best_distance: f64,
    evaluations: u64,
    offspring_produced: u64,
    offspring_accepted: u64,
}

impl<'a> EvolutionEngine<'a> {
    /// Create a new evolution engine. The configuration is validated here so no
    /// generation ever runs with invalid parameters.
    pub fn new(vrp: &'a Vrp, config: GasiConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.random_seed.unwrap_or_else(rand::random);
        log::debug!("Search seeded with {}", seed);

        Ok(Self {
            vrp,
            game: Game::new(config.game),
            rng: ChromosomeRng::new(seed),
            customers: vrp.customer_ids(),
            config,
            population: Vec::new(),
            history: EvolutionHistory::default(),
            generation: 0,
            best_distance: f64::INFINITY,
            evaluations: 0,
            offspring_produced: 0,
            offspring_accepted: 0,
        })
    }

    /// Current population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Initialize the population.
    pub fn initialize(&mut self) {
        self.population = self
            .rng
            .random_population(&self.customers, self.config.population_size);
        self.generation = 0;
        self.best_distance = f64::INFINITY;
        self.history = EvolutionHistory::default();
        self.evaluations = 0;
        self.offspring_produced = 0;
        self.offspring_accepted = 0;
    }

    /// Evaluate all individuals in the population.
    fn evaluate_population(&mut self) {
        let evaluator = FitnessEvaluator::new(
            self.vrp,
            &self.game,
            self.config.solution_weight(),
            self.config.social_weight,
        );
        evaluator.evaluate(&mut self.population, &mut self.rng);
        self.evaluations += self.population.len() as u64;
    }

    /// Evaluate a batch of offspring on its own, with its own maxima.
    fn evaluate_offspring(&mut self, offspring: &mut [Individual]) {
        let evaluator = FitnessEvaluator::new(
            self.vrp,
            &self.game,
            self.config.solution_weight(),
            self.config.social_weight,
        );
        evaluator.evaluate(offspring, &mut self.rng);
        self.evaluations += offspring.len() as u64;
    }

    /// Breed up to one offspring pair per selection round.
    fn reproduce(&mut self) -> Vec<Individual> {
        let rounds = self.config.population_size / 2;
        let mut offspring = Vec::with_capacity(self.config.population_size);

        for _ in 0..rounds {
            let idx1 = tournament_select(&self.population, &mut self.rng);
            let idx2 = tournament_select(&self.population, &mut self.rng);

            let parent1 = &self.population[idx1];
            let parent2 = &self.population[idx2];

            if !self.rng.chance(self.config.crossover_rate) || parent1.route == parent2.route {
                continue;
            }

            let (mut child1, mut child2) =
                self.rng
                    .reproduce(parent1, parent2, self.config.strategy_inheritance);
            self.rng.mutate(&mut child1, self.config.mutation_rate);
            self.rng.mutate(&mut child2, self.config.mutation_rate);

            offspring.push(child1);
            offspring.push(child2);
        }

        offspring
    }

    /// Run a single generation step.
    fn step_generation(&mut self) -> GenerationProgress {
        self.evaluate_population();

        let mut offspring = self.reproduce();
        let produced = offspring.len();
        self.evaluate_offspring(&mut offspring);

        let accepted = replace(&mut self.population, offspring, &mut self.rng);
        self.offspring_produced += produced as u64;
        self.offspring_accepted += accepted as u64;
        self.generation += 1;

        self.record_progress(produced, accepted)
    }

    fn record_progress(&mut self, produced: usize, accepted: usize) -> GenerationProgress {
        let size = self.population.len().max(1) as f64;

        let generation_best = fittest(&self.population)
            .map(|i| or_worst(i.solution_fitness()))
            .unwrap_or(f64::INFINITY);
        self.best_distance = self.best_distance.min(generation_best);

        let mean_strategy = self.population.iter().map(|i| i.strategy).sum::<f64>() / size;
        let mean_total_fitness = self
            .population
            .iter()
            .filter_map(|i| i.total_fitness())
            .sum::<f64>()
            / size;

        self.history.best_distance.push(generation_best);
        self.history.mean_strategy.push(mean_strategy);

        if self.generation % LOG_INTERVAL == 0 {
            log::debug!(
                "Generation {}: best distance {:.3}, mean strategy {:.3}, accepted {}/{}",
                self.generation,
                generation_best,
                mean_strategy,
                accepted,
                produced
            );
        }

        GenerationProgress {
            generation: self.generation,
            total_generations: self.config.generations,
            generation_best_distance: generation_best,
            best_distance: self.best_distance,
            mean_total_fitness,
            mean_strategy,
            offspring_produced: produced,
            offspring_accepted: accepted,
        }
    }

    /// Run evolution with progress callback.
    pub fn run_with_callback<F>(&mut self, callback: F) -> SearchResult
    where
        F: Fn(&GenerationProgress),
    {
        let start_time = Instant::now();

        log::info!(
            "Starting search: {} customers, population {}, {} generations, game {:?}",
            self.customers.len(),
            self.config.population_size,
            self.config.generations,
            self.config.game
        );

        self.initialize();

        while self.generation < self.config.generations {
            let progress = self.step_generation();
            callback(&progress);
        }

        // A run without generations never scored anyone.
        if self.population.iter().any(|i| !i.is_evaluated()) {
            self.evaluate_population();
        }

        let result = self.report(start_time.elapsed().as_secs_f64());
        log::info!(
            "Search finished after {} generations: best distance {:.3} over {} routes",
            self.generation,
            result.best_distance,
            result.routes.len()
        );
        result
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> SearchResult {
        self.run_with_callback(|_| {})
    }

    fn report(&self, elapsed_seconds: f64) -> SearchResult {
        let (best_distance, routes) = match fittest(&self.population) {
            Some(best) => (
                or_worst(best.solution_fitness()),
                self.vrp.decode_routes(&best.route).collect(),
            ),
            None => (f64::INFINITY, Vec::new()),
        };

        SearchResult {
            best_distance,
            routes,
            strategies: self.population.iter().map(|i| i.strategy).collect(),
            stats: SearchStats {
                generations: self.generation,
                total_evaluations: self.evaluations,
                offspring_produced: self.offspring_produced,
                offspring_accepted: self.offspring_accepted,
                elapsed_seconds,
            },
            history: self.history.clone(),
        }
    }
}
