//! Candidate solutions: a route permutation plus a cooperation strategy.

use crate::schema::LocationId;

/// Raw fitness components from one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessParts {
    /// Total route distance (minimized).
    pub solution: f64,
    /// Game payoff (maximized).
    pub social: f64,
}

/// A candidate individual in the population.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// Visiting order of every customer, depot excluded.
    pub route: Vec<LocationId>,
    /// Probability of cooperating in the social game, within [0, 1].
    pub strategy: f64,
    parts: Option<FitnessParts>,
    total: Option<f64>,
}

impl Individual {
    /// Create an unevaluated individual.
    pub fn new(route: Vec<LocationId>, strategy: f64) -> Self {
        Self {
            route,
            strategy: strategy.clamp(0.0, 1.0),
            parts: None,
            total: None,
        }
    }

    /// Route cost from the last evaluation.
    #[inline]
    pub fn solution_fitness(&self) -> Option<f64> {
        self.parts.map(|p| p.solution)
    }

    /// Game payoff from the last evaluation.
    #[inline]
    pub fn social_fitness(&self) -> Option<f64> {
        self.parts.map(|p| p.social)
    }

    /// Combined selection criterion from the last evaluation.
    #[inline]
    pub fn total_fitness(&self) -> Option<f64> {
        self.total
    }

    /// Whether an evaluation pass has scored this individual.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.total.is_some()
    }

    /// Overwrite both raw components; the total becomes stale until recomputed.
    pub fn update_fitness_parts(&mut self, solution: f64, social: f64) {
        self.parts = Some(FitnessParts { solution, social });
        self.total = None;
    }

    /// Combine the raw components using this pass's maxima.
    ///
    /// With a positive social weight both terms are normalized against the pass-wide
    /// maximum; a non-positive maximum yields a zero ratio. Otherwise the total is the
    /// raw route cost. Does nothing if the parts were never set.
    pub fn update_total_fitness(
        &mut self,
        max_solution: f64,
        max_social: f64,
        w_solution: f64,
        w_social: f64,
    ) {
        let Some(parts) = self.parts else {
            return;
        };

        self.total = Some(if w_social > 0.0 {
            w_solution * ratio(parts.solution, max_solution)
                - w_social * ratio(parts.social, max_social)
        } else {
            parts.solution
        });
    }
}

#[inline]
fn ratio(value: f64, max: f64) -> f64 {
    if max > 0.0 { value / max } else { 0.0 }
}

/// Ordering key where unevaluated individuals rank last.
#[inline]
pub(crate) fn or_worst(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::INFINITY)
}
