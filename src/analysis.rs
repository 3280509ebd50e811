//! Post-run analysis: strategy distributions and optimality gaps.

use serde::{Deserialize, Serialize};

/// Summary of the final strategy values of a population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Counts over equal-width bins spanning [0, 1]; 1.0 falls in the last bin.
    pub histogram: Vec<usize>,
}

impl StrategyDistribution {
    /// Summarize strategy values into `bins` histogram bins.
    ///
    /// Returns `None` for an empty slice or zero bins.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        let mut histogram = vec![0; bins];
        for &v in values {
            let bin = ((v.clamp(0.0, 1.0) * bins as f64) as usize).min(bins - 1);
            histogram[bin] += 1;
        }

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            histogram,
        })
    }

    /// Share of the population at or above 0.5 (more likely to cooperate than not).
    pub fn cooperative_share(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().filter(|&&v| v >= 0.5).count() as f64 / values.len() as f64
    }
}

/// Relative gap between a found cost and the best known cost.
pub fn gap_percentage(actual: f64, best_known: f64) -> f64 {
    (actual - best_known) / best_known
}
