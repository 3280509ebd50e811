//! Progress, result and export types for a GASI search run.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LocationId;

/// A vehicle trip: location identifiers starting and ending at the depot.
pub type Route = Vec<LocationId>;

/// Progress update emitted after each generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationProgress {
    /// Generation just completed (1-based).
    pub generation: usize,
    /// Total generations planned.
    pub total_generations: usize,
    /// Lowest route cost in the current population.
    pub generation_best_distance: f64,
    /// Lowest route cost seen so far in the run.
    pub best_distance: f64,
    /// Mean total fitness of the current population.
    pub mean_total_fitness: f64,
    /// Mean strategy value of the current population.
    pub mean_strategy: f64,
    /// Offspring produced this generation.
    pub offspring_produced: usize,
    /// Offspring that replaced a non-elite individual this generation.
    pub offspring_accepted: usize,
}

/// Per-generation history for analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EvolutionHistory {
    /// Lowest route cost per generation.
    pub best_distance: Vec<f64>,
    /// Mean strategy value per generation.
    pub mean_strategy: Vec<f64>,
}

/// Statistics from a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Generations run.
    pub generations: usize,
    /// Individuals evaluated (population and offspring passes).
    pub total_evaluations: u64,
    /// Offspring produced over the whole run.
    pub offspring_produced: u64,
    /// Offspring accepted into the population over the whole run.
    pub offspring_accepted: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total distance of the best individual.
    pub best_distance: f64,
    /// Decoded routes of the best individual.
    pub routes: Vec<Route>,
    /// Final strategy value of every individual.
    pub strategies: Vec<f64>,
    /// Statistics from the run.
    pub stats: SearchStats,
    /// Full history for analysis.
    pub history: EvolutionHistory,
}

impl SearchResult {
    /// Build the export document for this result.
    pub fn to_export(&self, input: impl Into<String>) -> SolutionExport {
        SolutionExport {
            input: input.into(),
            total_distance: self.best_distance,
            routes: self
                .routes
                .iter()
                .enumerate()
                .map(|(i, stops)| RouteExport {
                    name: format!("route {}", i + 1),
                    stops: stops.clone(),
                })
                .collect(),
            strategies: self.strategies.clone(),
        }
    }
}

/// Exported solution document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionExport {
    /// Name of the instance the solution belongs to.
    pub input: String,
    /// Total route distance.
    #[serde(rename = "total distance")]
    pub total_distance: f64,
    /// Named routes.
    pub routes: Vec<RouteExport>,
    /// Final strategy distribution.
    pub strategies: Vec<f64>,
}

/// A named route inside an export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteExport {
    pub name: String,
    pub stops: Route,
}

impl SolutionExport {
    /// Write the export as pretty JSON.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SearchResult {
        SearchResult {
            best_distance: 42.5,
            routes: vec![vec![0, 3, 1, 0], vec![0, 2, 0]],
            strategies: vec![0.1, 0.9],
            stats: SearchStats {
                generations: 3,
                total_evaluations: 10,
                offspring_produced: 4,
                offspring_accepted: 1,
                elapsed_seconds: 0.01,
            },
            history: EvolutionHistory::default(),
        }
    }

    #[test]
    fn test_export_names_routes_in_order() {
        let export = sample_result().to_export("A-n32-k05");
        assert_eq!(export.routes.len(), 2);
        assert_eq!(export.routes[0].name, "route 1");
        assert_eq!(export.routes[1].name, "route 2");
        assert_eq!(export.routes[1].stops, vec![0, 2, 0]);
        assert_eq!(export.input, "A-n32-k05");
    }

    #[test]
    fn test_export_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.json");
        sample_result().to_export("demo").to_json_file(&path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total distance"], 42.5);
        assert_eq!(value["routes"][0]["stops"][1], 3);
    }
}
