//! Problem instance types for capacitated vehicle routing.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Stable identifier of a location (depot or customer).
pub type LocationId = u32;

/// A single location: the depot or a customer with a demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier, unique within an instance.
    pub id: LocationId,
    /// Planar coordinates.
    pub coords: (f64, f64),
    /// Requested quantity (0 for the depot).
    #[serde(default)]
    pub demand: f64,
    /// Whether this location is the depot.
    #[serde(default)]
    pub is_depot: bool,
}

impl Location {
    /// Create the depot at the given coordinates.
    pub fn depot(id: LocationId, coords: (f64, f64)) -> Self {
        Self {
            id,
            coords,
            demand: 0.0,
            is_depot: true,
        }
    }

    /// Create a customer with a demand.
    pub fn customer(id: LocationId, coords: (f64, f64), demand: f64) -> Self {
        Self {
            id,
            coords,
            demand,
            is_depot: false,
        }
    }

    /// Euclidean distance to another location.
    #[inline]
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.coords.0 - other.coords.0;
        let dy = self.coords.1 - other.coords.1;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Parsed problem definition: one shared vehicle capacity and a set of locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDefinition {
    /// Capacity of every vehicle.
    pub vehicle_capacity: f64,
    /// All locations, depot included.
    pub locations: Vec<Location>,
}

impl Default for ProblemDefinition {
    fn default() -> Self {
        Self {
            vehicle_capacity: 8.0,
            locations: vec![
                Location::depot(0, (0.0, 0.0)),
                Location::customer(1, (0.0, 3.0), 4.0),
                Location::customer(2, (4.0, 3.0), 4.0),
                Location::customer(3, (4.0, 0.0), 4.0),
                Location::customer(4, (-2.0, -2.0), 2.0),
            ],
        }
    }
}

impl ProblemDefinition {
    /// Parse a definition from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, InstanceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load and validate a definition from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, InstanceError> {
        let json = fs::read_to_string(path)?;
        let definition = Self::from_json_str(&json)?;
        definition.validate()?;
        log::info!(
            "Loaded instance: {} customers, vehicle capacity {}",
            definition.customer_count(),
            definition.vehicle_capacity
        );
        Ok(definition)
    }

    /// Number of non-depot locations.
    pub fn customer_count(&self) -> usize {
        self.locations.iter().filter(|l| !l.is_depot).count()
    }

    /// Validate the instance can be routed.
    pub fn validate(&self) -> Result<(), ProblemError> {
        if !self.vehicle_capacity.is_finite() || self.vehicle_capacity <= 0.0 {
            return Err(ProblemError::InvalidCapacity(self.vehicle_capacity));
        }

        let mut seen = HashSet::with_capacity(self.locations.len());
        let mut depots = 0;
        for location in &self.locations {
            if !seen.insert(location.id) {
                return Err(ProblemError::DuplicateLocation(location.id));
            }
            if !location.coords.0.is_finite() || !location.coords.1.is_finite() {
                return Err(ProblemError::InvalidCoordinates(location.id));
            }
            if !location.demand.is_finite() || location.demand < 0.0 {
                return Err(ProblemError::InvalidDemand {
                    id: location.id,
                    demand: location.demand,
                });
            }
            if location.is_depot {
                depots += 1;
            }
        }

        match depots {
            0 => return Err(ProblemError::MissingDepot),
            1 => {}
            n => return Err(ProblemError::MultipleDepots(n)),
        }

        if self.customer_count() == 0 {
            return Err(ProblemError::NoCustomers);
        }

        Ok(())
    }
}

/// Problem instance validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("Vehicle capacity must be positive and finite, got {0}")]
    InvalidCapacity(f64),
    #[error("Instance has no depot")]
    MissingDepot,
    #[error("Instance must have exactly one depot, found {0}")]
    MultipleDepots(usize),
    #[error("Instance has no locations besides the depot")]
    NoCustomers,
    #[error("Location {0} appears more than once")]
    DuplicateLocation(LocationId),
    #[error("Location {0} has non-finite coordinates")]
    InvalidCoordinates(LocationId),
    #[error("Location {id} has invalid demand {demand}")]
    InvalidDemand { id: LocationId, demand: f64 },
}

/// Errors raised while loading an instance file.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("Failed to read instance: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse instance: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid instance: {0}")]
    Invalid(#[from] ProblemError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_definition_valid() {
        assert!(ProblemDefinition::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_depot() {
        let mut definition = ProblemDefinition::default();
        definition.locations.retain(|l| !l.is_depot);
        assert!(matches!(
            definition.validate(),
            Err(ProblemError::MissingDepot)
        ));
    }

    #[test]
    fn test_rejects_second_depot() {
        let mut definition = ProblemDefinition::default();
        definition.locations.push(Location::depot(99, (1.0, 1.0)));
        assert!(matches!(
            definition.validate(),
            Err(ProblemError::MultipleDepots(2))
        ));
    }

    #[test]
    fn test_rejects_depot_only() {
        let definition = ProblemDefinition {
            vehicle_capacity: 10.0,
            locations: vec![Location::depot(0, (0.0, 0.0))],
        };
        assert!(matches!(definition.validate(), Err(ProblemError::NoCustomers)));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let definition = ProblemDefinition {
            vehicle_capacity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            definition.validate(),
            Err(ProblemError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut definition = ProblemDefinition::default();
        definition
            .locations
            .push(Location::customer(1, (9.0, 9.0), 1.0));
        assert!(matches!(
            definition.validate(),
            Err(ProblemError::DuplicateLocation(1))
        ));
    }

    #[test]
    fn test_rejects_negative_demand() {
        let mut definition = ProblemDefinition::default();
        definition.locations[1].demand = -1.0;
        assert!(matches!(
            definition.validate(),
            Err(ProblemError::InvalidDemand { id: 1, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let definition = ProblemDefinition::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&definition).unwrap()).unwrap();

        let loaded = ProblemDefinition::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.locations, definition.locations);
        assert_eq!(loaded.customer_count(), 4);
    }

    #[test]
    fn test_load_rejects_invalid_instance() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"vehicle_capacity": 5.0, "locations": [{{"id": 0, "coords": [0.0, 0.0], "is_depot": true}}]}}"#
        )
        .unwrap();

        let result = ProblemDefinition::from_json_file(file.path());
        assert!(matches!(
            result,
            Err(InstanceError::Invalid(ProblemError::NoCustomers))
        ));
    }
}
