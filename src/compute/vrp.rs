//! Capacitated vehicle routing problem model.
//!
//! Holds the read-only instance data (locations, capacity, distance matrix) and
//! decodes flat permutations of customer identifiers into vehicle trips.

use std::collections::HashMap;

use crate::schema::{Location, LocationId, ProblemDefinition, ProblemError, Route};

/// Read-only problem model shared by every evaluation in a run.
#[derive(Debug, Clone)]
pub struct Vrp {
    /// Locations sorted by identifier.
    locations: Vec<Location>,
    /// Identifier to matrix row.
    index: HashMap<LocationId, usize>,
    depot_id: LocationId,
    capacity: f64,
    /// Row-major n x n Euclidean distances.
    distances: Vec<f64>,
}

impl Vrp {
    /// Validate a problem definition and precompute its distance matrix.
    pub fn new(definition: &ProblemDefinition) -> Result<Self, ProblemError> {
        definition.validate()?;

        let mut locations = definition.locations.clone();
        locations.sort_by_key(|l| l.id);

        let index: HashMap<LocationId, usize> = locations
            .iter()
            .enumerate()
            .map(|(i, l)| (l.id, i))
            .collect();

        let depot_id = locations
            .iter()
            .find(|l| l.is_depot)
            .map(|l| l.id)
            .ok_or(ProblemError::MissingDepot)?;

        let capacity = definition.vehicle_capacity;
        for location in locations.iter().filter(|l| l.demand > capacity) {
            log::warn!(
                "Location {} demand {} exceeds vehicle capacity {}; it will always ride alone",
                location.id,
                location.demand,
                capacity
            );
        }

        let n = locations.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self {
            locations,
            index,
            depot_id,
            capacity,
            distances,
        })
    }

    /// Identifier of the depot.
    #[inline]
    pub fn depot_id(&self) -> LocationId {
        self.depot_id
    }

    /// Vehicle capacity.
    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of locations, depot included.
    #[inline]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Look up a location by identifier.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.index.get(&id).map(|&i| &self.locations[i])
    }

    /// Identifiers of all non-depot locations, ascending.
    pub fn customer_ids(&self) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|l| !l.is_depot)
            .map(|l| l.id)
            .collect()
    }

    /// Distance between two locations.
    ///
    /// Panics if either identifier is not part of the instance.
    #[inline]
    pub fn distance(&self, from: LocationId, to: LocationId) -> f64 {
        let n = self.locations.len();
        self.distances[self.index[&from] * n + self.index[&to]]
    }

    #[inline]
    fn demand(&self, id: LocationId) -> f64 {
        self.locations[self.index[&id]].demand
    }

    /// Decode a permutation of customers into vehicle trips.
    ///
    /// Greedy first-fit: customers are appended to the current trip while the load
    /// fits, otherwise the trip returns to the depot and a new one starts. A customer
    /// whose demand alone exceeds the capacity still gets its own (overflowing) trip.
    pub fn decode_routes<'a>(&'a self, chromosome: &'a [LocationId]) -> RouteDecoder<'a> {
        RouteDecoder {
            vrp: self,
            remaining: chromosome.iter(),
            current: Some(vec![self.depot_id]),
            load: 0.0,
        }
    }

    /// Length of a single route.
    pub fn route_distance(&self, route: &[LocationId]) -> f64 {
        route.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }

    /// Total distance of every trip decoded from a chromosome.
    pub fn total_distance(&self, chromosome: &[LocationId]) -> f64 {
        self.decode_routes(chromosome)
            .map(|route| self.route_distance(&route))
            .sum()
    }
}

/// Lazy decoder yielding one trip at a time. Consumed once.
pub struct RouteDecoder<'a> {
    vrp: &'a Vrp,
    remaining: std::slice::Iter<'a, LocationId>,
    current: Option<Route>,
    load: f64,
}

impl Iterator for RouteDecoder<'_> {
    type Item = Route;

    fn next(&mut self) -> Option<Route> {
        let depot = self.vrp.depot_id;

        for &id in self.remaining.by_ref() {
            let demand = self.vrp.demand(id);
            let current = self.current.as_mut()?;

            if self.load + demand <= self.vrp.capacity {
                current.push(id);
                self.load += demand;
            } else {
                let mut closed = std::mem::replace(current, vec![depot, id]);
                closed.push(depot);
                self.load = demand;
                return Some(closed);
            }
        }

        let mut last = self.current.take()?;
        last.push(depot);
        Some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Depot 0 plus customers 1..=3 with demand 4 each.
    fn three_customers(capacity: f64) -> Vrp {
        let definition = ProblemDefinition {
            vehicle_capacity: capacity,
            locations: vec![
                Location::customer(2, (4.0, 3.0), 4.0),
                Location::depot(0, (0.0, 0.0)),
                Location::customer(1, (0.0, 3.0), 4.0),
                Location::customer(3, (4.0, 0.0), 4.0),
            ],
        };
        Vrp::new(&definition).unwrap()
    }

    #[test]
    fn test_decode_splits_on_capacity() {
        let vrp = three_customers(8.0);
        let routes: Vec<Route> = vrp.decode_routes(&[1, 2, 3]).collect();
        assert_eq!(routes, vec![vec![0, 1, 2, 0], vec![0, 3, 0]]);
    }

    #[test]
    fn test_decode_single_route_when_everything_fits() {
        let vrp = three_customers(12.0);
        let routes: Vec<Route> = vrp.decode_routes(&[1, 2, 3]).collect();
        assert_eq!(routes, vec![vec![0, 1, 2, 3, 0]]);
    }

    #[test]
    fn test_decode_empty_chromosome() {
        let vrp = three_customers(8.0);
        let routes: Vec<Route> = vrp.decode_routes(&[]).collect();
        assert_eq!(routes, vec![vec![0, 0]]);
    }

    #[test]
    fn test_decoder_is_finite_and_not_restartable() {
        let vrp = three_customers(4.0);
        let mut decoder = vrp.decode_routes(&[3, 1, 2]);
        assert_eq!(decoder.next(), Some(vec![0, 3, 0]));
        assert_eq!(decoder.next(), Some(vec![0, 1, 0]));
        assert_eq!(decoder.next(), Some(vec![0, 2, 0]));
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.next(), None);
    }

    #[test]
    fn test_oversized_demand_rides_alone() {
        let definition = ProblemDefinition {
            vehicle_capacity: 5.0,
            locations: vec![
                Location::depot(0, (0.0, 0.0)),
                Location::customer(1, (1.0, 0.0), 2.0),
                Location::customer(2, (2.0, 0.0), 9.0),
                Location::customer(3, (3.0, 0.0), 2.0),
            ],
        };
        let vrp = Vrp::new(&definition).unwrap();
        let routes: Vec<Route> = vrp.decode_routes(&[1, 2, 3]).collect();
        assert_eq!(routes, vec![vec![0, 1, 0], vec![0, 2, 0], vec![0, 3, 0]]);
    }

    #[test]
    fn test_distance_matrix_symmetric() {
        let vrp = three_customers(8.0);
        let ids = [0, 1, 2, 3];
        for &a in &ids {
            assert_eq!(vrp.distance(a, a), 0.0);
            for &b in &ids {
                assert_eq!(vrp.distance(a, b), vrp.distance(b, a));
                assert!(vrp.distance(a, b) >= 0.0);
            }
        }
        assert!((vrp.distance(0, 2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_distance() {
        let vrp = three_customers(8.0);
        // [0,1,2,0] = 3 + 4 + 5, [0,3,0] = 4 + 4
        assert!((vrp.total_distance(&[1, 2, 3]) - 20.0).abs() < 1e-12);
        // [0,1,2,3,0] = 3 + 4 + 3 + 4
        let vrp = three_customers(12.0);
        assert!((vrp.total_distance(&[1, 2, 3]) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_customer_ids_exclude_depot() {
        let vrp = three_customers(8.0);
        assert_eq!(vrp.customer_ids(), vec![1, 2, 3]);
        assert_eq!(vrp.depot_id(), 0);
        assert_eq!(vrp.location_count(), 4);
        assert_eq!(vrp.location(2).map(|l| l.demand), Some(4.0));
        assert!(vrp.location(7).is_none());
    }

    #[test]
    fn test_rejects_invalid_definition() {
        let definition = ProblemDefinition {
            vehicle_capacity: -1.0,
            ..Default::default()
        };
        assert!(Vrp::new(&definition).is_err());
    }
}
