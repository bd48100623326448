//! Flight aggregation: per-pair routes and the airline-qualification
//! predicate.

use std::collections::{BTreeMap, HashMap, HashSet};

use ag_core::{Airport, AirportId};

use crate::registry::AirportRegistry;
use crate::schema::Dataset;
use crate::validate::ValidationError;

/// Flight count for one directed airport pair, as recorded in the source
/// data. Both directions of the same physical route appear as separate
/// entries; merging them is the graph builder's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub a1: AirportId,
    pub a2: AirportId,
    pub flights: u32,
}

/// Aggregated view over a dataset's flight records.
///
/// Resolves every record against the airport registry up front; a record
/// referencing an airport the registry does not know is a constraint
/// failure of this provider.
#[derive(Debug, Clone)]
pub struct RouteSource {
    routes: Vec<Route>,
    airlines_by_airport: HashMap<AirportId, HashSet<String>>,
}

impl RouteSource {
    pub fn from_dataset(
        dataset: &Dataset,
        registry: &AirportRegistry,
    ) -> Result<Self, ValidationError> {
        // BTreeMap keyed by the directed pair keeps the route list sorted
        // and deterministic.
        let mut counts: BTreeMap<(AirportId, AirportId), u32> = BTreeMap::new();
        let mut airlines: HashMap<AirportId, HashSet<String>> = HashMap::new();

        for (i, flight) in dataset.flights.iter().enumerate() {
            let origin = AirportId::new(flight.origin);
            let destination = AirportId::new(flight.destination);
            if !registry.contains(origin) {
                return Err(ValidationError::UnknownAirport {
                    id: flight.origin,
                    context: format!("flights[{i}] origin"),
                });
            }
            if !registry.contains(destination) {
                return Err(ValidationError::UnknownAirport {
                    id: flight.destination,
                    context: format!("flights[{i}] destination"),
                });
            }

            *counts.entry((origin, destination)).or_insert(0) += flight.count;
            airlines
                .entry(origin)
                .or_default()
                .insert(flight.airline.clone());
            airlines
                .entry(destination)
                .or_default()
                .insert(flight.airline.clone());
        }

        let routes = counts
            .into_iter()
            .map(|((a1, a2), flights)| Route { a1, a2, flights })
            .collect();

        Ok(Self {
            routes,
            airlines_by_airport: airlines,
        })
    }

    /// Airports with at least `threshold` distinct airlines operating
    /// arrivals or departures. An airport with no flights counts zero
    /// airlines, so it qualifies exactly when `threshold` is zero.
    ///
    /// Returned sorted by the airports' natural order.
    pub fn qualifying_airports(
        &self,
        registry: &AirportRegistry,
        threshold: u32,
    ) -> Vec<Airport> {
        let mut airports: Vec<Airport> = registry
            .iter()
            .filter(|a| self.airline_count(a.id) >= threshold as usize)
            .cloned()
            .collect();
        airports.sort();
        airports
    }

    /// Number of distinct airlines touching an airport.
    pub fn airline_count(&self, id: AirportId) -> usize {
        self.airlines_by_airport.get(&id).map_or(0, HashSet::len)
    }

    /// All per-directed-pair routes, ordered by endpoint ids.
    pub fn all_routes(&self) -> &[Route] {
        &self.routes
    }
}
