//! The route network model: providers plus the current graph.

use ag_core::{AgError, Airport, AirportId};
use ag_data::{AirportRegistry, Dataset, RouteSource};
use ag_graph::{Graph, GraphBuilder, find_path};

use crate::error::{AppError, AppResult};

/// Observable outcome of a graph build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
}

/// Owns the one-time-loaded airport registry, the route source, and the
/// current graph, if one has been built.
///
/// `build` replaces the graph wholesale; queries run against the last
/// successfully built graph and fail with [`AgError::NotBuilt`] before the
/// first one. Build and query phases are serialized by `&mut self`.
#[derive(Debug)]
pub struct RouteNetwork {
    registry: AirportRegistry,
    routes: RouteSource,
    graph: Option<Graph>,
}

impl RouteNetwork {
    /// Construct both providers from a validated dataset. The registry is
    /// populated here, once; it is read-only afterwards.
    pub fn new(dataset: &Dataset) -> AppResult<Self> {
        let registry = AirportRegistry::load_all(dataset);
        let routes = RouteSource::from_dataset(dataset, &registry)?;
        Ok(Self {
            registry,
            routes,
            graph: None,
        })
    }

    pub fn registry(&self) -> &AirportRegistry {
        &self.registry
    }

    /// Build the route graph for a minimum-airline threshold, replacing any
    /// prior graph. A failed build leaves the prior graph installed.
    pub fn build(&mut self, threshold: i32) -> AppResult<BuildSummary> {
        if threshold < 0 {
            return Err(AgError::InvalidArg {
                what: "threshold must be non-negative",
            }
            .into());
        }

        let vertices = self
            .routes
            .qualifying_airports(&self.registry, threshold as u32);
        let mut builder = GraphBuilder::with_vertices(vertices);
        for route in self.routes.all_routes() {
            builder.add_route(route.a1, route.a2, route.flights);
        }
        let graph = builder.build()?;

        let summary = BuildSummary {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
        };
        tracing::info!(
            vertices = summary.vertex_count,
            edges = summary.edge_count,
            threshold,
            "route graph built"
        );

        self.graph = Some(graph);
        Ok(summary)
    }

    /// The current graph, or `NotBuilt`.
    pub fn graph(&self) -> AppResult<&Graph> {
        self.graph.as_ref().ok_or(AppError::Graph(AgError::NotBuilt))
    }

    /// Vertex listing in the airports' natural order.
    pub fn airports(&self) -> AppResult<&[Airport]> {
        Ok(self.graph()?.vertices())
    }

    /// Fewest-hops path between two airports of the current graph.
    /// `Ok(None)` means the endpoints are in different components.
    pub fn find_route(
        &self,
        from: AirportId,
        to: AirportId,
    ) -> AppResult<Option<Vec<Airport>>> {
        Ok(find_path(self.graph()?, from, to)?)
    }

    /// Resolve an airport code against the registry, case-insensitively.
    pub fn airport_by_code(&self, code: &str) -> AppResult<&Airport> {
        self.registry
            .by_code(code)
            .ok_or_else(|| AppError::AirportNotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_data::{AirportDef, DATASET_VERSION, FlightDef};

    fn airport(id: u32, code: &str, name: &str) -> AirportDef {
        AirportDef {
            id,
            code: code.to_string(),
            name: name.to_string(),
            city: "City".to_string(),
            state: None,
            country: None,
            latitude: None,
            longitude: None,
        }
    }

    fn flight(airline: &str, origin: u32, destination: u32, count: u32) -> FlightDef {
        FlightDef {
            airline: airline.to_string(),
            origin,
            destination,
            count,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            version: DATASET_VERSION,
            name: "test".to_string(),
            airports: vec![
                airport(1, "AAA", "Alpha Intl"),
                airport(2, "BBB", "Beta Field"),
                airport(3, "CCC", "Gamma Muni"),
            ],
            flights: vec![
                flight("WN", 1, 2, 3),
                flight("DL", 2, 1, 2),
                flight("WN", 2, 3, 1),
            ],
        }
    }

    #[test]
    fn queries_before_build_fail_not_built() {
        let network = RouteNetwork::new(&dataset()).unwrap();
        assert!(matches!(
            network.airports(),
            Err(AppError::Graph(AgError::NotBuilt))
        ));
        assert!(matches!(
            network.find_route(AirportId::new(1), AirportId::new(2)),
            Err(AppError::Graph(AgError::NotBuilt))
        ));
    }

    #[test]
    fn negative_threshold_is_rejected_and_keeps_prior_graph() {
        let mut network = RouteNetwork::new(&dataset()).unwrap();
        let summary = network.build(0).unwrap();
        assert_eq!(summary.vertex_count, 3);

        assert!(matches!(
            network.build(-1),
            Err(AppError::Graph(AgError::InvalidArg { .. }))
        ));
        // prior graph still answers
        assert_eq!(network.airports().unwrap().len(), 3);
    }

    #[test]
    fn rebuild_replaces_the_graph() {
        let mut network = RouteNetwork::new(&dataset()).unwrap();
        network.build(0).unwrap();
        assert_eq!(network.airports().unwrap().len(), 3);

        // only airports 1 and 2 see two distinct airlines
        let summary = network.build(2).unwrap();
        assert_eq!(summary.vertex_count, 2);
        assert_eq!(summary.edge_count, 1);
        let codes: Vec<&str> = network
            .airports()
            .unwrap()
            .iter()
            .map(|a| a.code.as_str())
            .collect();
        assert_eq!(codes, vec!["AAA", "BBB"]);
    }

    #[test]
    fn find_route_reports_paths_and_unreachable() {
        let mut network = RouteNetwork::new(&dataset()).unwrap();
        network.build(0).unwrap();

        let path = network
            .find_route(AirportId::new(1), AirportId::new(3))
            .unwrap()
            .unwrap();
        let ids: Vec<u32> = path.iter().map(|a| a.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // threshold 2 drops airport 3 from the graph entirely
        network.build(2).unwrap();
        assert!(matches!(
            network.find_route(AirportId::new(1), AirportId::new(3)),
            Err(AppError::Graph(AgError::UnknownAirport { .. }))
        ));
    }

    #[test]
    fn airport_code_lookup() {
        let network = RouteNetwork::new(&dataset()).unwrap();
        assert_eq!(network.airport_by_code("bbb").unwrap().id, AirportId::new(2));
        assert!(matches!(
            network.airport_by_code("ZZZ"),
            Err(AppError::AirportNotFound(_))
        ));
    }
}
