//! One-pass route graph builder.

use std::collections::{HashMap, HashSet};

use ag_core::{AgResult, Airport, AirportId};

use crate::graph::{Edge, Graph};
use crate::validate;

/// Builder for constructing the route graph.
///
/// Seed the vertex set with `add_vertex`/`with_vertices`, feed every route
/// record through `add_route`, then call `build()` to validate and freeze
/// the result into an immutable [`Graph`].
///
/// Route weights accumulate keyed by the canonical unordered pair, so the
/// two directional records of the same physical route land on one key and
/// their counts sum. Edges are materialized once, at `build()`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<Airport>,
    ids: HashSet<AirportId>,
    weights: HashMap<(AirportId, AirportId), u64>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with a vertex set.
    pub fn with_vertices(vertices: impl IntoIterator<Item = Airport>) -> Self {
        let mut builder = Self::new();
        for airport in vertices {
            builder.add_vertex(airport);
        }
        builder
    }

    /// Add a vertex. Returns false (and keeps the existing record) if an
    /// airport with the same id is already present.
    pub fn add_vertex(&mut self, airport: Airport) -> bool {
        if !self.ids.insert(airport.id) {
            return false;
        }
        self.vertices.push(airport);
        true
    }

    /// Record one route. Returns true if it contributed to an edge.
    ///
    /// Routes touching an airport outside the vertex set are skipped, and
    /// self-referential routes are rejected: the graph is simple.
    pub fn add_route(&mut self, a1: AirportId, a2: AirportId, flights: u32) -> bool {
        if a1 == a2 {
            tracing::debug!(airport = %a1, "skipping self-referential route");
            return false;
        }
        if !self.ids.contains(&a1) || !self.ids.contains(&a2) {
            return false;
        }
        let key = if a1 < a2 { (a1, a2) } else { (a2, a1) };
        *self.weights.entry(key).or_insert(0) += u64::from(flights);
        true
    }

    /// Build and validate the graph, returning an immutable [`Graph`].
    ///
    /// Sorts vertices into their natural order, materializes the canonical
    /// edge list, and constructs compact adjacency slices.
    pub fn build(mut self) -> AgResult<Graph> {
        self.vertices.sort();
        let index: HashMap<AirportId, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();

        let mut edges: Vec<Edge> = self
            .weights
            .into_iter()
            .map(|((a, b), weight)| Edge { a, b, weight })
            .collect();
        edges.sort_by_key(|e| (e.a, e.b));

        validate::validate_structure(&self.vertices, &index, &edges)?;

        let (neighbor_offsets, neighbors) =
            Self::build_adjacency(self.vertices.len(), &index, &edges);

        validate::validate_adjacency(&self.vertices, &edges, &neighbor_offsets, &neighbors)?;

        Ok(Graph {
            vertices: self.vertices,
            index,
            edges,
            neighbor_offsets,
            neighbors,
        })
    }

    /// Build compact adjacency: for each vertex, its neighbors with weights.
    fn build_adjacency(
        vertex_count: usize,
        index: &HashMap<AirportId, usize>,
        edges: &[Edge],
    ) -> (Vec<usize>, Vec<(usize, u64)>) {
        // Group both directions, then sort each vertex's list for determinism
        let mut per_vertex: Vec<Vec<(usize, u64)>> = vec![Vec::new(); vertex_count];
        for edge in edges {
            let ia = index[&edge.a];
            let ib = index[&edge.b];
            per_vertex[ia].push((ib, edge.weight));
            per_vertex[ib].push((ia, edge.weight));
        }
        for list in &mut per_vertex {
            list.sort_by_key(|&(i, _)| i);
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut flat = Vec::new();
        offsets.push(0);
        for list in per_vertex {
            flat.extend(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
