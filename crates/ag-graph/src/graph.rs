//! Core graph data structures.

use std::collections::HashMap;

use ag_core::{Airport, AirportId};

/// An undirected edge between two qualifying airports.
///
/// Endpoints are canonical (`a < b` by id). The weight is the total flight
/// count over all routes between the pair, in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: AirportId,
    pub b: AirportId,
    pub weight: u64,
}

/// The route graph: a validated, immutable set of airport vertices plus
/// weighted undirected edges.
///
/// The graph stores:
/// - Vertices sorted by their natural order (this is the listing order).
/// - A dense id -> index map.
/// - Compact adjacency: vertex i's neighbors are in
///   `neighbors[neighbor_offsets[i]..neighbor_offsets[i + 1]]`, sorted by
///   neighbor index for determinism.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) vertices: Vec<Airport>,
    pub(crate) index: HashMap<AirportId, usize>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) neighbor_offsets: Vec<usize>,
    pub(crate) neighbors: Vec<(usize, u64)>,
}

impl Graph {
    /// All vertices, sorted by the airports' natural order.
    pub fn vertices(&self) -> &[Airport] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, canonical endpoints, sorted by endpoint ids.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains(&self, id: AirportId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get a vertex by airport id.
    pub fn vertex(&self, id: AirportId) -> Option<&Airport> {
        self.index_of(id).map(|i| &self.vertices[i])
    }

    /// Dense index of a vertex, if the airport is in the graph.
    pub fn index_of(&self, id: AirportId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Neighbors of a vertex with edge weights, in listing order.
    pub fn neighbors(&self, id: AirportId) -> Vec<(&Airport, u64)> {
        match self.index_of(id) {
            Some(i) => self
                .neighbor_slice(i)
                .iter()
                .map(|&(j, w)| (&self.vertices[j], w))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Weight of the edge between two airports, if one exists.
    pub fn edge_weight(&self, a: AirportId, b: AirportId) -> Option<u64> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.neighbor_slice(ia)
            .iter()
            .find(|&&(j, _)| j == ib)
            .map(|&(_, w)| w)
    }

    pub fn are_adjacent(&self, a: AirportId, b: AirportId) -> bool {
        self.edge_weight(a, b).is_some()
    }

    pub(crate) fn neighbor_slice(&self, idx: usize) -> &[(usize, u64)] {
        let start = self.neighbor_offsets[idx];
        let end = self.neighbor_offsets[idx + 1];
        &self.neighbors[start..end]
    }
}
