//! Graph validation logic.

use std::collections::{HashMap, HashSet};

use ag_core::{AgResult, Airport, AirportId};

use crate::error::GraphError;
use crate::graph::Edge;

/// Validate the frozen structure: unique vertices, simple canonical edges,
/// every endpoint a vertex.
pub(crate) fn validate_structure(
    vertices: &[Airport],
    index: &HashMap<AirportId, usize>,
    edges: &[Edge],
) -> AgResult<()> {
    let mut seen_ids = HashSet::new();
    for vertex in vertices {
        if !seen_ids.insert(vertex.id) {
            return Err(GraphError::DuplicateVertex { airport: vertex.id }.into());
        }
    }

    let mut seen_pairs = HashSet::new();
    for edge in edges {
        if edge.a == edge.b {
            return Err(GraphError::SelfLoop { airport: edge.a }.into());
        }
        if edge.b < edge.a {
            return Err(GraphError::NonCanonicalEdge {
                a: edge.a,
                b: edge.b,
            }
            .into());
        }
        if !index.contains_key(&edge.a) {
            return Err(GraphError::UnknownEndpoint { airport: edge.a }.into());
        }
        if !index.contains_key(&edge.b) {
            return Err(GraphError::UnknownEndpoint { airport: edge.b }.into());
        }
        if !seen_pairs.insert((edge.a, edge.b)) {
            return Err(GraphError::DuplicateEdge {
                a: edge.a,
                b: edge.b,
            }
            .into());
        }
    }

    Ok(())
}

/// Validate adjacency slices for consistency with the edge list.
pub(crate) fn validate_adjacency(
    vertices: &[Airport],
    edges: &[Edge],
    neighbor_offsets: &[usize],
    neighbors: &[(usize, u64)],
) -> AgResult<()> {
    let fallback = vertices.first().map_or(AirportId::new(0), |a| a.id);
    if neighbor_offsets.len() != vertices.len() + 1 {
        return Err(GraphError::InconsistentAdjacency { airport: fallback }.into());
    }

    // Each edge appears once in both endpoints' slices
    if neighbors.len() != edges.len() * 2 {
        return Err(GraphError::InconsistentAdjacency { airport: fallback }.into());
    }

    for (u, vertex) in vertices.iter().enumerate() {
        let start = neighbor_offsets[u];
        let end = neighbor_offsets[u + 1];
        for &(v, weight) in &neighbors[start..end] {
            if v >= vertices.len() || v == u {
                return Err(GraphError::InconsistentAdjacency { airport: vertex.id }.into());
            }
            let mirror = &neighbors[neighbor_offsets[v]..neighbor_offsets[v + 1]];
            if !mirror.contains(&(u, weight)) {
                return Err(GraphError::InconsistentAdjacency {
                    airport: vertices[v].id,
                }
                .into());
            }
        }
    }

    Ok(())
}
