//! Graph-specific error types.

use ag_core::{AgError, AirportId};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not in the vertex set.
    UnknownEndpoint { airport: AirportId },

    /// An edge connects an airport to itself.
    SelfLoop { airport: AirportId },

    /// Two vertices share the same airport id.
    DuplicateVertex { airport: AirportId },

    /// Two edges cover the same unordered pair.
    DuplicateEdge { a: AirportId, b: AirportId },

    /// Edge endpoints are not in canonical order.
    NonCanonicalEdge { a: AirportId, b: AirportId },

    /// Adjacency slices disagree with the edge list.
    InconsistentAdjacency { airport: AirportId },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownEndpoint { airport } => {
                write!(f, "Edge endpoint {} is not a vertex", airport)
            }
            GraphError::SelfLoop { airport } => {
                write!(f, "Self-loop edge at airport {}", airport)
            }
            GraphError::DuplicateVertex { airport } => {
                write!(f, "Duplicate vertex for airport {}", airport)
            }
            GraphError::DuplicateEdge { a, b } => {
                write!(f, "Duplicate edge for pair {}-{}", a, b)
            }
            GraphError::NonCanonicalEdge { a, b } => {
                write!(f, "Edge {}-{} endpoints are not in canonical order", a, b)
            }
            GraphError::InconsistentAdjacency { airport } => {
                write!(
                    f,
                    "Adjacency of airport {} disagrees with the edge list",
                    airport
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for AgError {
    fn from(err: GraphError) -> Self {
        AgError::Invariant {
            what: err.to_string(),
        }
    }
}
