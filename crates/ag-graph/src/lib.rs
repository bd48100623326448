//! ag-graph: route graph construction and traversal for aerograph.
//!
//! Provides:
//! - Frozen graph data structures (airport vertices, weighted edges)
//! - One-pass graph builder with validation
//! - Shortest-hop BFS path search
//!
//! # Example
//!
//! ```
//! use ag_core::{Airport, AirportId};
//! use ag_graph::{GraphBuilder, find_path};
//!
//! let a = Airport::new(AirportId::new(1), "AAA", "Alpha Intl", "Alphaville");
//! let b = Airport::new(AirportId::new(2), "BBB", "Beta Field", "Betatown");
//! let mut builder = GraphBuilder::with_vertices([a.clone(), b.clone()]);
//! builder.add_route(a.id, b.id, 3);
//! builder.add_route(b.id, a.id, 2);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.edge_weight(a.id, b.id), Some(5));
//! let path = find_path(&graph, a.id, b.id).unwrap().unwrap();
//! assert_eq!(path.len(), 2);
//! ```

pub mod bfs;
pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use bfs::find_path;
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{Edge, Graph};
