//! dualgraph
//!
//! A generic directed graph store with two interchangeable backends behind
//! one trait.
//!
//! # Backends
//!
//! - [`ListGraph`]: label-keyed nested maps. O(1) vertex and edge operations;
//!   removing a vertex scans every source for incoming edges.
//! - [`MatrixGraph`]: dense edge matrix indexed by position, plus a
//!   label -> position dictionary. Positions are append-only and never
//!   reused, so removal leaves holes in the matrix.
//!
//! Both enforce the same invariants:
//! - vertex labels are unique
//! - at most one edge exists per ordered pair `(u, v)`
//! - removing a vertex removes every edge where it is source or destination
//! - every failing operation leaves the store unchanged
//!
//! ## Example Usage
//!
//! ```rust
//! use dualgraph::{DirectedGraph, ListGraph, MatrixGraph};
//!
//! fn build<G: DirectedGraph<&'static str, i32>>(graph: &mut G) {
//!     for label in ["A", "B", "C"] {
//!         graph.add(label).unwrap();
//!     }
//!     graph.add_edge(&"A", &"B", 1).unwrap();
//!     graph.add_edge(&"B", &"C", 2).unwrap();
//!     graph.add_edge(&"A", &"C", 3).unwrap();
//! }
//!
//! let mut list = ListGraph::new();
//! let mut matrix = MatrixGraph::new();
//! build(&mut list);
//! build(&mut matrix);
//!
//! assert_eq!(list.degree(&"A").unwrap(), 2);
//! assert_eq!(matrix.degree(&"A").unwrap(), 2);
//!
//! // Removing B takes A -> B and B -> C with it
//! matrix.remove(&"B").unwrap();
//! assert_eq!(matrix.edge_count(), 1);
//! ```

#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    DirectedGraph, Edge, GraphError, GraphResult, GraphStatistics, GrowthPolicy, ListGraph,
    MatrixConfig, MatrixGraph, Vertex, VertexLabel,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
