//! Directed graph storage
//!
//! This module implements a directed graph with two interchangeable backends:
//! - `ListGraph`: nested label-keyed maps (adjacency list)
//! - `MatrixGraph`: dense edge matrix plus a label -> position dictionary
//!
//! Both implement the `DirectedGraph` trait and behave identically from the
//! caller's side: unique vertex labels, at most one edge per ordered pair, and
//! removal of a vertex cascading to every incident edge.

pub mod error;
pub mod list;
pub mod matrix;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{GraphError, GraphResult};
pub use list::ListGraph;
pub use matrix::{GrowthPolicy, MatrixConfig, MatrixGraph, DEFAULT_CAPACITY};
pub use stats::GraphStatistics;
pub use traits::DirectedGraph;
pub use types::{Edge, Vertex, VertexLabel};
