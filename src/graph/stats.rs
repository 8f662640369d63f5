//! Introspection snapshot shared by both stores

use serde::{Deserialize, Serialize};

/// Point-in-time summary of a graph store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Number of live vertices
    pub vertex_count: usize,
    /// Number of live edges
    pub edge_count: usize,
    /// Largest out-degree over all vertices (0 for an empty graph)
    pub max_out_degree: usize,
    /// Number of edges whose source equals their destination
    pub self_loops: usize,
    /// `edge_count / vertex_count^2`, self-loops included
    pub density: f64,
}

impl GraphStatistics {
    pub fn new(vertex_count: usize, edge_count: usize, max_out_degree: usize, self_loops: usize) -> Self {
        let density = if vertex_count == 0 {
            0.0
        } else {
            edge_count as f64 / (vertex_count as f64 * vertex_count as f64)
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            max_out_degree,
            self_loops,
            density,
        }
    }
}
