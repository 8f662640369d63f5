//! The operation set shared by every directed graph store
//!
//! Callers are expected to program against [`DirectedGraph`] and pick a
//! backend ([`ListGraph`](super::ListGraph) or
//! [`MatrixGraph`](super::MatrixGraph)) only at construction time.
//!
//! Iteration uses associated iterator types so each backend can hand out
//! borrowing iterators without boxing. Because those iterators borrow the
//! store, the store cannot be mutated while one is alive.

use super::error::{GraphError, GraphResult};
use super::stats::GraphStatistics;
use super::types::{Edge, Vertex, VertexLabel};

/// A directed graph with at most one edge per ordered vertex pair.
///
/// Every operation validates its arguments before touching any state, so an
/// `Err` always leaves the store exactly as it was.
pub trait DirectedGraph<V: VertexLabel, E> {
    /// Iterator over all vertices.
    type Vertices<'a>: Iterator<Item = &'a Vertex<V>>
    where
        Self: 'a,
        V: 'a;

    /// Iterator over the destinations of one vertex's outgoing edges.
    type Adjacent<'a>: Iterator<Item = &'a Vertex<V>>
    where
        Self: 'a,
        V: 'a;

    /// Iterator over all edges.
    type Edges<'a>: Iterator<Item = &'a Edge<V, E>>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    /// Add a vertex. Fails with `DuplicateVertex` if the label is taken.
    fn add(&mut self, label: V) -> GraphResult<()>;

    fn contains(&self, label: &V) -> bool;

    fn get(&self, label: &V) -> GraphResult<&Vertex<V>>;

    /// Remove a vertex and every edge incident to it, returning its label.
    fn remove(&mut self, label: &V) -> GraphResult<V>;

    /// Add the edge `u -> v`.
    ///
    /// Both endpoints must exist (`NoSuchVertex`, source checked first) and
    /// the pair must not already be connected (`DuplicateEdge`).
    fn add_edge(&mut self, u: &V, v: &V, label: E) -> GraphResult<()>;

    fn contains_edge(&self, u: &V, v: &V) -> GraphResult<bool>;

    fn get_edge(&self, u: &V, v: &V) -> GraphResult<&Edge<V, E>>;

    /// Remove the edge `u -> v`, returning its payload.
    fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<E>;

    /// Number of vertices
    fn size(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Out-degree of `v`
    fn degree(&self, v: &V) -> GraphResult<usize>;

    fn vertices(&self) -> Self::Vertices<'_>;

    /// Vertices reachable from `v` over exactly one outgoing edge.
    fn adjacent(&self, v: &V) -> GraphResult<Self::Adjacent<'_>>;

    fn edges(&self) -> Self::Edges<'_>;

    /// Remove every vertex and edge.
    fn clear(&mut self);

    /// Number of edges whose destination is `v`.
    ///
    /// Neither backend indexes incoming edges, so this walks every edge.
    fn in_degree(&self, v: &V) -> GraphResult<usize> {
        if !self.contains(v) {
            return Err(GraphError::no_such_vertex(v));
        }
        Ok(self.edges().filter(|edge| edge.ends_at(v)).count())
    }

    fn statistics(&self) -> GraphStatistics {
        let max_out_degree = self
            .vertices()
            .filter_map(|vertex| self.degree(vertex.label()).ok())
            .max()
            .unwrap_or(0);
        let self_loops = self.edges().filter(|edge| edge.is_self_loop()).count();

        GraphStatistics::new(self.size(), self.edge_count(), max_out_degree, self_loops)
    }
}
