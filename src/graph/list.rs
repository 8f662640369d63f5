//! Adjacency-list graph store
//!
//! Two label-keyed maps back the store:
//! - vertices: V -> Vertex<V>
//! - edges: V (source) -> V (destination) -> Edge<V, E>
//!
//! Every present vertex owns an inner destination map, possibly empty, so
//! outgoing lookups and out-degree are O(1). Incoming edges are not indexed:
//! removing a vertex drops its own inner map and then scans every other
//! source's map for entries keyed by the removed label.

use super::error::{GraphError, GraphResult};
use super::traits::DirectedGraph;
use super::types::{Edge, Vertex, VertexLabel};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

type LabelMap<K, T> = IndexMap<K, T, FxBuildHasher>;

/// Directed graph backed by nested label-keyed maps
#[derive(Debug, Clone)]
pub struct ListGraph<V, E> {
    /// Vertex storage keyed by label
    vertices: LabelMap<V, Vertex<V>>,

    /// Outgoing edges per source, keyed by destination
    edges: LabelMap<V, LabelMap<V, Edge<V, E>>>,

    /// Live edge count, kept in step with `edges`
    edge_count: usize,
}

impl<V: VertexLabel, E> ListGraph<V, E> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty graph with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        ListGraph {
            vertices: LabelMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            edges: LabelMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            edge_count: 0,
        }
    }

    fn check_vertex(&self, v: &V) -> GraphResult<()> {
        if self.vertices.contains_key(v) {
            Ok(())
        } else {
            Err(GraphError::no_such_vertex(v))
        }
    }

    fn check_vertices(&self, u: &V, v: &V) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)
    }

    /// Outgoing edge map of a present vertex
    fn outgoing(&self, u: &V) -> GraphResult<&LabelMap<V, Edge<V, E>>> {
        self.edges.get(u).ok_or_else(|| GraphError::no_such_vertex(u))
    }

    fn outgoing_mut(&mut self, u: &V) -> GraphResult<&mut LabelMap<V, Edge<V, E>>> {
        self.edges.get_mut(u).ok_or_else(|| GraphError::no_such_vertex(u))
    }
}

impl<V: VertexLabel, E> Default for ListGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexLabel, E> DirectedGraph<V, E> for ListGraph<V, E> {
    type Vertices<'a>
        = indexmap::map::Values<'a, V, Vertex<V>>
    where
        Self: 'a,
        V: 'a;

    type Adjacent<'a>
        = ListAdjacent<'a, V, E>
    where
        Self: 'a,
        V: 'a;

    type Edges<'a>
        = ListEdges<'a, V, E>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    fn add(&mut self, label: V) -> GraphResult<()> {
        if self.vertices.contains_key(&label) {
            return Err(GraphError::duplicate_vertex(&label));
        }

        trace!(vertex = ?label, "adding vertex");
        self.edges.insert(label.clone(), LabelMap::default());
        self.vertices.insert(label.clone(), Vertex::new(label));
        Ok(())
    }

    fn contains(&self, label: &V) -> bool {
        self.vertices.contains_key(label)
    }

    fn get(&self, label: &V) -> GraphResult<&Vertex<V>> {
        self.vertices
            .get(label)
            .ok_or_else(|| GraphError::no_such_vertex(label))
    }

    fn remove(&mut self, label: &V) -> GraphResult<V> {
        let vertex = self
            .vertices
            .swap_remove(label)
            .ok_or_else(|| GraphError::no_such_vertex(label))?;

        // A self-loop lives in the vertex's own map and goes with it here
        let outgoing = self.edges.swap_remove(label).map_or(0, |inner| inner.len());

        let mut incoming = 0;
        for inner in self.edges.values_mut() {
            if inner.swap_remove(label).is_some() {
                incoming += 1;
            }
        }

        self.edge_count -= outgoing + incoming;
        debug!(vertex = ?label, outgoing, incoming, "removed vertex and incident edges");
        Ok(vertex.into_label())
    }

    fn add_edge(&mut self, u: &V, v: &V, label: E) -> GraphResult<()> {
        self.check_vertices(u, v)?;

        let inner = self.outgoing_mut(u)?;
        if inner.contains_key(v) {
            return Err(GraphError::duplicate_edge(u, v));
        }
        inner.insert(v.clone(), Edge::new(u.clone(), v.clone(), label));

        self.edge_count += 1;
        trace!(source = ?u, destination = ?v, "added edge");
        Ok(())
    }

    fn contains_edge(&self, u: &V, v: &V) -> GraphResult<bool> {
        self.check_vertices(u, v)?;
        Ok(self.outgoing(u)?.contains_key(v))
    }

    fn get_edge(&self, u: &V, v: &V) -> GraphResult<&Edge<V, E>> {
        self.check_vertices(u, v)?;
        self.outgoing(u)?
            .get(v)
            .ok_or_else(|| GraphError::no_such_edge(u, v))
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<E> {
        self.check_vertices(u, v)?;

        let edge = self
            .outgoing_mut(u)?
            .swap_remove(v)
            .ok_or_else(|| GraphError::no_such_edge(u, v))?;

        self.edge_count -= 1;
        trace!(source = ?u, destination = ?v, "removed edge");
        Ok(edge.into_label())
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn degree(&self, v: &V) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.outgoing(v)?.len())
    }

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.values()
    }

    fn adjacent(&self, v: &V) -> GraphResult<Self::Adjacent<'_>> {
        self.check_vertex(v)?;
        Ok(ListAdjacent {
            destinations: self.outgoing(v)?.keys(),
            vertices: &self.vertices,
        })
    }

    fn edges(&self) -> Self::Edges<'_> {
        ListEdges {
            sources: self.edges.values(),
            current: None,
        }
    }

    fn clear(&mut self) {
        debug!(
            vertices = self.vertices.len(),
            edges = self.edge_count,
            "clearing list graph"
        );
        self.vertices.clear();
        self.edges.clear();
        self.edge_count = 0;
    }
}

/// Destinations of one source's outgoing edges, resolved to vertices
pub struct ListAdjacent<'a, V, E> {
    destinations: indexmap::map::Keys<'a, V, Edge<V, E>>,
    vertices: &'a LabelMap<V, Vertex<V>>,
}

impl<'a, V: VertexLabel, E> Iterator for ListAdjacent<'a, V, E> {
    type Item = &'a Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        // Every destination key names a present vertex
        for destination in self.destinations.by_ref() {
            if let Some(vertex) = self.vertices.get(destination) {
                return Some(vertex);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.destinations.size_hint().1)
    }
}

/// Every edge, walked source by source
pub struct ListEdges<'a, V, E> {
    sources: indexmap::map::Values<'a, V, LabelMap<V, Edge<V, E>>>,
    current: Option<indexmap::map::Values<'a, V, Edge<V, E>>>,
}

impl<'a, V, E> Iterator for ListEdges<'a, V, E> {
    type Item = &'a Edge<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.as_mut().and_then(Iterator::next) {
                return Some(edge);
            }
            self.current = Some(self.sources.next()?.values());
        }
    }
}
