//! Core value types for the directed graph stores
//!
//! Neither type holds a reference to another vertex or edge. All
//! relationships are resolved by label through the owning store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Bound for vertex labels.
///
/// Labels are compared for identity and used as hash keys, so they need
/// `Eq + Hash`. `Clone` lets a store keep the label both as a key and inside
/// the vertex and edges it owns. `Debug` is used when rendering errors.
pub trait VertexLabel: Eq + Hash + Clone + fmt::Debug {}

impl<T> VertexLabel for T where T: Eq + Hash + Clone + fmt::Debug {}

/// A labeled node identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex<V> {
    label: V,
}

impl<V> Vertex<V> {
    pub fn new(label: V) -> Self {
        Vertex { label }
    }

    pub fn label(&self) -> &V {
        &self.label
    }

    pub fn into_label(self) -> V {
        self.label
    }
}

impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.label)
    }
}

/// A directed edge carrying a payload
///
/// Stores the labels of both endpoints, never the vertices themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, E> {
    /// Source vertex label (edge goes FROM this vertex)
    source: V,

    /// Destination vertex label (edge goes TO this vertex)
    target: V,

    /// Edge payload
    label: E,
}

impl<V, E> Edge<V, E> {
    pub fn new(source: V, target: V, label: E) -> Self {
        Edge {
            source,
            target,
            label,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn label(&self) -> &E {
        &self.label
    }

    /// Consume the edge, keeping only its payload
    pub fn into_label(self) -> E {
        self.label
    }
}

impl<V: PartialEq, E> Edge<V, E> {
    /// Check if this edge goes FROM a specific vertex
    pub fn starts_from(&self, vertex: &V) -> bool {
        self.source == *vertex
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: &V) -> bool {
        self.target == *vertex
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Edge<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-[{}]->({})", self.source, self.label, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_identity_by_label() {
        let a = Vertex::new("A");
        let b = Vertex::new("A");
        let c = Vertex::new("C");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.label(), &"A");
        assert_eq!(format!("{}", a), "(A)");
        assert_eq!(c.into_label(), "C");
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::new("A", "B", 7);

        assert_eq!(edge.source(), &"A");
        assert_eq!(edge.target(), &"B");
        assert_eq!(edge.label(), &7);
        assert!(edge.starts_from(&"A"));
        assert!(edge.ends_at(&"B"));
        assert!(!edge.starts_from(&"B"));
        assert!(!edge.ends_at(&"A"));
        assert!(!edge.is_self_loop());
        assert_eq!(format!("{}", edge), "(A)-[7]->(B)");
    }

    #[test]
    fn test_edge_self_loop() {
        let edge = Edge::new(1u32, 1u32, "loop");
        assert!(edge.is_self_loop());
        assert_eq!(edge.into_label(), "loop");
    }

    #[test]
    fn test_edge_serde() {
        let edge = Edge::new("A".to_string(), "B".to_string(), 3i64);
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"{"source":"A","target":"B","label":3}"#);

        let back: Edge<String, i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }
}
