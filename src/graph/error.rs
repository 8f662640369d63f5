//! Errors returned by graph store operations

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during graph operations
///
/// Labels are rendered with `Debug` so the error type stays free of the
/// store's generic parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("Vertex {0} not found")]
    NoSuchVertex(String),

    #[error("Edge {from} -> {to} not found")]
    NoSuchEdge { from: String, to: String },
}

impl GraphError {
    pub fn duplicate_vertex<V: Debug>(label: &V) -> Self {
        GraphError::DuplicateVertex(format!("{:?}", label))
    }

    pub fn no_such_vertex<V: Debug>(label: &V) -> Self {
        GraphError::NoSuchVertex(format!("{:?}", label))
    }

    pub fn duplicate_edge<V: Debug>(source: &V, target: &V) -> Self {
        GraphError::DuplicateEdge {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }

    pub fn no_such_edge<V: Debug>(source: &V, target: &V) -> Self {
        GraphError::NoSuchEdge {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
