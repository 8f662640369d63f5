//! Adjacency-matrix graph store
//!
//! Storage layout:
//! - slots: positional vertex array, `slots[i]` is the vertex at position i
//! - cells: square edge matrix, `cells[i][j]` is the edge from position i to j
//! - index: label -> position dictionary
//!
//! The dictionary is the only authority on which vertices exist. Removing a
//! vertex empties its slot, its row and its column but never compacts, so
//! surviving vertices keep their positions and the emptied slot stays a hole.
//! New vertices always take the next never-used position (append-only).
//!
//! Row and column scans make `degree` and `adjacent` O(capacity) and `edges`
//! O(capacity^2).

use super::error::{GraphError, GraphResult};
use super::traits::DirectedGraph;
use super::types::{Edge, Vertex, VertexLabel};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::iter::Flatten;
use std::slice;
use tracing::{debug, trace};

/// Default matrix side length: one row and one column
pub const DEFAULT_CAPACITY: usize = 1;

/// How the matrix enlarges once every position has been handed out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Add exactly one row and one column, so capacity tracks the number of
    /// positions ever used
    #[default]
    Linear,
    /// Double the side length
    Doubling,
}

impl GrowthPolicy {
    /// Side length to grow to from `capacity`
    pub fn next_capacity(self, capacity: usize) -> Option<usize> {
        match self {
            GrowthPolicy::Linear => capacity.checked_add(1),
            GrowthPolicy::Doubling => capacity.checked_mul(2).map(|c| c.max(1)),
        }
    }
}

/// Construction options for [`MatrixGraph`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Side length of the matrix allocated up front
    pub initial_capacity: usize,
    /// Growth strategy once the matrix is full
    pub growth: GrowthPolicy,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth: GrowthPolicy::Linear,
        }
    }
}

impl MatrixConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Reject capacities whose cell count does not fit in `usize`
    pub fn validate(&self) -> GraphResult<()> {
        cell_count(self.initial_capacity).map(|_| ())
    }
}

fn cell_count(capacity: usize) -> GraphResult<usize> {
    capacity.checked_mul(capacity).ok_or_else(|| {
        GraphError::InvalidArgument(format!(
            "matrix capacity {} overflows the cell count",
            capacity
        ))
    })
}

fn empty_row<V, E>(len: usize) -> Vec<Option<Edge<V, E>>> {
    std::iter::repeat_with(|| None).take(len).collect()
}

/// Directed graph backed by a dense edge matrix
#[derive(Debug, Clone)]
pub struct MatrixGraph<V, E> {
    /// Vertex per position; `None` for holes and unused positions
    slots: Vec<Option<Vertex<V>>>,

    /// `capacity x capacity` edge cells
    cells: Vec<Vec<Option<Edge<V, E>>>>,

    /// Label -> position, authoritative for existence
    index: FxHashMap<V, usize>,

    /// High-water mark: the next never-used position
    next_slot: usize,

    /// Live edge count, kept in step with `cells`
    edge_count: usize,

    growth: GrowthPolicy,
}

impl<V: VertexLabel, E> MatrixGraph<V, E> {
    /// Create an empty graph with a 1x1 matrix and linear growth
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY, GrowthPolicy::Linear)
    }

    /// Create an empty graph with a `capacity x capacity` matrix
    pub fn with_capacity(capacity: usize) -> GraphResult<Self> {
        Self::with_config(MatrixConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: MatrixConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self::allocate(config.initial_capacity, config.growth))
    }

    fn allocate(capacity: usize, growth: GrowthPolicy) -> Self {
        MatrixGraph {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            cells: std::iter::repeat_with(|| empty_row(capacity))
                .take(capacity)
                .collect(),
            index: FxHashMap::default(),
            next_slot: 0,
            edge_count: 0,
            growth,
        }
    }

    /// Current matrix side length
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Positions handed out so far, holes included
    pub fn slots_used(&self) -> usize {
        self.next_slot
    }

    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    fn position(&self, v: &V) -> GraphResult<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::no_such_vertex(v))
    }

    fn positions(&self, u: &V, v: &V) -> GraphResult<(usize, usize)> {
        Ok((self.position(u)?, self.position(v)?))
    }

    /// Enlarge the matrix per the growth policy, keeping every position
    fn grow(&mut self) -> GraphResult<()> {
        let capacity = self.capacity();
        let target = self.growth.next_capacity(capacity).ok_or_else(|| {
            GraphError::InvalidArgument(format!("matrix capacity {} cannot grow", capacity))
        })?;
        cell_count(target)?;

        for row in &mut self.cells {
            row.resize_with(target, || None);
        }
        self.cells.resize_with(target, || empty_row(target));
        self.slots.resize_with(target, || None);

        debug!(from = capacity, to = target, policy = ?self.growth, "grew adjacency matrix");
        Ok(())
    }
}

impl<V: VertexLabel, E> Default for MatrixGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexLabel, E> DirectedGraph<V, E> for MatrixGraph<V, E> {
    type Vertices<'a>
        = Flatten<slice::Iter<'a, Option<Vertex<V>>>>
    where
        Self: 'a,
        V: 'a;

    type Adjacent<'a>
        = MatrixAdjacent<'a, V, E>
    where
        Self: 'a,
        V: 'a;

    type Edges<'a>
        = Flatten<Flatten<slice::Iter<'a, Vec<Option<Edge<V, E>>>>>>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    fn add(&mut self, label: V) -> GraphResult<()> {
        if self.index.contains_key(&label) {
            return Err(GraphError::duplicate_vertex(&label));
        }
        if self.next_slot == self.capacity() {
            self.grow()?;
        }

        let position = self.next_slot;
        trace!(vertex = ?label, position, "adding vertex");
        self.index.insert(label.clone(), position);
        self.slots[position] = Some(Vertex::new(label));
        self.next_slot += 1;
        Ok(())
    }

    fn contains(&self, label: &V) -> bool {
        self.index.contains_key(label)
    }

    fn get(&self, label: &V) -> GraphResult<&Vertex<V>> {
        let position = self.position(label)?;
        self.slots[position]
            .as_ref()
            .ok_or_else(|| GraphError::no_such_vertex(label))
    }

    fn remove(&mut self, label: &V) -> GraphResult<V> {
        let position = self.position(label)?;

        // Positions at or past the high-water mark never held an edge
        let mut removed = 0;
        for other in 0..self.next_slot {
            if self.cells[position][other].take().is_some() {
                removed += 1;
            }
            if self.cells[other][position].take().is_some() {
                removed += 1;
            }
        }
        self.edge_count -= removed;
        self.slots[position] = None;

        let (label, _) = self
            .index
            .remove_entry(label)
            .ok_or_else(|| GraphError::no_such_vertex(label))?;

        debug!(vertex = ?label, position, edges = removed, "removed vertex and incident edges");
        Ok(label)
    }

    fn add_edge(&mut self, u: &V, v: &V, label: E) -> GraphResult<()> {
        let (from, to) = self.positions(u, v)?;

        let cell = &mut self.cells[from][to];
        if cell.is_some() {
            return Err(GraphError::duplicate_edge(u, v));
        }
        *cell = Some(Edge::new(u.clone(), v.clone(), label));

        self.edge_count += 1;
        trace!(source = ?u, destination = ?v, from, to, "added edge");
        Ok(())
    }

    fn contains_edge(&self, u: &V, v: &V) -> GraphResult<bool> {
        let (from, to) = self.positions(u, v)?;
        Ok(self.cells[from][to].is_some())
    }

    fn get_edge(&self, u: &V, v: &V) -> GraphResult<&Edge<V, E>> {
        let (from, to) = self.positions(u, v)?;
        self.cells[from][to]
            .as_ref()
            .ok_or_else(|| GraphError::no_such_edge(u, v))
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<E> {
        let (from, to) = self.positions(u, v)?;
        let edge = self.cells[from][to]
            .take()
            .ok_or_else(|| GraphError::no_such_edge(u, v))?;

        self.edge_count -= 1;
        trace!(source = ?u, destination = ?v, from, to, "removed edge");
        Ok(edge.into_label())
    }

    fn size(&self) -> usize {
        self.index.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn degree(&self, v: &V) -> GraphResult<usize> {
        let position = self.position(v)?;
        Ok(self.cells[position].iter().filter(|cell| cell.is_some()).count())
    }

    fn vertices(&self) -> Self::Vertices<'_> {
        self.slots.iter().flatten()
    }

    fn adjacent(&self, v: &V) -> GraphResult<Self::Adjacent<'_>> {
        let position = self.position(v)?;
        Ok(MatrixAdjacent {
            row: self.cells[position].iter().enumerate(),
            slots: &self.slots,
        })
    }

    fn edges(&self) -> Self::Edges<'_> {
        self.cells.iter().flatten().flatten()
    }

    fn clear(&mut self) {
        debug!(
            vertices = self.index.len(),
            edges = self.edge_count,
            capacity = self.capacity(),
            "clearing matrix graph"
        );
        // Capacity is kept; only contents and the high-water mark reset
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| *cell = None);
        self.index.clear();
        self.next_slot = 0;
        self.edge_count = 0;
    }
}

/// Occupied cells of one matrix row, resolved to destination vertices
pub struct MatrixAdjacent<'a, V, E> {
    row: std::iter::Enumerate<slice::Iter<'a, Option<Edge<V, E>>>>,
    slots: &'a [Option<Vertex<V>>],
}

impl<'a, V, E> Iterator for MatrixAdjacent<'a, V, E> {
    type Item = &'a Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        // An occupied cell implies its column's vertex is live
        for (column, cell) in self.row.by_ref() {
            if cell.is_some() {
                if let Some(vertex) = self.slots[column].as_ref() {
                    return Some(vertex);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.row.size_hint().1)
    }
}
