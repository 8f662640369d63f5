//! Cross-backend equivalence
//!
//! The same operation sequence is applied to a list-backed and two
//! matrix-backed stores; every result and every observable count must match.

use dualgraph::{DirectedGraph, GraphResult, GrowthPolicy, ListGraph, MatrixConfig, MatrixGraph};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
    AddEdge(u8, u8, u16),
    RemoveEdge(u8, u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..10).prop_map(Op::Add),
        2 => (0u8..10).prop_map(Op::Remove),
        8 => (0u8..10, 0u8..10, any::<u16>()).prop_map(|(u, v, w)| Op::AddEdge(u, v, w)),
        3 => (0u8..10, 0u8..10).prop_map(|(u, v)| Op::RemoveEdge(u, v)),
        1 => Just(Op::Clear),
    ]
}

/// Outcome of one operation, comparable across backends
#[derive(Debug, PartialEq)]
enum Outcome {
    Unit(GraphResult<()>),
    Label(GraphResult<u8>),
    Payload(GraphResult<u16>),
}

fn apply<G: DirectedGraph<u8, u16>>(graph: &mut G, op: &Op) -> Outcome {
    match *op {
        Op::Add(v) => Outcome::Unit(graph.add(v)),
        Op::Remove(v) => Outcome::Label(graph.remove(&v)),
        Op::AddEdge(u, v, w) => Outcome::Unit(graph.add_edge(&u, &v, w)),
        Op::RemoveEdge(u, v) => Outcome::Payload(graph.remove_edge(&u, &v)),
        Op::Clear => {
            graph.clear();
            Outcome::Unit(Ok(()))
        }
    }
}

/// Everything observable about a store, independent of iteration order
#[derive(Debug, PartialEq)]
struct Observed {
    size: usize,
    edge_count: usize,
    vertices: BTreeSet<u8>,
    degrees: Vec<(u8, usize, usize)>,
    adjacency: BTreeSet<(u8, u8)>,
    edges: BTreeSet<(u8, u8, u16)>,
}

fn observe<G: DirectedGraph<u8, u16>>(graph: &G) -> Observed {
    let vertices: BTreeSet<u8> = graph.vertices().map(|v| *v.label()).collect();

    let degrees = vertices
        .iter()
        .map(|v| (*v, graph.degree(v).unwrap(), graph.in_degree(v).unwrap()))
        .collect();

    let adjacency = vertices
        .iter()
        .flat_map(|u| graph.adjacent(u).unwrap().map(move |v| (*u, *v.label())))
        .collect();

    let edges = graph
        .edges()
        .map(|e| (*e.source(), *e.target(), *e.label()))
        .collect();

    Observed {
        size: graph.size(),
        edge_count: graph.edge_count(),
        vertices,
        degrees,
        adjacency,
        edges,
    }
}

#[test]
fn test_backends_agree_on_fixed_sequence() {
    let ops = [
        Op::Add(1),
        Op::Add(2),
        Op::Add(3),
        Op::AddEdge(1, 2, 10),
        Op::AddEdge(2, 3, 20),
        Op::AddEdge(3, 1, 30),
        Op::AddEdge(2, 2, 40),
        Op::Remove(2),
        Op::Add(2),
        Op::AddEdge(2, 1, 50),
        Op::RemoveEdge(3, 1),
        Op::RemoveEdge(3, 1),
    ];

    let mut list: ListGraph<u8, u16> = ListGraph::new();
    let mut matrix: MatrixGraph<u8, u16> = MatrixGraph::new();
    for op in &ops {
        assert_eq!(apply(&mut list, op), apply(&mut matrix, op), "{:?}", op);
    }

    let observed = observe(&list);
    assert_eq!(observed, observe(&matrix));
    assert_eq!(observed.size, 3);
    assert_eq!(observed.edges, BTreeSet::from([(2, 1, 50)]));
}

proptest! {
    #[test]
    fn prop_backends_agree(ops in prop::collection::vec(op(), 0..80)) {
        let mut list: ListGraph<u8, u16> = ListGraph::new();
        let mut matrix: MatrixGraph<u8, u16> = MatrixGraph::new();
        let mut doubling: MatrixGraph<u8, u16> = MatrixGraph::with_config(
            MatrixConfig::default().with_growth(GrowthPolicy::Doubling),
        )
        .unwrap();

        for op in &ops {
            let expected = apply(&mut list, op);
            prop_assert_eq!(&expected, &apply(&mut matrix, op), "matrix diverged on {:?}", op);
            prop_assert_eq!(&expected, &apply(&mut doubling, op), "doubling diverged on {:?}", op);
        }

        let observed = observe(&list);
        prop_assert_eq!(observed.size, observed.vertices.len());
        prop_assert_eq!(observed.edge_count, observed.edges.len());
        prop_assert_eq!(&observed, &observe(&matrix));
        prop_assert_eq!(&observed, &observe(&doubling));
    }

    #[test]
    fn prop_degree_sums_to_edge_count(ops in prop::collection::vec(op(), 0..80)) {
        let mut matrix: MatrixGraph<u8, u16> = MatrixGraph::new();
        for op in &ops {
            apply(&mut matrix, op);
        }

        let out: usize = matrix.vertices().map(|v| matrix.degree(v.label()).unwrap()).sum();
        let incoming: usize = matrix.vertices().map(|v| matrix.in_degree(v.label()).unwrap()).sum();
        prop_assert_eq!(out, matrix.edge_count());
        prop_assert_eq!(incoming, matrix.edge_count());
        prop_assert!(matrix.capacity() >= matrix.slots_used());
    }
}
