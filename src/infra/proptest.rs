use proptest::{collection::vec, prelude::*};

use crate::{core::VertexId, graph::Graph};

fn vertex_name(i: usize) -> VertexId {
    VertexId::new(format!("v{i}"))
}

fn build(n: usize, edges: Vec<(usize, usize)>) -> Graph {
    let mut adjacency = vec![Vec::new(); n];

    for (from, to) in edges {
        adjacency[from].push(vertex_name(to));
    }

    Graph::from_adjacency(
        "proptest",
        adjacency
            .into_iter()
            .enumerate()
            .map(|(i, adjacents)| (vertex_name(i), adjacents)),
    )
}

/// Strategy for directed graphs with `1..=max_vertices` vertices and up to
/// `max_edges` edges.
///
/// Self-loops and parallel edges may be generated.
pub fn graph_directed(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph> {
    (1..=max_vertices.max(1)).prop_flat_map(move |n| {
        vec((0..n, 0..n), 0..=max_edges).prop_map(move |edges| build(n, edges))
    })
}

/// Strategy for directed acyclic graphs with `1..=max_vertices` vertices and
/// up to `max_edges` edges.
///
/// Edges always go from a vertex with lower index to a vertex with higher
/// index. Parallel edges may be generated.
pub fn dag_directed(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph> {
    (1..=max_vertices.max(1)).prop_flat_map(move |n| {
        vec((0..n, 0..n), 0..=max_edges).prop_map(move |edges| {
            let edges = edges
                .into_iter()
                .filter(|(u, v)| u != v)
                .map(|(u, v)| (u.min(v), u.max(v)))
                .collect();

            build(n, edges)
        })
    })
}
