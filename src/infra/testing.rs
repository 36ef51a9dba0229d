use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::{
    core::VertexId,
    graph::{Graph, Order},
};

/// Graph with four strongly connected components: `{a, c}`, `{b}`,
/// `{d, f, h}` and `{e, g}`.
///
/// The vertices are inserted in reversed alphabetical order so that the
/// insertion order differs from the lexicographic one.
pub fn create_scc_graph() -> Graph {
    Graph::from_adjacency(
        "scc",
        [
            ("h", vec!["d"]),
            ("g", vec!["c", "e", "f", "h"]),
            ("f", vec!["b", "h"]),
            ("e", vec!["g"]),
            ("d", vec!["a", "f"]),
            ("c", vec!["a"]),
            ("b", vec![]),
            ("a", vec!["c"]),
        ],
    )
}

/// Directed acyclic graph with a single source `a`.
pub fn create_dag() -> Graph {
    Graph::from_adjacency(
        "dag",
        [
            ("a", vec!["b", "c", "d", "e"]),
            ("b", vec!["c", "f"]),
            ("c", vec!["f", "g"]),
            ("d", vec![]),
            ("e", vec![]),
            ("f", vec!["g", "h"]),
            ("g", vec![]),
            ("h", vec![]),
        ],
    )
}

/// Returns the adjacency list of every vertex, sorted, keyed by vertex name.
///
/// Two graphs have the same vertices and the same edges (counting
/// multiplicity) iff their multisets are equal.
pub fn adjacency_multisets(graph: &Graph) -> BTreeMap<VertexId, Vec<VertexId>> {
    graph
        .vertices(Order::Insertion)
        .into_iter()
        .map(|vertex| {
            let mut adjacents = vertex.adjacents().to_vec();
            adjacents.sort();
            (vertex.name().clone(), adjacents)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("index size ({0}) is not equal to vertex count ({1})")]
    IndexVertexCountMismatch(usize, usize),
    #[error("vertex `{0}` listed but lookup fails")]
    VertexLookupFailed(VertexId),
    #[error("lookup of `{0}` returns vertex `{1}`")]
    VertexLookupMismatch(VertexId, VertexId),
    #[error("vertex `{0}` listed more than once")]
    VertexDuplicated(VertexId),
}

pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    if graph.index_len() != graph.vertex_count() {
        return Err(ConsistencyCheckError::IndexVertexCountMismatch(
            graph.index_len(),
            graph.vertex_count(),
        ));
    }

    let mut seen = BTreeSet::new();

    for id in graph.vertex_ids() {
        let vertex = graph
            .lookup(id)
            .map_err(|_| ConsistencyCheckError::VertexLookupFailed(id.clone()))?;

        if vertex.name() != id {
            return Err(ConsistencyCheckError::VertexLookupMismatch(
                id.clone(),
                vertex.name().clone(),
            ));
        }

        if !seen.insert(id) {
            return Err(ConsistencyCheckError::VertexDuplicated(id.clone()));
        }
    }

    Ok(())
}
