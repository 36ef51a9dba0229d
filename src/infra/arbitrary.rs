use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{Vertex, VertexId},
    graph::{Graph, Order},
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Vertex name drawn from a small alphabet so that operations often hit
/// already present vertices.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(pub u8);

impl Name {
    pub fn to_id(self) -> VertexId {
        VertexId::new(format!("v{}", self.0 % 64))
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp {
    /// Inserts an isolated vertex, replacing the existing one.
    InsertVertex(Name),
    RemoveVertex(Index),
    /// Adds an edge between two present vertices.
    AddEdge(Index, Index),
    /// Adds an edge to a name that might not be in the graph.
    AddDanglingEdge(Index, Name),
}

impl MutOp {
    fn nth(graph: &Graph, index: Index) -> Option<VertexId> {
        let i = index.get(graph.vertex_count())?;
        graph.vertex_ids().nth(i).cloned()
    }

    pub fn apply(self, graph: &mut Graph) {
        match self {
            MutOp::InsertVertex(name) => {
                graph.insert(Vertex::isolated(name.to_id()));
            }
            MutOp::RemoveVertex(index) => {
                if let Some(id) = Self::nth(graph, index) {
                    graph.remove(&id);
                }
            }
            MutOp::AddEdge(from, to) => {
                if let (Some(from), Some(to)) = (Self::nth(graph, from), Self::nth(graph, to)) {
                    let added = graph.add_edge(&from, to);
                    debug_assert!(added.is_ok(), "source vertex `{from}` is present");
                }
            }
            MutOp::AddDanglingEdge(from, to) => {
                if let Some(from) = Self::nth(graph, from) {
                    let added = graph.add_edge(&from, to.to_id());
                    debug_assert!(added.is_ok(), "source vertex `{from}` is present");
                }
            }
        }
    }
}

#[derive(Arbitrary)]
pub struct MutOpsSeq(pub Vec<MutOp>);

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")
    }
}

/// Graph without dangling edges, built from a sequence of arbitrary
/// insertions.
pub struct ArbitraryGraph {
    graph: Graph,
}

impl ArbitraryGraph {
    pub fn into_inner(self) -> Graph {
        self.graph
    }
}

impl fmt::Debug for ArbitraryGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph::from_adjacency({:?}, [", self.graph.name())?;

        for vertex in self.graph.vertices(Order::Insertion) {
            let adjacents = vertex
                .adjacents()
                .iter()
                .map(VertexId::as_str)
                .collect::<Vec<_>>();
            writeln!(f, "    ({:?}, vec!{:?}),", vertex.name().as_str(), adjacents)?;
        }

        write!(f, "])")
    }
}

impl<'a> Arbitrary<'a> for ArbitraryGraph {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut graph = Graph::new("arbitrary");

        let n = u.int_in_range(0..=64u8)?;
        for i in 0..n {
            graph.insert(Vertex::isolated(Name(i).to_id()));
        }

        while !u.is_empty() {
            let (from, to) = <(Index, Index)>::arbitrary(u)?;
            MutOp::AddEdge(from, to).apply(&mut graph);
        }

        Ok(Self { graph })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infra::testing::check_consistency;

    #[test]
    fn is_arbitrary() {
        fn assert_arbitrary<'a, T: Arbitrary<'a>>() {}

        assert_arbitrary::<MutOpsSeq>();
        assert_arbitrary::<ArbitraryGraph>();
    }

    #[test]
    fn apply_ops() {
        let mut graph = Graph::new("test");

        let ops = MutOpsSeq(vec![
            MutOp::AddEdge(Index(0), Index(0)),
            MutOp::InsertVertex(Name(1)),
            MutOp::InsertVertex(Name(2)),
            MutOp::AddEdge(Index(0), Index(3)),
            MutOp::AddDanglingEdge(Index(1), Name(7)),
            MutOp::InsertVertex(Name(65)),
            MutOp::RemoveVertex(Index(5)),
        ]);

        for op in ops {
            op.apply(&mut graph);
            check_consistency(&graph).unwrap();
        }

        // `v65` maps to `v1` and replaces it with an isolated vertex.
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), ["v1"]);
        assert_eq!(graph.edge_count(), 0);
    }
}
