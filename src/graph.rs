//! Directed graph with vertices identified by names.
//!
//! # Examples
//!
//! ```
//! use digraph_walk::{Graph, graph::Order};
//!
//! let graph = Graph::from_adjacency("deps", [
//!     ("serde", vec![]),
//!     ("serde_json", vec!["serde"]),
//!     ("app", vec!["serde_json", "serde"]),
//! ]);
//!
//! let names = graph
//!     .vertices(Order::Lexicographic)
//!     .into_iter()
//!     .map(|vertex| vertex.name().as_str())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(names, ["app", "serde", "serde_json"]);
//! ```

use std::mem;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    core::{Error, Result, Vertex, VertexId},
    visit::DfsState,
};

/// The order in which [`Graph::vertices`] lists the vertices.
///
/// When used as the root order of a traversal, it determines from which
/// vertex the next tree of the DFS forest starts.
#[derive(Debug, Clone, Copy, Default)]
pub enum Order<'a> {
    /// The order in which the vertices were inserted.
    Insertion,

    /// Ascending by name.
    #[default]
    Lexicographic,

    /// Descending by the finish time recorded in the given traversal state.
    ///
    /// Vertices without a finish time come last, ordered by name.
    FinishTimeDesc(&'a DfsState),
}

/// Directed graph owning its vertices.
///
/// Every name in an adjacency list is expected to be a vertex of the same
/// graph. This is not checked on insertion. Traversals report
/// [`Error::NotFound`] when they encounter such a dangling reference.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: String,
    vertices: Vec<Vertex>,
    index: FxHashMap<VertexId, usize>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates a graph from `(name, adjacents)` pairs.
    pub fn from_adjacency<I, N, A>(name: impl Into<String>, adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<VertexId>,
        A: IntoIterator,
        A::Item: Into<VertexId>,
    {
        let mut graph = Self::new(name);
        graph.extend(
            adjacency
                .into_iter()
                .map(|(name, adjacents)| Vertex::new(name, adjacents)),
        );
        graph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the total number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.index.contains_key(id.as_ref())
    }

    /// Inserts the vertex, replacing the one with the same name if present.
    ///
    /// The replaced vertex keeps its position in the insertion order.
    pub fn insert(&mut self, vertex: Vertex) -> Option<Vertex> {
        match self.index.get(vertex.name().as_str()) {
            Some(&i) => Some(mem::replace(&mut self.vertices[i], vertex)),
            None => {
                self.index.insert(vertex.name().clone(), self.vertices.len());
                self.vertices.push(vertex);
                None
            }
        }
    }

    /// Shorthand for inserting [`Vertex::new`].
    pub fn insert_with<I>(&mut self, id: impl Into<VertexId>, adjacents: I) -> Option<Vertex>
    where
        I: IntoIterator,
        I::Item: Into<VertexId>,
    {
        self.insert(Vertex::new(id, adjacents))
    }

    /// Appends an edge to the adjacency list of `from`.
    ///
    /// Only the source is required to exist.
    pub fn add_edge(&mut self, from: impl AsRef<str>, to: impl Into<VertexId>) -> Result<()> {
        let i = self.position(from.as_ref())?;
        self.vertices[i].push_adjacent(to.into());
        Ok(())
    }

    pub fn lookup(&self, id: impl AsRef<str>) -> Result<&Vertex> {
        let i = self.position(id.as_ref())?;
        Ok(&self.vertices[i])
    }

    /// Removes the vertex.
    ///
    /// Edges of other vertices pointing to the removed one are left in
    /// place.
    pub fn remove(&mut self, id: impl AsRef<str>) -> Option<Vertex> {
        let i = self.index.remove(id.as_ref())?;
        let vertex = self.vertices.remove(i);

        for position in self.index.values_mut() {
            if *position > i {
                *position -= 1;
            }
        }

        Some(vertex)
    }

    /// Returns the vertices in the given order.
    pub fn vertices(&self, order: Order<'_>) -> Vec<&Vertex> {
        let mut vertices = self.vertices.iter().collect::<Vec<_>>();

        match order {
            Order::Insertion => {}
            Order::Lexicographic => vertices.sort_by(|lhs, rhs| lhs.name().cmp(rhs.name())),
            Order::FinishTimeDesc(state) => vertices.sort_by(|lhs, rhs| {
                state
                    .finished(rhs.name())
                    .cmp(&state.finished(lhs.name()))
                    .then_with(|| lhs.name().cmp(rhs.name()))
            }),
        }

        vertices
    }

    #[doc(hidden)]
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// Returns an iterator over vertex names in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &VertexId> + '_ {
        self.vertices.iter().map(Vertex::name)
    }

    /// Returns the targets of outgoing edges of the vertex, sorted by name.
    ///
    /// Parallel edges yield the same target repeatedly.
    pub fn adjacents(&self, id: impl AsRef<str>) -> Result<Vec<&Vertex>> {
        let mut adjacents = self
            .lookup(id)?
            .adjacents()
            .iter()
            .map(|adjacent| self.lookup(adjacent))
            .collect::<Result<Vec<_>>>()?;

        adjacents.sort_by(|lhs, rhs| lhs.name().cmp(rhs.name()));
        Ok(adjacents)
    }

    /// Creates a new graph with the same vertices and all edges reversed.
    ///
    /// Parallel edges are preserved, so transposing twice gives the same
    /// adjacency multisets as the original graph.
    pub fn transpose(&self) -> Result<Graph> {
        let mut transpose = Graph::new(format!("{} transpose", self.name));
        transpose.vertices.reserve(self.vertex_count());

        for vertex in &self.vertices {
            transpose.insert(Vertex::isolated(vertex.name().clone()));
        }

        for vertex in &self.vertices {
            for adjacent in vertex.adjacents() {
                let i = transpose.position(adjacent.as_str())?;
                transpose.vertices[i].push_adjacent(vertex.name().clone());
            }
        }

        debug!(
            graph = %self.name,
            vertices = transpose.vertex_count(),
            edges = transpose.edge_count(),
            "transposed graph"
        );

        Ok(transpose)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::NotFound(id.into()))
    }
}

impl Extend<Vertex> for Graph {
    fn extend<T: IntoIterator<Item = Vertex>>(&mut self, iter: T) {
        for vertex in iter {
            self.insert(vertex);
        }
    }
}

impl FromIterator<Vertex> for Graph {
    fn from_iter<T: IntoIterator<Item = Vertex>>(iter: T) -> Self {
        let mut graph = Graph::default();
        graph.extend(iter);
        graph
    }
}
