use super::id::VertexId;

/// A vertex with its outgoing edges.
///
/// The adjacency list is kept exactly as given: parallel edges and self-loops
/// are neither removed nor merged. Traversals treat them as no-ops once the
/// target has been discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: VertexId,
    adjacents: Vec<VertexId>,
}

impl Vertex {
    pub fn new<I>(name: impl Into<VertexId>, adjacents: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VertexId>,
    {
        Self {
            name: name.into(),
            adjacents: adjacents.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a vertex with no outgoing edges.
    pub fn isolated(name: impl Into<VertexId>) -> Self {
        Self {
            name: name.into(),
            adjacents: Vec::new(),
        }
    }

    pub fn name(&self) -> &VertexId {
        &self.name
    }

    /// Returns the targets of outgoing edges in the order they were added.
    pub fn adjacents(&self) -> &[VertexId] {
        &self.adjacents
    }

    pub fn out_degree(&self) -> usize {
        self.adjacents.len()
    }

    pub(crate) fn push_adjacent(&mut self, id: VertexId) {
        self.adjacents.push(id);
    }
}
