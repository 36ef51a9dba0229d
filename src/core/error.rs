use thiserror::Error;

use super::id::VertexId;

/// The error encountered during a graph lookup or traversal.
///
/// A traversal that returned an error leaves its [`DfsState`] in an
/// unspecified state. It must be [reset](crate::visit::DfsState::reset) or
/// discarded before being used again.
///
/// [`DfsState`]: crate::visit::DfsState
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The vertex does not exist in the graph.
    ///
    /// Reported for direct lookups as well as for adjacency lists referring
    /// to an absent vertex.
    #[error("vertex `{0}` does not exist")]
    NotFound(VertexId),

    /// A traversal pass was started on a state that was already used by
    /// another pass.
    #[error("traversal state is not fresh, reset it before starting a new pass")]
    InvalidState,

    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order. The edge is the
    /// back edge found by the traversal.
    #[error("graph contains cycle closed by edge `{from}` -> `{to}`")]
    Cycle { from: VertexId, to: VertexId },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
