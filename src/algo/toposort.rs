//! Find a [topologically sorted] collection of vertices on a [directed acyclic
//! graph] (DAG).
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! Roots are tried in lexicographic order by default and neighbors are
//! always explored in lexicographic order, so the result is deterministic.
//! A graph with a cycle, including a self-loop, is rejected with
//! [`Error::Cycle`](crate::core::Error::Cycle).
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use digraph_walk::{algo::TopoSort, Graph};
//!
//! // Edge direction in "must be compiled before" relation.
//! let dependency_tree = Graph::from_adjacency("crates", [
//!     ("cargo", vec![]),
//!     ("cargo_credential", vec!["cargo"]),
//!     ("serde", vec!["cargo_credential", "serde_json", "time"]),
//!     ("serde_json", vec!["cargo_credential"]),
//!     ("time", vec!["cargo_credential"]),
//!     ("cargo_util", vec!["cargo"]),
//!     ("libc", vec!["time", "cargo_util"]),
//! ]);
//!
//! let sorted = TopoSort::on(&dependency_tree).run()?;
//!
//! assert!(sorted.position("libc") < sorted.position("cargo_util"));
//! assert_eq!(sorted.into_vec().last().unwrap(), "cargo");
//! # Ok::<(), digraph_walk::core::Error>(())
//! ```

use crate::{
    core::{Result, VertexId},
    graph::Graph,
};

mod builder;
mod dfs;

pub use builder::TopoSortBuilder;

/// Topologically sorted collection of vertices on a directed acyclic graph
/// (DAG).
///
/// For every edge `u -> v`, `u` comes before `v`.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSort {
    sorted: Vec<VertexId>,
}

impl TopoSort {
    pub fn as_slice(&self) -> &[VertexId] {
        &self.sorted
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VertexId> {
        self.sorted.iter()
    }

    /// Returns the index of the vertex in the sorted sequence.
    pub fn position(&self, id: impl AsRef<str>) -> Option<usize> {
        let id = id.as_ref();
        self.sorted.iter().position(|vertex| vertex.as_str() == id)
    }

    pub fn into_vec(self) -> Vec<VertexId> {
        self.sorted
    }
}

impl IntoIterator for TopoSort {
    type Item = VertexId;
    type IntoIter = std::vec::IntoIter<VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted.into_iter()
    }
}

/// Algorithm for [`TopoSort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// A variation on the [depth-first
    /// search](https://en.wikipedia.org/wiki/Depth-first_search) traversal.
    ///
    /// Each vertex is prepended to the result at the moment it is
    /// [closed](crate::visit::DfsEvent::Close). Encountering a
    /// [back edge](crate::visit::DfsEvent::BackEdge) stops the traversal with
    /// [`Error::Cycle`](crate::core::Error::Cycle).
    ///
    /// # Use cases
    ///
    /// * Scheduling tasks that have dependencies.
    /// * Determining the order of compilation in build systems.
    Dfs,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Dfs;
}

/// Returns the vertices of the graph in topological order.
///
/// Shorthand for [`TopoSort::on`] with the default parameters.
pub fn topological_sort(graph: &Graph) -> Result<Vec<VertexId>> {
    TopoSort::on(graph).run().map(TopoSort::into_vec)
}
