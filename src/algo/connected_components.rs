//! Find [strongly connected components] in a graph.
//!
//! See available parameters [here](StronglyConnectedComponentsBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use digraph_walk::{Graph, algo::StronglyConnectedComponents};
//!
//! let graph = Graph::from_adjacency("test", [
//!     ("a", vec!["b"]),
//!     ("b", vec!["a", "c"]),
//!     ("c", vec![]),
//! ]);
//!
//! let components = StronglyConnectedComponents::on(&graph).run()?;
//!
//! assert_eq!(components.len(), 2);
//! assert_eq!(components.component_of("b").unwrap(), ["a", "b"]);
//! assert_eq!(components.component_of("c").unwrap(), ["c"]);
//! # Ok::<(), digraph_walk::core::Error>(())
//! ```
//!
//! [strongly connected components]: https://en.wikipedia.org/wiki/Strongly_connected_component

use rustc_hash::FxHashMap;

use crate::{
    core::{Result, VertexId},
    graph::Graph,
};

mod builder;
mod kosaraju;

pub use builder::StronglyConnectedComponentsBuilder;

/// Strongly connected components of a graph.
///
/// The components partition the vertex set. They are listed in the order in
/// which the algorithm found them and each one starts with the vertex it was
/// found from.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct StronglyConnectedComponents {
    components: Vec<Vec<VertexId>>,
    membership: FxHashMap<VertexId, usize>,
}

impl StronglyConnectedComponents {
    fn new(components: Vec<Vec<VertexId>>) -> Self {
        let membership = components
            .iter()
            .enumerate()
            .flat_map(|(i, component)| component.iter().map(move |vertex| (vertex.clone(), i)))
            .collect();

        Self {
            components,
            membership,
        }
    }

    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Returns the component containing the vertex.
    pub fn component_of(&self, id: impl AsRef<str>) -> Option<&[VertexId]> {
        self.membership
            .get(id.as_ref())
            .map(|&i| self.components[i].as_slice())
    }

    pub fn into_vec(self) -> Vec<Vec<VertexId>> {
        self.components
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Vec<VertexId>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [VertexId];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}

/// Algorithm for [`StronglyConnectedComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgoStrong {
    /// [Kosaraju's
    /// algorithm](https://en.wikipedia.org/wiki/Kosaraju%27s_algorithm).
    ///
    /// Kosaraju's algorithm has two passes. The first one is a DFS on the
    /// graph recording finish times. The second one is a DFS on the
    /// transposed graph, trying the roots in descending order of the finish
    /// times from the first pass. Each tree of the second pass is one
    /// component.
    ///
    /// # Use cases
    ///
    /// * Finding groups where elements transitively depend on each other.
    Kosaraju,
}

mod algo {
    use super::AlgoStrong;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgoStrong(pub Option<AlgoStrong>);

    #[derive(Debug)]
    pub struct Kosaraju;
}

/// Returns the strongly connected components of the graph.
///
/// Shorthand for [`StronglyConnectedComponents::on`] with the default
/// algorithm.
pub fn strongly_connected_components(graph: &Graph) -> Result<Vec<Vec<VertexId>>> {
    StronglyConnectedComponents::on(graph)
        .run()
        .map(StronglyConnectedComponents::into_vec)
}

/// Returns `true` if every vertex is reachable from every other vertex.
///
/// The empty graph is considered strongly connected.
pub fn is_strongly_connected(graph: &Graph) -> Result<bool> {
    Ok(StronglyConnectedComponents::on(graph).run()?.len() <= 1)
}
