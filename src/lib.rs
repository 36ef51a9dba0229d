//! Depth-first traversal and the algorithms built on top of it, namely
//! strongly connected components and topological sorting, on directed graphs
//! whose vertices are identified by their names.
//!
//! # Examples
//!
//! ```
//! use digraph_walk::{algo::StronglyConnectedComponents, Graph};
//!
//! let graph = Graph::from_adjacency("example", [
//!     ("a", vec!["b"]),
//!     ("b", vec!["a", "c"]),
//!     ("c", vec![]),
//! ]);
//!
//! let scc = StronglyConnectedComponents::on(&graph).run()?;
//!
//! assert_eq!(scc.len(), 2);
//! assert_eq!(scc.component_of("a"), scc.component_of("b"));
//! # Ok::<(), digraph_walk::core::Error>(())
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use crate::graph::Graph;

pub mod prelude {
    pub use crate::{
        core::{Vertex, VertexId},
        graph::{Graph, Order},
        visit::Visitor,
    };
}
