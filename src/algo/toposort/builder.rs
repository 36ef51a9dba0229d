use crate::{
    core::Result,
    graph::{Graph, Order},
};

use super::{algo, dfs::dfs, Algo, TopoSort};

pub struct TopoSortBuilder<'a, A> {
    graph: &'a Graph,
    order: Order<'a>,
    algo: A,
}

impl TopoSort {
    /// Starts configuring the algorithm on the given graph.
    pub fn on(graph: &Graph) -> TopoSortBuilder<'_, algo::AnyAlgo> {
        TopoSortBuilder {
            graph,
            order: Order::Lexicographic,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, A> TopoSortBuilder<'a, A> {
    /// Chooses the DFS algorithm.
    ///
    /// See [`Algo::Dfs`] for details.
    pub fn dfs(self) -> TopoSortBuilder<'a, algo::Dfs> {
        TopoSortBuilder {
            graph: self.graph,
            order: self.order,
            algo: algo::Dfs,
        }
    }

    /// Chooses the algorithm at runtime.
    pub fn using(self, algo: Algo) -> TopoSortBuilder<'a, algo::SpecificAlgo> {
        TopoSortBuilder {
            graph: self.graph,
            order: self.order,
            algo: algo::SpecificAlgo(Some(algo)),
        }
    }

    /// Chooses the algorithm at runtime, `None` meaning the default one.
    pub fn using_opt(self, algo: Option<Algo>) -> TopoSortBuilder<'a, algo::SpecificAlgo> {
        TopoSortBuilder {
            graph: self.graph,
            order: self.order,
            algo: algo::SpecificAlgo(algo),
        }
    }

    /// Chooses the order in which the traversal roots are tried.
    ///
    /// Different orders may give different, equally valid results.
    pub fn order(self, order: Order<'a>) -> Self {
        Self { order, ..self }
    }
}

impl TopoSortBuilder<'_, algo::AnyAlgo> {
    /// Runs the algorithm.
    pub fn run(self) -> Result<TopoSort> {
        dfs(self.graph, self.order).map(|sorted| TopoSort { sorted })
    }
}

impl TopoSortBuilder<'_, algo::Dfs> {
    /// Runs the algorithm.
    pub fn run(self) -> Result<TopoSort> {
        dfs(self.graph, self.order).map(|sorted| TopoSort { sorted })
    }
}

impl TopoSortBuilder<'_, algo::SpecificAlgo> {
    /// Runs the algorithm.
    pub fn run(self) -> Result<TopoSort> {
        let sorted = match self.algo.0 {
            Some(Algo::Dfs) | None => dfs(self.graph, self.order)?,
        };

        Ok(TopoSort { sorted })
    }
}
