use crate::{core::Result, graph::Graph};

use super::{algo, kosaraju::kosaraju, AlgoStrong, StronglyConnectedComponents};

pub struct StronglyConnectedComponentsBuilder<'a, A> {
    graph: &'a Graph,
    algo: A,
}

impl StronglyConnectedComponents {
    /// Starts configuring the algorithm on the given graph.
    pub fn on(graph: &Graph) -> StronglyConnectedComponentsBuilder<'_, algo::AnyAlgo> {
        StronglyConnectedComponentsBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, A> StronglyConnectedComponentsBuilder<'a, A> {
    /// Chooses the Kosaraju's algorithm.
    ///
    /// See [`AlgoStrong::Kosaraju`] for details.
    pub fn kosaraju(self) -> StronglyConnectedComponentsBuilder<'a, algo::Kosaraju> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::Kosaraju,
        }
    }

    /// Chooses the algorithm at runtime.
    pub fn using(
        self,
        algo: AlgoStrong,
    ) -> StronglyConnectedComponentsBuilder<'a, algo::SpecificAlgoStrong> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgoStrong(Some(algo)),
        }
    }

    /// Chooses the algorithm at runtime, `None` meaning the default one.
    pub fn using_opt(
        self,
        algo: Option<AlgoStrong>,
    ) -> StronglyConnectedComponentsBuilder<'a, algo::SpecificAlgoStrong> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgoStrong(algo),
        }
    }
}

impl StronglyConnectedComponentsBuilder<'_, algo::AnyAlgo> {
    /// Runs the algorithm.
    pub fn run(self) -> Result<StronglyConnectedComponents> {
        kosaraju(self.graph).map(StronglyConnectedComponents::new)
    }
}

impl StronglyConnectedComponentsBuilder<'_, algo::Kosaraju> {
    /// Runs the algorithm.
    pub fn run(self) -> Result<StronglyConnectedComponents> {
        kosaraju(self.graph).map(StronglyConnectedComponents::new)
    }
}

impl StronglyConnectedComponentsBuilder<'_, algo::SpecificAlgoStrong> {
    /// Runs the algorithm.
    pub fn run(self) -> Result<StronglyConnectedComponents> {
        let components = match self.algo.0 {
            Some(AlgoStrong::Kosaraju) => kosaraju(self.graph)?,
            None => kosaraju(self.graph)?,
        };

        Ok(StronglyConnectedComponents::new(components))
    }
}
