use tracing::debug;

use crate::{
    core::{Result, VertexId},
    graph::{Graph, Order},
    visit::Dfs,
};

pub fn kosaraju(graph: &Graph) -> Result<Vec<Vec<VertexId>>> {
    debug!(graph = %graph.name(), vertices = graph.vertex_count(), "kosaraju started");

    let finished = Dfs::on(graph).order(Order::Lexicographic).run()?;

    let transposed = graph.transpose()?;

    // The roots of the second pass must be tried in strictly descending finish
    // time of the first pass, otherwise a tree may span several components.
    let (_, forest) = Dfs::on(&transposed)
        .order(Order::FinishTimeDesc(&finished))
        .run_forest()?;

    debug!(graph = %graph.name(), components = forest.len(), "kosaraju finished");

    Ok(forest.into_trees())
}
