use std::collections::VecDeque;

use tracing::debug;

use crate::{
    core::{Error, Result, VertexId},
    graph::{Graph, Order},
    visit::{DfsEvent, DfsEvents, DfsState, Visitor},
};

pub fn dfs(graph: &Graph, order: Order<'_>) -> Result<Vec<VertexId>> {
    let mut state = DfsState::with_capacity(graph.vertex_count());
    let mut sorted = VecDeque::with_capacity(graph.vertex_count());

    for event in DfsEvents::new(&mut state)?
        .start_all(graph, order)
        .into_iter(graph)
    {
        match event? {
            DfsEvent::BackEdge { from, to } => {
                debug!(graph = %graph.name(), %from, %to, "toposort found cycle");
                return Err(Error::Cycle { from, to });
            }
            DfsEvent::Close { vertex, .. } => sorted.push_front(vertex),
            _ => {}
        }
    }

    debug!(graph = %graph.name(), vertices = sorted.len(), "toposort finished");
    Ok(sorted.into())
}
