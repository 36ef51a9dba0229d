use crate::{
    core::{Result, VertexId},
    graph::Graph,
    visit::{DfsEvent, DfsEvents, DfsState, Visitor},
};

/// Returns `true` if `dst` is reachable from `src` following edge directions.
///
/// Every vertex is reachable from itself.
pub fn is_path_between(
    graph: &Graph,
    src: impl Into<VertexId>,
    dst: impl AsRef<str>,
) -> Result<bool> {
    let dst = graph.lookup(dst)?.name();
    let mut state = DfsState::with_capacity(graph.vertex_count());

    for event in DfsEvents::new(&mut state)?.start(src).into_iter(graph) {
        if let DfsEvent::Open { vertex, .. } = event? {
            if &vertex == dst {
                return Ok(true);
            }
        }
    }

    Ok(false)
}
