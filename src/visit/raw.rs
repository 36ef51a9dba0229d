use std::collections::VecDeque;

use tracing::trace;

use crate::{
    core::{Result, VertexId},
    graph::Graph,
};

use super::{Color, DfsEvent, DfsState};

struct Frame {
    vertex: VertexId,
    // Sorted by name, resolved when the vertex is opened.
    neighbors: Vec<VertexId>,
    cursor: usize,
}

/// Single-tree DFS driven by an explicit stack.
///
/// Each call to [`next`](RawDfs::next) does one step of the textbook recursive
/// procedure: either inspects the next neighbor of the vertex on top of the
/// stack or closes that vertex when it has no neighbors left.
#[derive(Default)]
pub(crate) struct RawDfs {
    stack: Vec<Frame>,
    // An edge step may produce two events (tree edge and opening of its
    // target).
    queue: VecDeque<DfsEvent>,
}

impl RawDfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.stack.is_empty() && self.queue.is_empty()
    }

    pub fn start(&mut self, graph: &Graph, state: &mut DfsState, root: VertexId) -> Result<()> {
        self.stack.clear();
        self.queue.clear();
        self.open(graph, state, root, None)
    }

    pub fn next(&mut self, graph: &Graph, state: &mut DfsState) -> Option<Result<DfsEvent>> {
        if let Some(event) = self.queue.pop_front() {
            return Some(Ok(event));
        }

        let (from, to) = {
            let frame = self.stack.last_mut()?;
            let to = frame.neighbors.get(frame.cursor).cloned();
            frame.cursor += 1;
            (frame.vertex.clone(), to)
        };

        let Some(to) = to else {
            self.stack.pop();
            let time = state.close(&from);
            trace!(vertex = %from, time = time.0, "close");
            return Some(Ok(DfsEvent::Close { vertex: from, time }));
        };

        let event = match state.color(&to) {
            Color::White => {
                if let Err(error) = self.open(graph, state, to.clone(), Some(from.clone())) {
                    return Some(Err(error));
                }

                DfsEvent::TreeEdge { from, to }
            }
            Color::Gray => DfsEvent::BackEdge { from, to },
            Color::Black => DfsEvent::CrossForwardEdge { from, to },
        };

        Some(Ok(event))
    }

    fn open(
        &mut self,
        graph: &Graph,
        state: &mut DfsState,
        vertex: VertexId,
        parent: Option<VertexId>,
    ) -> Result<()> {
        // Resolve the neighbors first so that a dangling edge fails before the
        // vertex is marked as discovered.
        let neighbors = graph
            .adjacents(&vertex)?
            .into_iter()
            .map(|neighbor| neighbor.name().clone())
            .collect();

        let time = state.open(&vertex, parent);
        trace!(vertex = %vertex, time = time.0, "open");

        self.queue.push_back(DfsEvent::Open {
            vertex: vertex.clone(),
            time,
        });
        self.stack.push(Frame {
            vertex,
            neighbors,
            cursor: 0,
        });

        Ok(())
    }
}
