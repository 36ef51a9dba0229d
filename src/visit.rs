//! Depth-first traversal of a [`Graph`].
//!
//! The traversal is **iterative**, that is, it doesn't use recursion. It keeps
//! an explicit stack of frames, each holding a vertex and a cursor into its
//! sorted neighbors, and produces exactly the same discovery and finish order
//! as the textbook recursive formulation. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; traversal state lives in [`DfsState`], separately from the
//!   graph, so independent passes over the same graph don't interfere,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! Neighbors are always explored in lexicographic order of their names and
//! roots in the [order](crate::graph::Order) chosen by the caller, which makes
//! all results reproducible.

pub mod dfs;

pub(crate) mod raw;

#[doc(inline)]
pub use self::dfs::{Dfs, DfsEvents, DfsForest};

use rustc_hash::FxHashMap;

use crate::{core::VertexId, graph::Graph};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows passing the visitor
    /// around without lifetime problems.
    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a Graph) -> Iter<'a, Self>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &Graph) -> IntoIter<'_, Self>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V> {
    visitor: &'a mut V,
    graph: &'a Graph,
}

impl<'a, V> Iterator for Iter<'a, V>
where
    V: Visitor,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V> {
    visitor: V,
    graph: &'a Graph,
}

impl<'a, V> Iterator for IntoIter<'a, V>
where
    V: Visitor,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Strictly monotonically increasing numbering of graph traversal events.
///
/// The clock of a pass ticks once when a vertex is discovered and once when
/// it is finished, starting from 1. A pass over `n` vertices therefore uses
/// times `1..=2n`, all distinct across the whole forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

/// Visitation status of a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,

    /// Discovered and still on the traversal stack.
    Gray,

    /// Finished, all its descendants were finished too.
    Black,
}

/// Traversal bookkeeping of a single vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexState {
    pub color: Color,

    /// The vertex from which this one was discovered, `None` for roots.
    pub parent: Option<VertexId>,

    pub discovered: Option<Time>,
    pub finished: Option<Time>,
}

/// Traversal context of one DFS pass.
///
/// Maps vertex names to their [`VertexState`] and holds the pass clock.
/// Vertices that the pass has not reached yet have no entry and are reported
/// as [white](Color::White).
///
/// A state can only be used by a single pass. Starting another pass on it
/// fails with [`Error::InvalidState`](crate::core::Error::InvalidState) until
/// [`reset`](DfsState::reset) is called.
#[derive(Debug, Clone, Default)]
pub struct DfsState {
    states: FxHashMap<VertexId, VertexState>,
    clock: usize,
}

impl DfsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            clock: 0,
        }
    }

    pub fn state(&self, id: impl AsRef<str>) -> Option<&VertexState> {
        self.states.get(id.as_ref())
    }

    pub fn color(&self, id: impl AsRef<str>) -> Color {
        self.state(id).map(|state| state.color).unwrap_or_default()
    }

    pub fn parent(&self, id: impl AsRef<str>) -> Option<&VertexId> {
        self.state(id).and_then(|state| state.parent.as_ref())
    }

    pub fn discovered(&self, id: impl AsRef<str>) -> Option<Time> {
        self.state(id).and_then(|state| state.discovered)
    }

    pub fn finished(&self, id: impl AsRef<str>) -> Option<Time> {
        self.state(id).and_then(|state| state.finished)
    }

    /// Returns the time of the last event, `Time(0)` if there was none.
    pub fn time(&self) -> Time {
        Time(self.clock)
    }

    /// Returns the number of discovered vertices.
    pub fn discovered_count(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no pass has used this state yet.
    pub fn is_fresh(&self) -> bool {
        self.clock == 0 && self.states.is_empty()
    }

    /// Forgets everything recorded by the previous pass.
    pub fn reset(&mut self) {
        self.states.clear();
        self.clock = 0;
    }

    /// Returns an iterator over all discovered vertices and their state, in
    /// arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &VertexState)> + '_ {
        self.states.iter()
    }

    pub(crate) fn open(&mut self, id: &VertexId, parent: Option<VertexId>) -> Time {
        self.clock += 1;
        let time = Time(self.clock);

        let state = self.states.entry(id.clone()).or_default();
        state.color = Color::Gray;
        state.parent = parent;
        state.discovered = Some(time);

        time
    }

    pub(crate) fn close(&mut self, id: &VertexId) -> Time {
        self.clock += 1;
        let time = Time(self.clock);

        let state = self.states.entry(id.clone()).or_default();
        debug_assert_eq!(state.color, Color::Gray, "closing vertex `{id}` that is not open");
        state.color = Color::Black;
        state.finished = Some(time);

        time
    }
}

/// Depth-first search visitor event.
///
/// Use [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DfsEvent {
    /// A new vertex was discovered.
    Open {
        /// Discovered vertex.
        vertex: VertexId,

        /// Discovering time.
        time: Time,
    },

    /// An edge of the tree formed by the traversal.
    ///
    /// Always immediately followed by the [`Open`](DfsEvent::Open) event of
    /// `to`.
    TreeEdge { from: VertexId, to: VertexId },

    /// An edge to a vertex that is still on the traversal stack.
    ///
    /// Presence of a back edge indicates a cycle in the graph. Self-loops are
    /// back edges too.
    BackEdge { from: VertexId, to: VertexId },

    /// An edge to an already [closed](DfsEvent::Close) vertex.
    ///
    /// Cross edge is an edge between vertices in different "branches" of the
    /// traversal tree. Forward edge is an edge between vertices in the same
    /// "branch" of the traversal tree. Parallel edges are reported here after
    /// the first one became a tree edge.
    CrossForwardEdge { from: VertexId, to: VertexId },

    /// All edges from the vertex have been reported.
    Close {
        /// Closed vertex.
        vertex: VertexId,

        /// Closing time.
        time: Time,
    },
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::Error,
        graph::Order,
        infra::{
            proptest::graph_directed,
            testing::{create_dag, create_scc_graph},
        },
    };

    use super::*;

    macro_rules! dfs_event {
        (open, $v:expr, $t:expr) => {
            DfsEvent::Open {
                vertex: $v.into(),
                time: Time($t),
            }
        };
        (tree, ($u:expr, $v:expr)) => {
            DfsEvent::TreeEdge {
                from: $u.into(),
                to: $v.into(),
            }
        };
        (back, ($u:expr, $v:expr)) => {
            DfsEvent::BackEdge {
                from: $u.into(),
                to: $v.into(),
            }
        };
        (cross_forward, ($u:expr, $v:expr)) => {
            DfsEvent::CrossForwardEdge {
                from: $u.into(),
                to: $v.into(),
            }
        };
        (close, $v:expr, $t:expr) => {
            DfsEvent::Close {
                vertex: $v.into(),
                time: Time($t),
            }
        };
    }

    fn assert_parenthesis(graph: &Graph, state: &DfsState) {
        for id in graph.vertex_ids() {
            let discovered = state.discovered(id).expect("vertex not discovered");
            let finished = state.finished(id).expect("vertex not finished");
            assert!(discovered < finished, "{id} finished before discovered");
            assert_eq!(state.color(id), Color::Black, "{id} not black");

            let mut ancestor = state.parent(id);
            while let Some(a) = ancestor {
                assert!(
                    state.discovered(a).unwrap() < discovered
                        && finished < state.finished(a).unwrap(),
                    "interval of {id} not nested in interval of its ancestor {a}"
                );
                ancestor = state.parent(a);
            }
        }

        let mut times = graph
            .vertex_ids()
            .flat_map(|id| [state.discovered(id).unwrap(), state.finished(id).unwrap()])
            .collect::<Vec<_>>();
        times.sort();
        times.dedup();

        assert_eq!(times.len(), 2 * graph.vertex_count(), "times are not distinct");
        assert_eq!(state.time(), Time(2 * graph.vertex_count()));
    }

    #[test]
    fn dfs_events_directed() {
        // Lexicographic roots, lexicographic neighbors.
        let graph = create_scc_graph();
        let mut state = DfsState::new();

        let events = DfsEvents::new(&mut state)
            .unwrap()
            .start_all(&graph, Order::Lexicographic)
            .into_iter(&graph)
            .take(14)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let expected = vec![
            dfs_event!(open, "a", 1),
            dfs_event!(tree, ("a", "c")),
            dfs_event!(open, "c", 2),
            dfs_event!(back, ("c", "a")),
            dfs_event!(close, "c", 3),
            dfs_event!(close, "a", 4),
            dfs_event!(open, "b", 5),
            dfs_event!(close, "b", 6),
            dfs_event!(open, "d", 7),
            dfs_event!(cross_forward, ("d", "a")),
            dfs_event!(tree, ("d", "f")),
            dfs_event!(open, "f", 8),
            dfs_event!(cross_forward, ("f", "b")),
            dfs_event!(tree, ("f", "h")),
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn dfs_events_single_root() {
        let graph = create_dag();
        let mut state = DfsState::new();

        let opened = DfsEvents::new(&mut state)
            .unwrap()
            .start("f")
            .into_iter(&graph)
            .filter_map(|event| match event.unwrap() {
                DfsEvent::Open { vertex, .. } => Some(vertex),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(opened, ["f", "g", "h"]);
        assert_eq!(state.color("a"), Color::White);
        assert_eq!(state.discovered_count(), 3);
    }

    #[test]
    fn dfs_events_self_loop_and_parallel_edges() {
        let graph = Graph::from_adjacency("test", [("a", vec!["a", "b", "b"]), ("b", vec![])]);
        let mut state = DfsState::new();

        let events = DfsEvents::new(&mut state)
            .unwrap()
            .start_all(&graph, Order::Lexicographic)
            .into_iter(&graph)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let expected = vec![
            dfs_event!(open, "a", 1),
            dfs_event!(back, ("a", "a")),
            dfs_event!(tree, ("a", "b")),
            dfs_event!(open, "b", 2),
            dfs_event!(close, "b", 3),
            dfs_event!(cross_forward, ("a", "b")),
            dfs_event!(close, "a", 4),
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn dfs_events_stop_after_error() {
        let graph = Graph::from_adjacency("test", [("a", vec!["b"]), ("b", vec!["x"])]);
        let mut state = DfsState::new();
        let mut visitor = DfsEvents::new(&mut state)
            .unwrap()
            .start_all(&graph, Order::Lexicographic);

        let mut iter = visitor.iter(&graph);
        assert_matches!(iter.next(), Some(Ok(DfsEvent::Open { .. })));
        assert_matches!(iter.next(), Some(Err(Error::NotFound(id))) if id == "x");
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn dfs_events_missing_root() {
        let graph = create_dag();
        let mut state = DfsState::new();

        let result = DfsEvents::new(&mut state)
            .unwrap()
            .start("z")
            .into_iter(&graph)
            .collect::<Result<Vec<_>, _>>();

        assert_matches!(result, Err(Error::NotFound(id)) if id == "z");
    }

    #[test]
    fn state_timestamps() {
        let graph = create_dag();
        let state = Dfs::on(&graph).run().unwrap();

        let expected = [
            ("a", 1, 16, None),
            ("b", 2, 11, Some("a")),
            ("c", 3, 10, Some("b")),
            ("f", 4, 9, Some("c")),
            ("g", 5, 6, Some("f")),
            ("h", 7, 8, Some("f")),
            ("d", 12, 13, Some("a")),
            ("e", 14, 15, Some("a")),
        ];

        for (id, discovered, finished, parent) in expected {
            assert_eq!(state.discovered(id), Some(Time(discovered)), "{id}");
            assert_eq!(state.finished(id), Some(Time(finished)), "{id}");
            assert_eq!(state.parent(id).map(VertexId::as_str), parent, "{id}");
        }

        assert_parenthesis(&graph, &state);
    }

    #[test]
    fn state_not_fresh() {
        let graph = create_dag();
        let mut state = DfsState::new();

        Dfs::on(&graph).run_in(&mut state).unwrap();
        assert!(!state.is_fresh());

        assert_matches!(
            Dfs::on(&graph).run_in(&mut state),
            Err(Error::InvalidState)
        );
        assert_matches!(DfsEvents::new(&mut state).err(), Some(Error::InvalidState));

        state.reset();
        assert!(state.is_fresh());
        assert_eq!(state.color("a"), Color::White);
        assert_eq!(state.discovered("a"), None);

        Dfs::on(&graph).run_in(&mut state).unwrap();
        assert_parenthesis(&graph, &state);
    }

    #[test]
    fn independent_passes() {
        let graph = create_scc_graph();

        let lexicographic = Dfs::on(&graph).run().unwrap();
        let insertion = Dfs::on(&graph).order(Order::Insertion).run().unwrap();

        // The first pass is not affected by the second one.
        assert_eq!(lexicographic.finished("a"), Some(Time(4)));
        assert_eq!(lexicographic.finished("e"), Some(Time(16)));
        assert_parenthesis(&graph, &lexicographic);
        assert_parenthesis(&graph, &insertion);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 100_000;
        let graph = Graph::from_adjacency(
            "path",
            (0..n).map(|i| {
                let next = (i + 1 < n).then(|| format!("v{:06}", i + 1));
                (format!("v{i:06}"), next)
            }),
        );

        let state = Dfs::on(&graph).run().unwrap();

        assert_eq!(state.finished("v000000"), Some(Time(2 * n)));
        assert_eq!(state.discovered(format!("v{:06}", n - 1)), Some(Time(n)));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dfs_parenthesis(graph in graph_directed(16, 48)) {
            let state = Dfs::on(&graph).run().unwrap();
            assert_parenthesis(&graph, &state);
        }
    }
}
