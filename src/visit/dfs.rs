use std::vec;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    core::{Error, Result, VertexId},
    graph::{Graph, Order},
};

use super::{raw::RawDfs, Color, DfsEvent, DfsState, Visitor};

/// Visitor reporting [`DfsEvent`]s.
///
/// The visitor borrows the [`DfsState`] it records into, so the state can be
/// inspected after the traversal is over. Once an error is reported, the
/// visitor does not produce anything else.
///
/// # Examples
///
/// ```
/// use digraph_walk::{
///     Graph,
///     graph::Order,
///     visit::{DfsEvent, DfsEvents, DfsState, Visitor},
/// };
///
/// let graph = Graph::from_adjacency("test", [("a", vec!["b"]), ("b", vec!["a"])]);
/// let mut state = DfsState::new();
///
/// let has_back_edge = DfsEvents::new(&mut state)?
///     .start_all(&graph, Order::Lexicographic)
///     .into_iter(&graph)
///     .any(|event| matches!(event, Ok(DfsEvent::BackEdge { .. })));
///
/// assert!(has_back_edge);
/// # Ok::<(), digraph_walk::core::Error>(())
/// ```
pub struct DfsEvents<'s> {
    raw: RawDfs,
    state: &'s mut DfsState,
    roots: vec::IntoIter<VertexId>,
    failed: bool,
}

impl<'s> DfsEvents<'s> {
    /// Creates a visitor with no roots, recording into the given state.
    ///
    /// Fails with [`Error::InvalidState`] if the state was already used.
    pub fn new(state: &'s mut DfsState) -> Result<Self> {
        if !state.is_fresh() {
            return Err(Error::InvalidState);
        }

        Ok(Self {
            raw: RawDfs::new(),
            state,
            roots: Vec::new().into_iter(),
            failed: false,
        })
    }

    /// Traverses only the vertices reachable from `root`.
    pub fn start(self, root: impl Into<VertexId>) -> Self {
        self.start_multi([root.into()])
    }

    /// Traverses the whole graph, taking roots in the given order.
    pub fn start_all(self, graph: &Graph, order: Order<'_>) -> Self {
        let roots = graph
            .vertices(order)
            .into_iter()
            .map(|vertex| vertex.name().clone())
            .collect::<Vec<_>>();

        self.start_multi(roots)
    }

    /// Traverses everything reachable from the given roots, in their order.
    ///
    /// Roots that were already discovered from the previous ones are skipped.
    pub fn start_multi<I>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        Self {
            roots: roots.into_iter().collect::<Vec<_>>().into_iter(),
            ..self
        }
    }
}

impl Visitor for DfsEvents<'_> {
    type Item = Result<DfsEvent>;

    fn visit_next(&mut self, graph: &Graph) -> Option<Self::Item> {
        if self.failed {
            // An error was reported in the previous iteration, but next event
            // was still requested.
            return None;
        }

        loop {
            if !self.raw.is_done() {
                let event = self.raw.next(graph, self.state)?;
                self.failed = event.is_err();
                return Some(event);
            }

            let root = self.roots.next()?;

            if self.state.color(&root) != Color::White {
                continue;
            }

            if let Err(error) = self.raw.start(graph, self.state, root) {
                self.failed = true;
                return Some(Err(error));
            }
        }
    }
}

/// Trees of a DFS forest.
///
/// Each tree is the list of vertices discovered from its root, the root first
/// and then the descendants in the order of discovery. Trees are kept in the
/// order in which their roots were started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsForest {
    trees: Vec<Vec<VertexId>>,
    roots: FxHashMap<VertexId, usize>,
}

impl DfsForest {
    /// Returns the number of trees.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Returns the tree rooted at `root`, `None` if `root` is not a root.
    pub fn tree(&self, root: impl AsRef<str>) -> Option<&[VertexId]> {
        self.roots
            .get(root.as_ref())
            .map(|&i| self.trees[i].as_slice())
    }

    pub fn roots(&self) -> impl Iterator<Item = &VertexId> + '_ {
        self.trees.iter().map(|tree| &tree[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[VertexId]> + '_ {
        self.trees.iter().map(Vec::as_slice)
    }

    pub fn into_trees(self) -> Vec<Vec<VertexId>> {
        self.trees
    }

    fn push_root(&mut self, root: VertexId) {
        self.roots.insert(root.clone(), self.trees.len());
        self.trees.push(vec![root]);
    }

    fn push_descendant(&mut self, vertex: VertexId) {
        debug_assert!(!self.trees.is_empty(), "descendant `{vertex}` without a root");

        if let Some(tree) = self.trees.last_mut() {
            tree.push(vertex);
        }
    }
}

/// Whole-graph depth-first search.
///
/// Roots are taken in [lexicographic](Order::Lexicographic) order unless
/// specified otherwise.
///
/// # Examples
///
/// ```
/// use digraph_walk::{Graph, visit::{Dfs, Time}};
///
/// let graph = Graph::from_adjacency("test", [("a", vec!["b"]), ("b", vec![]), ("c", vec![])]);
///
/// let (state, forest) = Dfs::on(&graph).run_forest()?;
///
/// assert_eq!(state.finished("a"), Some(Time(4)));
/// assert_eq!(forest.tree("a").unwrap(), ["a", "b"]);
/// assert_eq!(forest.tree("c").unwrap(), ["c"]);
/// # Ok::<(), digraph_walk::core::Error>(())
/// ```
pub struct Dfs<'a> {
    graph: &'a Graph,
    order: Order<'a>,
}

impl<'a> Dfs<'a> {
    pub fn on(graph: &'a Graph) -> Self {
        Self {
            graph,
            order: Order::default(),
        }
    }

    /// Chooses the order in which the roots are tried.
    pub fn order(self, order: Order<'a>) -> Self {
        Self { order, ..self }
    }

    /// Runs the traversal and returns the recorded state.
    pub fn run(self) -> Result<DfsState> {
        let mut state = DfsState::with_capacity(self.graph.vertex_count());
        self.run_in(&mut state)?;
        Ok(state)
    }

    /// Runs the traversal, recording into a fresh or [reset](DfsState::reset)
    /// state.
    pub fn run_in(self, state: &mut DfsState) -> Result<()> {
        for event in DfsEvents::new(state)?
            .start_all(self.graph, self.order)
            .into_iter(self.graph)
        {
            event?;
        }

        debug!(graph = %self.graph.name(), time = state.time().0, "dfs finished");
        Ok(())
    }

    /// Runs the traversal and returns the recorded state together with the
    /// DFS forest.
    pub fn run_forest(self) -> Result<(DfsState, DfsForest)> {
        let mut state = DfsState::with_capacity(self.graph.vertex_count());
        let forest = self.run_forest_in(&mut state)?;
        Ok((state, forest))
    }

    /// Same as [`run_forest`](Dfs::run_forest), recording into a fresh or
    /// [reset](DfsState::reset) state.
    pub fn run_forest_in(self, state: &mut DfsState) -> Result<DfsForest> {
        let mut forest = DfsForest::default();
        let mut tree_edge = false;

        for event in DfsEvents::new(state)?
            .start_all(self.graph, self.order)
            .into_iter(self.graph)
        {
            match event? {
                DfsEvent::TreeEdge { .. } => tree_edge = true,
                DfsEvent::Open { vertex, .. } if tree_edge => {
                    forest.push_descendant(vertex);
                    tree_edge = false;
                }
                DfsEvent::Open { vertex, .. } => forest.push_root(vertex),
                _ => {}
            }
        }

        debug!(graph = %self.graph.name(), trees = forest.len(), "dfs forest finished");
        Ok(forest)
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::{create_dag, create_scc_graph};

    use super::*;

    #[test]
    fn forest_lexicographic() {
        let graph = create_scc_graph();
        let (_, forest) = Dfs::on(&graph).run_forest().unwrap();

        assert_eq!(
            forest.into_trees(),
            vec![
                vec!["a", "c"],
                vec!["b"],
                vec!["d", "f", "h"],
                vec!["e", "g"],
            ]
        );
    }

    #[test]
    fn forest_preorder() {
        let graph = create_dag();
        let (state, forest) = Dfs::on(&graph).run_forest().unwrap();

        assert_eq!(forest.len(), 1);
        assert_eq!(
            forest.tree("a").unwrap(),
            ["a", "b", "c", "f", "g", "h", "d", "e"]
        );
        assert_eq!(forest.tree("b"), None);

        // Pre-order is the order of discovery times.
        let tree = forest.tree("a").unwrap();
        assert!(tree
            .windows(2)
            .all(|pair| state.discovered(&pair[0]) < state.discovered(&pair[1])));
    }

    #[test]
    fn forest_isolated_vertices() {
        let graph = Graph::from_adjacency(
            "test",
            [("z", vec![]), ("y", vec!["y"]), ("x", vec![])],
        );
        let (_, forest) = Dfs::on(&graph).order(Order::Insertion).run_forest().unwrap();

        assert_eq!(forest.roots().collect::<Vec<_>>(), ["z", "y", "x"]);
        assert!(forest.iter().all(|tree| tree.len() == 1));
    }

    #[test]
    fn forest_empty_graph() {
        let graph = Graph::new("empty");
        let (state, forest) = Dfs::on(&graph).run_forest().unwrap();

        assert!(forest.is_empty());
        assert_eq!(state.time(), crate::visit::Time(0));
    }

    #[test]
    fn forest_follows_root_order() {
        let graph = create_scc_graph();
        let (_, forest) = Dfs::on(&graph).order(Order::Insertion).run_forest().unwrap();
        let roots = forest.roots().cloned().collect::<Vec<_>>();

        // `create_scc_graph` inserts the vertices in reversed alphabetical
        // order.
        assert_eq!(roots, ["h", "g"]);
        assert_eq!(forest.tree("h").unwrap(), ["h", "d", "a", "c", "f", "b"]);
        assert_eq!(forest.tree("g").unwrap(), ["g", "e"]);
    }

    #[test]
    fn start_multi_skips_discovered_roots() {
        let graph = create_dag();
        let mut state = DfsState::new();

        let opened = DfsEvents::new(&mut state)
            .unwrap()
            .start_multi(["c".into(), "f".into(), "d".into()])
            .into_iter(&graph)
            .filter_map(|event| match event.unwrap() {
                DfsEvent::Open { vertex, .. } => Some(vertex),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(opened, ["c", "f", "g", "h", "d"]);
        assert_eq!(state.color("a"), Color::White);
        assert_eq!(state.color("f"), Color::Black);
    }
}
