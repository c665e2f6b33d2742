//! Decide whether there is a directed walk between two vertices.
//!
//! Both variants decide the same relation (the reflexive transitive closure of
//! the edge relation), they differ only in the order in which the vertices are
//! discovered. A vertex is always reachable from itself.
//!
//! # Examples
//!
//! ```
//! use dipath::{algo::HasPath, Graph};
//!
//! let graph = Graph::from_iter([("a", "b"), ("b", "c"), ("d", "c")]);
//!
//! assert!(HasPath::on(&graph).run(&"a", &"c"));
//! assert!(!HasPath::on(&graph).bfs().run(&"a", &"d"));
//! ```

use crate::{
    common::{Queue, Stack},
    core::{Graph, VertexType},
};

use super::{
    raw::{raw_search, RawOutcome},
    Algo,
};

/// Returns `true` if `dst` is reachable from `src` using depth-first search.
///
/// Returns `false` if any of the vertices is not in the graph.
pub fn has_path_dfs<V: VertexType>(graph: &Graph<V>, src: &V, dst: &V) -> bool {
    raw_search::<_, Stack<_>, _>(graph, src, dst, |_, _| {}) == RawOutcome::Found
}

/// Returns `true` if `dst` is reachable from `src` using breadth-first search.
///
/// Returns `false` if any of the vertices is not in the graph.
pub fn has_path_bfs<V: VertexType>(graph: &Graph<V>, src: &V, dst: &V) -> bool {
    raw_search::<_, Queue<_>, _>(graph, src, dst, |_, _| {}) == RawOutcome::Found
}

/// Builder for the reachability decision.
pub struct HasPath<'a, V> {
    graph: &'a Graph<V>,
    algo: Option<Algo>,
}

impl<'a, V> HasPath<'a, V> {
    pub fn on(graph: &'a Graph<V>) -> Self {
        Self { graph, algo: None }
    }

    /// Chooses the traversal strategy explicitly.
    pub fn algo(self, algo: Algo) -> Self {
        Self {
            algo: Some(algo),
            ..self
        }
    }

    pub fn dfs(self) -> Self {
        self.algo(Algo::Dfs)
    }

    pub fn bfs(self) -> Self {
        self.algo(Algo::Bfs)
    }
}

impl<V: VertexType> HasPath<'_, V> {
    /// Runs the algorithm. Depth-first search is used unless specified
    /// otherwise, because its frontier tends to be smaller.
    pub fn run(self, src: &V, dst: &V) -> bool {
        #[cfg(feature = "logging")]
        log::trace!("has_path using {:?}", self.algo.unwrap_or(Algo::Dfs));

        match self.algo.unwrap_or(Algo::Dfs) {
            Algo::Dfs => has_path_dfs(self.graph, src, dst),
            Algo::Bfs => has_path_bfs(self.graph, src, dst),
        }
    }
}
