//! Find a single path between two vertices.
//!
//! The search records for every discovered vertex the vertex it was discovered
//! from. When the goal is discovered, the path is reconstructed by following
//! these links back to the source.
//!
//! The path found by [breadth-first search](find_path_bfs) has the minimal
//! number of edges among all paths between the two vertices. The path found by
//! [depth-first search](find_path_dfs) is arbitrary, though still simple.
//!
//! # Examples
//!
//! ```
//! use dipath::{algo::FindPath, Graph};
//!
//! let graph = Graph::from_iter([
//!     ("Prague", "Vienna"),
//!     ("Prague", "Nuremberg"),
//!     ("Nuremberg", "Munich"),
//!     ("Vienna", "Munich"),
//!     ("Munich", "Florence"),
//!     ("Vienna", "Florence"),
//!     ("Florence", "Rome"),
//! ]);
//!
//! let path = FindPath::on(&graph).run(&"Prague", &"Rome");
//!
//! assert_eq!(path.edge_count(), 3);
//! println!("{path}");
//! ```

use rustc_hash::FxHashMap;

use crate::{
    common::{Queue, Stack, TraversalCollection},
    core::{Graph, VertexType},
    path::Path,
};

use super::{
    raw::{raw_search, RawOutcome},
    Algo,
};

/// Returns a path from `src` to `dst` found by depth-first search, or an empty
/// path if `dst` is not reachable.
pub fn find_path_dfs<V: VertexType>(graph: &Graph<V>, src: &V, dst: &V) -> Path<V> {
    find_path::<_, Stack<_>>(graph, src, dst)
}

/// Returns a path from `src` to `dst` with the minimal number of edges, or an
/// empty path if `dst` is not reachable.
pub fn find_path_bfs<V: VertexType>(graph: &Graph<V>, src: &V, dst: &V) -> Path<V> {
    find_path::<_, Queue<_>>(graph, src, dst)
}

fn find_path<'a, V, C>(graph: &'a Graph<V>, src: &'a V, dst: &'a V) -> Path<V>
where
    V: VertexType,
    C: TraversalCollection<&'a V>,
{
    let mut pred: FxHashMap<&'a V, &'a V> = FxHashMap::default();

    let outcome = raw_search::<_, C, _>(graph, src, dst, |from, to| {
        pred.insert(to, from);
    });

    match outcome {
        RawOutcome::Found => reconstruct(&pred, src, dst),
        RawOutcome::Exhausted | RawOutcome::Absent => Path::new(),
    }
}

/// Walks the predecessor links from `dst` back to `src` and returns the path in
/// the forward direction.
fn reconstruct<V: VertexType>(pred: &FxHashMap<&V, &V>, src: &V, dst: &V) -> Path<V> {
    let mut backwards = vec![dst];
    let mut curr = dst;

    while curr != src {
        // Every discovered vertex except the source has a predecessor and
        // the links form a tree rooted in the source.
        match pred.get(curr) {
            Some(&prev) => {
                backwards.push(prev);
                curr = prev;
            }
            None => unreachable!("broken predecessor chain"),
        }
    }

    backwards.into_iter().rev().cloned().collect()
}

/// Builder for the single-path search.
pub struct FindPath<'a, V> {
    graph: &'a Graph<V>,
    algo: Option<Algo>,
}

impl<'a, V> FindPath<'a, V> {
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

impl<V: VertexType> FindPath<'_, V> {
    /// Runs the algorithm. Breadth-first search is used unless specified
    /// otherwise, so that the path has the minimal number of edges.
    pub fn run(self, src: &V, dst: &V) -> Path<V> {
        #[cfg(feature = "logging")]
        log::trace!("find_path using {:?}", self.algo.unwrap_or(Algo::Bfs));

        match self.algo.unwrap_or(Algo::Bfs) {
            Algo::Dfs => find_path_dfs(self.graph, src, dst),
            Algo::Bfs => find_path_bfs(self.graph, src, dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use petgraph::{algo::dijkstra, graphmap::DiGraphMap};
    use proptest::prelude::*;

    use crate::{
        algo::has_path_bfs,
        infra::{
            proptest::graph_directed,
            testing::{create_complete, create_cycle, create_scenario, to_petgraph},
        },
        path::is_path,
    };

    use super::*;

    fn assert_valid(graph: &Graph<usize>, path: &Path<usize>, src: usize, dst: usize) {
        assert!(!path.is_empty());
        assert_eq!(path.first(), Some(&src));
        assert_eq!(path.peek(), &dst);
        assert!(is_path(graph, path), "not a path: {path}");
        assert!(path.is_simple(), "not a simple path: {path}");
    }

    #[test]
    fn find_path_dfs_scenario() {
        let graph = create_scenario();
        let path = find_path_dfs(&graph, &1, &6);

        assert!(!path.is_empty());
        assert_eq!(path.peek(), &6);
        assert_eq!(path.first(), Some(&1));
        assert!(is_path(&graph, &path));
    }

    #[test]
    fn find_path_bfs_scenario() {
        let graph = create_scenario();
        let path = find_path_bfs(&graph, &1, &6);

        assert!(!path.is_empty());
        assert_eq!(path.peek(), &6);
        assert!(is_path(&graph, &path));
        assert_eq!(path.edge_count(), 2);
        assert!(path.as_slice() == [1, 2, 6] || path.as_slice() == [1, 3, 6]);
    }

    #[test]
    fn find_path_bfs_shortest_in_cycle() {
        let mut graph = create_cycle(6);
        graph.add_edge(0, 3);

        let path = find_path_bfs(&graph, &0, &5);
        assert_eq!(path.as_slice(), &[0, 3, 4, 5]);
    }

    #[test]
    fn find_path_complete() {
        let graph = create_complete(5);

        assert_eq!(find_path_bfs(&graph, &1, &4).as_slice(), &[1, 4]);
        assert_valid(&graph, &find_path_dfs(&graph, &1, &4), 1, 4);
    }

    #[test]
    fn find_path_trivial() {
        let graph = create_scenario();

        assert_eq!(find_path_dfs(&graph, &3, &3).as_slice(), &[3]);
        assert_eq!(find_path_bfs(&graph, &3, &3).as_slice(), &[3]);
    }

    #[test]
    fn find_path_unreachable() {
        let mut graph = create_scenario();
        graph.add_vertex(7);

        assert!(find_path_dfs(&graph, &1, &7).is_empty());
        assert!(find_path_bfs(&graph, &1, &7).is_empty());
    }

    #[test]
    fn find_path_absent() {
        let graph = create_scenario();

        assert!(find_path_dfs(&graph, &1, &8).is_empty());
        assert!(find_path_bfs(&graph, &8, &8).is_empty());
    }

    #[test]
    fn builder_default_is_shortest() {
        let mut graph = create_cycle(6);
        graph.add_edge(0, 4);

        assert_eq!(FindPath::on(&graph).run(&0, &5).edge_count(), 2);
        assert_valid(&graph, &FindPath::on(&graph).dfs().run(&0, &5), 0, 5);
    }

    proptest! {
        #[test]
        fn proptest_find_path_valid(graph in graph_directed().max_size(32).sparse(), src in 0..32usize, dst in 0..32usize) {
            let reachable = has_path_bfs(&graph, &src, &dst);

            for path in [find_path_dfs(&graph, &src, &dst), find_path_bfs(&graph, &src, &dst)] {
                prop_assert_eq!(!path.is_empty(), reachable);

                if reachable {
                    assert_valid(&graph, &path, src, dst);
                }
            }
        }

        #[test]
        fn proptest_find_path_bfs_shortest(graph in graph_directed().max_size(32).sparse(), src in 0..32usize, dst in 0..32usize) {
            prop_assume!(graph.contains_vertex(&src) && graph.contains_vertex(&dst));

            let oracle: DiGraphMap<usize, ()> = to_petgraph(&graph);
            let dist = dijkstra(&oracle, src, Some(dst), |_| 1usize);
            let path = find_path_bfs(&graph, &src, &dst);

            match dist.get(&dst) {
                Some(&dist) => prop_assert_eq!(path.edge_count(), dist),
                None => prop_assert!(path.is_empty()),
            }
        }
    }
}
