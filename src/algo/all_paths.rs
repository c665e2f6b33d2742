//! Enumerate all [simple paths](https://en.wikipedia.org/wiki/Path_(graph_theory))
//! between two vertices.
//!
//! A simple path does not repeat any vertex. Consequently, the vertices
//! excluded from one partial path must remain available for its siblings and
//! the visited state is scoped to the partial path under construction rather
//! than to the whole traversal.
//!
//! The number of simple paths can be exponential in the size of the graph and
//! so can be the running time of both variants. The order of the returned
//! paths is not specified, the two variants return the same set of paths.
//!
//! # Examples
//!
//! ```
//! use dipath::{algo::AllPaths, Graph};
//!
//! let graph = Graph::from_iter([(1, 2), (1, 3), (2, 3), (2, 4), (3, 4)]);
//! let paths = AllPaths::on(&graph).run(&1, &4);
//!
//! assert_eq!(paths.len(), 3);
//! assert!(paths.contains(&[1, 2, 3, 4]));
//! assert!(paths.contains(&[1, 2, 4]));
//! assert!(paths.contains(&[1, 3, 4]));
//! ```

use crate::{
    common::CompactIndexMap,
    core::{Graph, VertexType},
    path::{Path, Paths},
};

use super::Algo;

mod bfs;
mod dfs;

/// Returns all simple paths from `src` to `dst` using backtracking depth-first
/// search.
///
/// If `src == dst`, the only path is the one consisting of the single vertex.
/// If any of the vertices is not in the graph, the result is empty.
pub fn all_paths_dfs<V: VertexType>(graph: &Graph<V>, src: &V, dst: &V) -> Paths<V> {
    all_paths(graph, src, dst, Algo::Dfs)
}

/// Returns all simple paths from `src` to `dst` using breadth-first search
/// over partial paths.
///
/// If `src == dst`, the only path is the one consisting of the single vertex.
/// If any of the vertices is not in the graph, the result is empty.
pub fn all_paths_bfs<V: VertexType>(graph: &Graph<V>, src: &V, dst: &V) -> Paths<V> {
    all_paths(graph, src, dst, Algo::Bfs)
}

fn all_paths<V: VertexType>(graph: &Graph<V>, src: &V, dst: &V, algo: Algo) -> Paths<V> {
    let index = CompactIndexMap::new(graph);

    let (Some(src_index), Some(dst_index)) = (index.to_index(src), index.to_index(dst)) else {
        return Paths::new();
    };

    if src == dst {
        return Paths::from_iter([Path::from(vec![src.clone()])]);
    }

    let enumeration = Enumeration {
        adjacency: index.adjacency(graph),
        index,
        src: src_index,
        dst: dst_index,
    };

    let paths = match algo {
        Algo::Dfs => dfs::dfs(&enumeration),
        Algo::Bfs => bfs::bfs(&enumeration),
    };

    #[cfg(feature = "logging")]
    log::trace!("all_paths using {:?} found {} paths", algo, paths.len());

    paths
}

/// Input of the enumeration algorithms with vertices mapped to compact
/// indices, so that per-path visited sets are cheap bit sets.
struct Enumeration<'a, V> {
    index: CompactIndexMap<'a, V>,
    adjacency: Vec<Vec<usize>>,
    src: usize,
    dst: usize,
}

impl<V: Clone> Enumeration<'_, V> {
    /// Maps the partial path extended by `last` back to the graph vertices.
    fn to_path(&self, path: &[usize], last: usize) -> Path<V> {
        path.iter()
            .chain(std::iter::once(&last))
            .map(|&i| self.index[i].clone())
            .collect()
    }
}

/// Builder for the simple path enumeration.
pub struct AllPaths<'a, V> {
    graph: &'a Graph<V>,
    algo: Option<Algo>,
}

impl<'a, V> AllPaths<'a, V> {
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

impl<V: VertexType> AllPaths<'_, V> {
    /// Runs the algorithm. Depth-first search is used unless specified
    /// otherwise, because it keeps only a single partial path in memory.
    pub fn run(self, src: &V, dst: &V) -> Paths<V> {
        all_paths(self.graph, src, dst, self.algo.unwrap_or(Algo::Dfs))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use petgraph::{algo::all_simple_paths, graphmap::DiGraphMap};
    use proptest::prelude::*;

    use crate::{
        infra::{
            proptest::graph_directed,
            testing::{create_complete, create_cycle, create_scenario, to_petgraph},
        },
        path::is_path,
    };

    use super::*;

    fn as_set(paths: Paths<usize>) -> BTreeSet<Vec<usize>> {
        paths.into_iter().map(Path::into_vec).collect()
    }

    fn assert_valid(graph: &Graph<usize>, paths: &Paths<usize>, src: usize, dst: usize) {
        for path in paths {
            assert!(!path.is_empty());
            assert_eq!(path.first(), Some(&src));
            assert_eq!(path.peek(), &dst);
            assert!(is_path(graph, path), "not a path: {path}");
            assert!(path.is_simple(), "not a simple path: {path}");
        }
    }

    #[test]
    fn all_paths_dfs_scenario() {
        let graph = create_scenario();
        let paths = all_paths_dfs(&graph, &1, &6);

        assert_valid(&graph, &paths, 1, 6);
        assert!(paths.contains(&[1, 2, 6]));
        assert!(paths.contains(&[1, 3, 6]));
        assert!(paths.contains(&[1, 2, 3, 6]));
    }

    #[test]
    fn all_paths_bfs_scenario() {
        let graph = create_scenario();
        let paths = all_paths_bfs(&graph, &1, &6);

        assert_valid(&graph, &paths, 1, 6);
        assert!(paths.contains(&[1, 2, 6]));
        assert!(paths.contains(&[1, 3, 6]));
        assert!(paths.contains(&[1, 2, 3, 6]));
    }

    #[test]
    fn all_paths_scenario_exact() {
        let graph = create_scenario();
        let expected = BTreeSet::from([vec![1, 2, 6], vec![1, 3, 6], vec![1, 2, 3, 6]]);

        assert_eq!(as_set(all_paths_dfs(&graph, &1, &6)), expected);
        assert_eq!(as_set(all_paths_bfs(&graph, &1, &6)), expected);
    }

    #[test]
    fn all_paths_through_cycle() {
        let graph = create_scenario();
        let expected = BTreeSet::from([vec![6, 5, 3, 4, 1, 2]]);

        assert_eq!(as_set(all_paths_dfs(&graph, &6, &2)), expected);
        assert_eq!(as_set(all_paths_bfs(&graph, &6, &2)), expected);
    }

    #[test]
    fn all_paths_complete() {
        let graph = create_complete(5);

        // Any ordered selection of the remaining three vertices forms a path.
        let expected = 1 + 3 + 3 * 2 + 3 * 2 * 1;

        assert_eq!(all_paths_dfs(&graph, &0, &4).len(), expected);
        assert_eq!(all_paths_bfs(&graph, &0, &4).len(), expected);
    }

    #[test]
    fn all_paths_trivial() {
        let graph = create_cycle(3);

        for paths in [all_paths_dfs(&graph, &1, &1), all_paths_bfs(&graph, &1, &1)] {
            assert_eq!(as_set(paths), BTreeSet::from([vec![1]]));
        }
    }

    #[test]
    fn all_paths_unreachable() {
        let mut graph = create_scenario();
        graph.add_vertex(7);

        assert!(all_paths_dfs(&graph, &1, &7).is_empty());
        assert!(all_paths_bfs(&graph, &7, &1).is_empty());
    }

    #[test]
    fn all_paths_absent() {
        let graph = create_scenario();

        assert!(all_paths_dfs(&graph, &1, &9).is_empty());
        assert!(all_paths_bfs(&graph, &9, &9).is_empty());
    }

    #[test]
    fn all_paths_self_loops_ignored() {
        let mut graph = Graph::new();
        graph.extend_with_edges([(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]);

        assert_eq!(as_set(all_paths_dfs(&graph, &0, &2)), BTreeSet::from([vec![0, 1, 2]]));
        assert_eq!(as_set(all_paths_bfs(&graph, &0, &2)), BTreeSet::from([vec![0, 1, 2]]));
    }

    #[test]
    fn builder_algo() {
        let graph = create_scenario();

        assert_eq!(
            as_set(AllPaths::on(&graph).run(&4, &6)),
            as_set(AllPaths::on(&graph).bfs().run(&4, &6))
        );
        assert_eq!(
            as_set(AllPaths::on(&graph).dfs().run(&4, &6)),
            as_set(AllPaths::on(&graph).algo(Algo::Bfs).run(&4, &6))
        );
    }

    proptest! {
        #[test]
        fn proptest_all_paths_dfs_bfs_agree(graph in graph_directed().max_size(8).density(0.3), src in 0..8usize, dst in 0..8usize) {
            let dfs = all_paths_dfs(&graph, &src, &dst);
            let bfs = all_paths_bfs(&graph, &src, &dst);

            assert_valid(&graph, &dfs, src, dst);
            assert_valid(&graph, &bfs, src, dst);

            prop_assert_eq!(dfs.len(), bfs.len());
            prop_assert_eq!(as_set(dfs), as_set(bfs));
        }

        #[test]
        fn proptest_all_paths_petgraph(graph in graph_directed().max_size(8).density(0.3), src in 0..8usize, dst in 0..8usize) {
            prop_assume!(src != dst);
            prop_assume!(graph.contains_vertex(&src) && graph.contains_vertex(&dst));

            let oracle: DiGraphMap<usize, ()> = to_petgraph(&graph);
            let expected = all_simple_paths::<Vec<_>, _>(&oracle, src, dst, 0, None)
                .collect::<BTreeSet<_>>();

            prop_assert_eq!(as_set(all_paths_dfs(&graph, &src, &dst)), expected);
        }
    }
}
