//! Queries and traversal algorithms over a [`Graph`](crate::core::Graph).
//!
//! Every traversal family is available in a depth-first and a breadth-first
//! variant, either as a free function (e.g., [`has_path_dfs`]) or through a
//! builder (e.g., [`HasPath`]) that also allows choosing the variant at
//! runtime or leaving the choice to the algorithm.
//!
//! All algorithms are read-only. The discovery state (visited sets, parent
//! maps, frontiers) lives only for the duration of a single call and the
//! results are owned values independent of the graph.

mod raw;

pub mod all_paths;
pub mod find_path;
pub mod has_path;
pub mod queries;

pub use all_paths::{all_paths_bfs, all_paths_dfs, AllPaths};
pub use find_path::{find_path_bfs, find_path_dfs, FindPath};
pub use has_path::{has_path_bfs, has_path_dfs, HasPath};
pub use queries::{is_symmetric, no_successors, predecessors};

/// Traversal strategy of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algo {
    /// [Depth-first search](https://en.wikipedia.org/wiki/Depth-first_search).
    ///
    /// Fully expands one branch before backtracking. The frontier is
    /// proportional to the depth of the search rather than its breadth.
    Dfs,

    /// [Breadth-first
    /// search](https://en.wikipedia.org/wiki/Breadth-first_search).
    ///
    /// Expands all vertices at distance _k_ from the source before any vertex
    /// at distance _k + 1_. Paths found by the search have the minimal number
    /// of edges.
    Bfs,
}
