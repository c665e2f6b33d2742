//! Directed graph over hashable vertex values with reachability, path finding
//! and simple path enumeration, each in a depth-first and a breadth-first
//! variant.
//!
//! ```
//! use dipath::{algo::HasPath, Graph};
//!
//! let mut graph = Graph::new();
//! graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);
//!
//! assert!(HasPath::on(&graph).run(&"a", &"c"));
//! assert!(!HasPath::on(&graph).bfs().run(&"a", &"d"));
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod path;

pub use crate::{
    common::Queue,
    core::Graph,
    path::{Path, Paths},
};

pub mod prelude {
    pub use crate::{
        algo::{Algo, AllPaths, FindPath, HasPath},
        core::{Graph, VertexType},
        path::{Path, Paths},
    };
}
