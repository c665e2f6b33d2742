use rustc_hash::FxHashSet;

use crate::{
    common::TraversalCollection,
    core::{Graph, VertexType},
};

/// Outcome of a single goal-directed traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawOutcome {
    /// The goal was discovered.
    Found,
    /// The frontier was exhausted without discovering the goal.
    Exhausted,
    /// Any of the endpoints is not in the graph.
    Absent,
}

/// Goal-directed traversal from `src` looking for `dst`.
///
/// The traversal discipline is given by the collection `C`. Vertices are marked
/// as visited when they are scheduled, not when they are expanded, so every
/// vertex is pushed to the frontier at most once. The traversal stops as soon
/// as `dst` is discovered.
///
/// The `discovered` callback is called with `(from, to)` for every newly
/// discovered vertex `to`, including `dst`.
///
/// The trivial case `src == dst` is reported as found without any discovery.
pub(crate) fn raw_search<'a, V, C, F>(
    graph: &'a Graph<V>,
    src: &'a V,
    dst: &V,
    mut discovered: F,
) -> RawOutcome
where
    V: VertexType,
    C: TraversalCollection<&'a V>,
    F: FnMut(&'a V, &'a V),
{
    if !graph.contains_vertex(src) || !graph.contains_vertex(dst) {
        return RawOutcome::Absent;
    }

    if src == dst {
        return RawOutcome::Found;
    }

    let mut visited: FxHashSet<&'a V> = FxHashSet::default();
    let mut frontier = C::default();

    visited.insert(src);
    frontier.push(src);

    while let Some(vertex) = frontier.pop() {
        for next in graph.successors(vertex) {
            if !visited.insert(next) {
                continue;
            }

            discovered(vertex, next);

            if next == dst {
                #[cfg(feature = "logging")]
                log::trace!("goal discovered after visiting {} vertices", visited.len());

                return RawOutcome::Found;
            }

            frontier.push(next);
        }
    }

    #[cfg(feature = "logging")]
    log::trace!(
        "frontier exhausted after visiting {} vertices",
        visited.len()
    );

    RawOutcome::Exhausted
}
