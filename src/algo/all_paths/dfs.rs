use fixedbitset::FixedBitSet;

use crate::path::Paths;

use super::Enumeration;

pub(super) fn dfs<V: Clone>(enumeration: &Enumeration<'_, V>) -> Paths<V> {
    let Enumeration {
        ref adjacency,
        src,
        dst,
        ..
    } = *enumeration;

    let mut paths = Paths::new();

    // Vertices on the current partial path. Unlike in reachability, a vertex
    // is removed from the set on backtracking, because it must stay available
    // for sibling branches.
    let mut on_path = FixedBitSet::with_capacity(adjacency.len());
    let mut path = vec![src];

    // Each stack frame holds the remaining successors of the vertex at the
    // same position in `path`.
    let mut stack = vec![adjacency[src].iter()];
    on_path.insert(src);

    while let Some(successors) = stack.last_mut() {
        match successors.next() {
            Some(&next) if next == dst => {
                // A simple path cannot go through the destination again, so
                // there is no point in extending it any further.
                paths.push(enumeration.to_path(&path, dst));
            }
            Some(&next) => {
                if !on_path.contains(next) {
                    on_path.insert(next);
                    path.push(next);
                    stack.push(adjacency[next].iter());
                }
            }
            None => {
                // All successors explored, backtrack.
                stack.pop();
                if let Some(vertex) = path.pop() {
                    on_path.set(vertex, false);
                }
            }
        }
    }

    paths
}
