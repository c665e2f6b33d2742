use fixedbitset::FixedBitSet;

use crate::{common::Queue, path::Paths};

use super::Enumeration;

/// A partial path in the frontier together with its own visited set.
///
/// There is no call stack that would unwind the visited state, so every
/// partial path needs to carry the set of vertices it goes through.
struct Partial {
    vertex: usize,
    path: Vec<usize>,
    on_path: FixedBitSet,
}

pub(super) fn bfs<V: Clone>(enumeration: &Enumeration<'_, V>) -> Paths<V> {
    let Enumeration {
        ref adjacency,
        src,
        dst,
        ..
    } = *enumeration;

    let mut paths = Paths::new();
    let mut queue = Queue::new();

    let mut on_path = FixedBitSet::with_capacity(adjacency.len());
    on_path.insert(src);

    queue.enqueue(Partial {
        vertex: src,
        path: vec![src],
        on_path,
    });

    while !queue.is_empty() {
        let partial = queue.dequeue();

        for &next in &adjacency[partial.vertex] {
            if partial.on_path.contains(next) {
                continue;
            }

            if next == dst {
                // Other partial paths in the frontier are independent and are
                // still explored to completion.
                paths.push(enumeration.to_path(&partial.path, dst));
                continue;
            }

            let mut path = Vec::with_capacity(partial.path.len() + 1);
            path.extend_from_slice(&partial.path);
            path.push(next);

            let mut on_path = partial.on_path.clone();
            on_path.insert(next);

            queue.enqueue(Partial {
                vertex: next,
                path,
                on_path,
            });
        }
    }

    paths
}
