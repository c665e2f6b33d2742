use std::{
    collections::{hash_map, hash_set},
    iter::FusedIterator,
};

use rustc_hash::FxHashSet;

/// Iterator over the successors of a vertex, returned from
/// [`Graph::successors`](crate::core::Graph::successors).
///
/// The iterator is lazy and borrows the graph storage, no container is
/// materialized. Each successor is yielded exactly once. The order is not
/// specified, but it does not change as long as the graph is not mutated.
///
/// For a vertex that is not in the graph the iterator is empty.
#[derive(Debug)]
pub struct Successors<'a, V> {
    inner: Option<hash_set::Iter<'a, V>>,
}

impl<'a, V> Successors<'a, V> {
    pub(crate) fn new(inner: hash_set::Iter<'a, V>) -> Self {
        Self { inner: Some(inner) }
    }

    pub(crate) fn empty() -> Self {
        Self { inner: None }
    }
}

impl<V> Clone for Successors<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Successors<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner {
            Some(ref inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<V> ExactSizeIterator for Successors<'_, V> {}

impl<V> FusedIterator for Successors<'_, V> {}

/// Iterator over all vertices in a graph, returned from
/// [`Graph::vertices`](crate::core::Graph::vertices).
#[derive(Debug, Clone)]
pub struct Vertices<'a, V> {
    inner: hash_map::Keys<'a, V, FxHashSet<V>>,
}

impl<'a, V> Vertices<'a, V> {
    pub(crate) fn new(inner: hash_map::Keys<'a, V, FxHashSet<V>>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}

impl<V> FusedIterator for Vertices<'_, V> {}

/// Iterator over all edges in a graph as `(source, destination)` pairs,
/// returned from [`Graph::edges`](crate::core::Graph::edges).
#[derive(Debug)]
pub struct Edges<'a, V> {
    adjacency: hash_map::Iter<'a, V, FxHashSet<V>>,
    current: Option<(&'a V, hash_set::Iter<'a, V>)>,
}

impl<'a, V> Edges<'a, V> {
    pub(crate) fn new(adjacency: hash_map::Iter<'a, V, FxHashSet<V>>) -> Self {
        Self {
            adjacency,
            current: None,
        }
    }
}

impl<'a, V> Iterator for Edges<'a, V> {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((src, ref mut dsts)) = self.current {
                if let Some(dst) = dsts.next() {
                    return Some((src, dst));
                }
            }

            let (src, dsts) = self.adjacency.next()?;
            self.current = Some((src, dsts.iter()));
        }
    }
}

impl<V> FusedIterator for Edges<'_, V> {}
