//! Paths produced by the traversal algorithms.
//!
//! A [`Path`] is an ordered sequence of vertices built by successive appends.
//! A [`Paths`] is an unordered collection of independent paths. Both are owned
//! values with no tie to the graph they were computed from.

use std::{fmt, slice, vec};

use rustc_hash::FxHashSet;

use crate::core::{Graph, VertexType};

/// Ordered sequence of vertices.
///
/// # Examples
///
/// ```
/// use dipath::{algo::find_path_bfs, path::is_path, Graph};
///
/// let graph = Graph::from_iter([(1, 2), (2, 3), (1, 3)]);
/// let path = find_path_bfs(&graph, &1, &3);
///
/// assert_eq!(path.as_slice(), &[1, 3]);
/// assert_eq!(path.peek(), &3);
/// assert!(is_path(&graph, &path));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V> Path<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends the vertex to the end of the path.
    pub fn push(&mut self, vertex: V) {
        self.vertices.push(vertex);
    }

    /// Returns the most recently appended vertex.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty. Check [`is_empty`](Path::is_empty) before
    /// or use [`try_peek`](Path::try_peek).
    pub fn peek(&self) -> &V {
        match self.vertices.last() {
            Some(vertex) => vertex,
            None => panic!("peek into an empty path"),
        }
    }

    pub fn try_peek(&self) -> Option<&V> {
        self.vertices.last()
    }

    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices in the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Returns an iterator over consecutive pairs of vertices, that is, the
    /// edges the path goes through.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn as_slice(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: PartialEq> Path<V> {
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }
}

impl<V: VertexType> Path<V> {
    /// Returns `true` if no vertex occurs in the path more than once.
    pub fn is_simple(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.vertices.iter().all(|vertex| seen.insert(vertex))
    }
}

impl<V> Default for Path<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<V>> for Path<V> {
    fn from(vertices: Vec<V>) -> Self {
        Self { vertices }
    }
}

impl<V> FromIterator<V> for Path<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = V;
    type IntoIter = vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

/// Collection of independent [paths](Path).
///
/// There is no guaranteed order of the paths in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths<V> {
    paths: Vec<Path<V>>,
}

impl<V> Paths<V> {
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    pub fn push(&mut self, path: Path<V>) {
        self.paths.push(path);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Path<V>> {
        self.paths.iter()
    }

    pub fn into_vec(self) -> Vec<Path<V>> {
        self.paths
    }
}

impl<V: PartialEq> Paths<V> {
    /// Returns `true` if the collection contains a path with given sequence
    /// of vertices.
    pub fn contains(&self, vertices: &[V]) -> bool {
        self.paths.iter().any(|path| path.as_slice() == vertices)
    }
}

impl<V> Default for Paths<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<Path<V>> for Paths<V> {
    fn from_iter<I: IntoIterator<Item = Path<V>>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for Paths<V> {
    type Item = Path<V>;
    type IntoIter = vec::IntoIter<Path<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Paths<V> {
    type Item = &'a Path<V>;
    type IntoIter = slice::Iter<'a, Path<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returns `true` if every consecutive pair of vertices in the path is an edge
/// in the graph.
///
/// The empty path is vacuously valid. A single-vertex path is valid if the
/// vertex is in the graph.
pub fn is_path<V: VertexType>(graph: &Graph<V>, path: &Path<V>) -> bool {
    match path.as_slice() {
        [] => true,
        [vertex] => graph.contains_vertex(vertex),
        _ => path.edges().all(|(u, v)| graph.is_edge(u, v)),
    }
}
