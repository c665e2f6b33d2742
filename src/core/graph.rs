use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::BuildHasherDefault,
};

use rustc_hash::{FxHashMap, FxHashSet};

use super::{
    error::{AddEdgeError, AddEdgeErrorKind},
    iter::{Edges, Successors, Vertices},
    vertex::VertexType,
};

/// Directed graph storing a set of vertices and a set of directed edges.
///
/// Every vertex owns the set of its successors. This gives near-constant
/// vertex and edge existence checks and successor enumeration proportional to
/// the out-degree of the vertex. Predecessors are not indexed, see
/// [`predecessors`](crate::algo::predecessors).
///
/// Both vertex and edge insertions are idempotent and report whether anything
/// was inserted.
///
/// # Examples
///
/// ```
/// use dipath::Graph;
///
/// let mut graph = Graph::new();
///
/// assert!(graph.add_vertex("a"));
/// assert!(graph.add_vertex("b"));
/// assert!(!graph.add_vertex("a"));
///
/// assert!(graph.add_edge("a", "b"));
/// assert!(!graph.add_edge("a", "b"));
///
/// assert!(graph.is_edge(&"a", &"b"));
/// assert!(!graph.is_edge(&"b", &"a"));
/// ```
#[derive(Clone)]
pub struct Graph<V> {
    adjacency: FxHashMap<V, FxHashSet<V>>,
    edge_count: usize,
}

impl<V> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with space for at least `vertex_count`
    /// vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity_and_hasher(
                vertex_count,
                BuildHasherDefault::default(),
            ),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns an iterator over all vertices in the graph, in unspecified
    /// order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices::new(self.adjacency.keys())
    }

    /// Returns an iterator over all edges in the graph, in unspecified order.
    pub fn edges(&self) -> Edges<'_, V> {
        Edges::new(self.adjacency.iter())
    }
}

impl<V: VertexType> Graph<V> {
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Inserts the vertex if it is not in the graph yet.
    ///
    /// Returns `true` if the vertex was newly inserted.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }

        self.adjacency.insert(vertex, HashSet::default());
        true
    }

    /// Inserts the directed edge `src → dst` if it is not in the graph yet.
    ///
    /// Returns `Ok(true)` if the edge was newly inserted and `Ok(false)` if it
    /// already existed. Fails if any of the endpoints is not in the graph.
    pub fn try_add_edge(&mut self, src: V, dst: V) -> Result<bool, AddEdgeError<V>> {
        if !self.adjacency.contains_key(&dst) {
            return Err(AddEdgeError::new(
                src,
                dst,
                AddEdgeErrorKind::DestinationAbsent,
            ));
        }

        let Some(successors) = self.adjacency.get_mut(&src) else {
            return Err(AddEdgeError::new(src, dst, AddEdgeErrorKind::SourceAbsent));
        };

        let inserted = successors.insert(dst);
        if inserted {
            self.edge_count += 1;
        }

        Ok(inserted)
    }

    /// Inserts the directed edge `src → dst` if it is not in the graph yet.
    ///
    /// Returns `true` if the edge was newly inserted.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not in the graph. Use
    /// [`try_add_edge`](Graph::try_add_edge) for a fallible version or
    /// [`add_edge_connecting`](Graph::add_edge_connecting) for inserting the
    /// missing endpoints as well.
    pub fn add_edge(&mut self, src: V, dst: V) -> bool {
        match self.try_add_edge(src, dst) {
            Ok(inserted) => inserted,
            Err(error) => panic!("{error}"),
        }
    }

    /// Inserts the directed edge `src → dst`, inserting the endpoints first if
    /// they are not in the graph.
    ///
    /// Returns `true` if the edge was newly inserted.
    pub fn add_edge_connecting(&mut self, src: V, dst: V) -> bool {
        self.add_vertex(src.clone());
        self.add_vertex(dst.clone());
        self.add_edge(src, dst)
    }

    /// Returns `true` if there is the directed edge `src → dst`.
    ///
    /// Edges are not implicitly reflexive, a self-loop needs to be added
    /// explicitly. For vertices that are not in the graph, `false` is
    /// returned.
    pub fn is_edge(&self, src: &V, dst: &V) -> bool {
        self.adjacency
            .get(src)
            .map(|successors| successors.contains(dst))
            .unwrap_or(false)
    }

    /// Returns an iterator over all vertices `w` such that there is the edge
    /// `vertex → w`.
    ///
    /// For a vertex that is not in the graph, the iterator is empty.
    pub fn successors(&self, vertex: &V) -> Successors<'_, V> {
        match self.adjacency.get(vertex) {
            Some(successors) => Successors::new(successors.iter()),
            None => Successors::empty(),
        }
    }

    /// Returns the number of successors of the vertex, or 0 if the vertex is
    /// not in the graph.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.adjacency
            .get(vertex)
            .map(|successors| successors.len())
            .unwrap_or(0)
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }

    /// Adds all edges from the iterator, inserting missing endpoints as in
    /// [`add_edge_connecting`](Graph::add_edge_connecting).
    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (src, dst) in iter {
            self.add_edge_connecting(src, dst);
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.vertex_count())
            .field("edge_count", &self.edge_count)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl<V: VertexType> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.adjacency == other.adjacency
    }
}

impl<V: VertexType> Eq for Graph<V> {}

impl<V: VertexType> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend_with_edges(iter);
        graph
    }
}
