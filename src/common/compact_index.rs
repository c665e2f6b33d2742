use std::{collections::HashMap, hash::BuildHasherDefault, ops::Index};

use rustc_hash::FxHashMap;

use crate::core::{Graph, VertexType};

/// Mapping from graph vertices to a contiguous sequence of indices `0..n`
/// that can be used in algorithms.
///
/// The indices allow representing sets of vertices as bit sets, which are
/// cheap to clone. This matters for algorithms that keep a separate visited set
/// for every partial path.
///
/// * memory used: _O(N)_
/// * index to vertex mapping: _O(1)_
/// * vertex to index mapping: _O(1)_ expected
#[derive(Debug)]
pub struct CompactIndexMap<'a, V> {
    vertices: Vec<&'a V>,
    indices: FxHashMap<&'a V, usize>,
}

impl<'a, V: VertexType> CompactIndexMap<'a, V> {
    /// Constructs the map of all vertices in the graph.
    pub fn new(graph: &'a Graph<V>) -> Self {
        let vertices = graph.vertices().collect::<Vec<_>>();
        let mut indices =
            HashMap::with_capacity_and_hasher(vertices.len(), BuildHasherDefault::default());

        for (index, vertex) in vertices.iter().enumerate() {
            indices.insert(*vertex, index);
        }

        Self { vertices, indices }
    }

    /// Returns the number of vertices in the map.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn to_index(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }

    pub fn to_vertex(&self, index: usize) -> Option<&'a V> {
        self.vertices.get(index).copied()
    }

    /// Returns the successor lists of all vertices in the graph expressed in
    /// compact indices. The list at position `i` belongs to the vertex with
    /// index `i`.
    pub fn adjacency(&self, graph: &Graph<V>) -> Vec<Vec<usize>> {
        self.vertices
            .iter()
            .map(|vertex| {
                graph
                    .successors(vertex)
                    .filter_map(|next| self.to_index(next))
                    .collect()
            })
            .collect()
    }
}

impl<V> Index<usize> for CompactIndexMap<'_, V> {
    type Output = V;

    fn index(&self, index: usize) -> &Self::Output {
        self.vertices[index]
    }
}
