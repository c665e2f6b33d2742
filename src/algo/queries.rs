use crate::core::{Graph, VertexType};

/// Returns all vertices with no successors (sinks), in unspecified order.
pub fn no_successors<V: VertexType>(graph: &Graph<V>) -> Vec<V> {
    graph
        .vertices()
        .filter(|vertex| graph.out_degree(vertex) == 0)
        .cloned()
        .collect()
}

/// Returns all vertices `u` such that there is the edge `u → vertex`, in
/// unspecified order.
///
/// The graph does not maintain a reverse index, so the query scans successors
/// of all vertices and takes _O(V + E)_ time.
pub fn predecessors<V: VertexType>(graph: &Graph<V>, vertex: &V) -> Vec<V> {
    graph
        .vertices()
        .filter(|u| graph.is_edge(u, vertex))
        .cloned()
        .collect()
}

/// Returns `true` if for every edge `u → v` there is also the edge `v → u`.
pub fn is_symmetric<V: VertexType>(graph: &Graph<V>) -> bool {
    graph.edges().all(|(u, v)| graph.is_edge(v, u))
}
