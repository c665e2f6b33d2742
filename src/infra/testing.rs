use thiserror::Error;

use crate::core::{Graph, VertexType};

/// Creates the six-vertex directed graph with cycles used throughout the
/// tests.
///
/// ```text
/// 1 → 2, 1 → 3, 2 → 3, 2 → 6, 3 → 4, 3 → 6, 4 → 1, 4 → 5, 5 → 3, 6 → 5
/// ```
pub fn create_scenario() -> Graph<usize> {
    let mut graph = Graph::with_capacity(6);

    graph.extend_with_vertices(1..=6);

    for (src, dst) in [
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 6),
        (3, 4),
        (3, 6),
        (4, 1),
        (4, 5),
        (5, 3),
        (6, 5),
    ] {
        graph.add_edge(src, dst);
    }

    graph
}

/// Creates a complete directed graph on vertices `0..vertex_count` without
/// self-loops.
pub fn create_complete(vertex_count: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(vertex_count);

    graph.extend_with_vertices(0..vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.add_edge(u, v);
            }
        }
    }

    graph
}

/// Creates a directed path `0 → 1 → ... → vertex_count - 1`.
pub fn create_path(vertex_count: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(vertex_count);

    graph.extend_with_vertices(0..vertex_count);

    for v in 1..vertex_count {
        graph.add_edge(v - 1, v);
    }

    graph
}

/// Creates a directed cycle `0 → 1 → ... → vertex_count - 1 → 0`.
pub fn create_cycle(vertex_count: usize) -> Graph<usize> {
    let mut graph = create_path(vertex_count);

    if vertex_count > 0 {
        graph.add_edge(vertex_count - 1, 0);
    }

    graph
}

#[cfg(test)]
pub fn to_petgraph(graph: &Graph<usize>) -> petgraph::graphmap::DiGraphMap<usize, ()> {
    let mut oracle = petgraph::graphmap::DiGraphMap::new();

    for &vertex in graph.vertices() {
        oracle.add_node(vertex);
    }

    for (&src, &dst) in graph.edges() {
        oracle.add_edge(src, dst, ());
    }

    oracle
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
    #[error("successors iterator count ({0}) is not equal to out degree ({1})")]
    SuccessorsOutDegreeMismatch(usize, usize),
    #[error("edge endpoint is not a vertex in the graph")]
    EdgeEndpointAbsent,
    #[error("edge iterated over is not reported by the edge membership query")]
    EdgeNotPresent,
}

pub fn check_consistency<V: VertexType>(graph: &Graph<V>) -> Result<(), ConsistencyCheckError> {
    let vertex_count = graph.vertices().count();
    if vertex_count != graph.vertex_count() {
        return Err(ConsistencyCheckError::VerticesVertexCountMismatch(
            vertex_count,
            graph.vertex_count(),
        ));
    }

    let edge_count = graph.edges().count();
    if edge_count != graph.edge_count() {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edge_count,
            graph.edge_count(),
        ));
    }

    let mut degree_sum = 0;

    for vertex in graph.vertices() {
        let successors_count = graph.successors(vertex).count();
        let out_degree = graph.out_degree(vertex);

        if successors_count != out_degree {
            return Err(ConsistencyCheckError::SuccessorsOutDegreeMismatch(
                successors_count,
                out_degree,
            ));
        }

        degree_sum += out_degree;
    }

    if degree_sum != graph.edge_count() {
        return Err(ConsistencyCheckError::HandshakingLemmaDirected(
            degree_sum,
            graph.edge_count(),
        ));
    }

    for (src, dst) in graph.edges() {
        if !graph.contains_vertex(src) || !graph.contains_vertex(dst) {
            return Err(ConsistencyCheckError::EdgeEndpointAbsent);
        }

        if !graph.is_edge(src, dst) {
            return Err(ConsistencyCheckError::EdgeNotPresent);
        }
    }

    Ok(())
}
