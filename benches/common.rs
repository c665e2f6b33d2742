#![allow(dead_code)]

use dipath::Graph;
use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0x5d1f0b7a93c2e481;

/// Random directed graph on vertices `0..vertex_count` where each ordered pair
/// of distinct vertices is connected with probability `density`.
pub fn random_directed(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph<usize> {
    let mut graph = Graph::with_capacity(vertex_count);

    graph.extend_with_vertices(0..vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v && rng.f32() < density {
                graph.add_edge(u, v);
            }
        }
    }

    graph
}

pub fn petgraph_random_directed(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::graphmap::DiGraphMap<usize, ()> {
    let graph = random_directed(vertex_count, density, rng);
    let mut oracle = petgraph::graphmap::DiGraphMap::with_capacity(vertex_count, 0);

    for &vertex in graph.vertices() {
        oracle.add_node(vertex);
    }

    for (&src, &dst) in graph.edges() {
        oracle.add_edge(src, dst, ());
    }

    oracle
}
