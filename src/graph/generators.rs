use crate::graph::AdjacencyGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `n` vertices, roughly
/// `edges_per_vertex` outgoing edges per vertex and non-negative integer
/// weights in `0..=max_weight`.
///
/// The generator is seeded so tests and benchmarks are reproducible.
/// Self-loops are skipped; parallel edges may occur and are legal input.
pub fn random_graph(
    n: usize,
    edges_per_vertex: usize,
    max_weight: i64,
    seed: u64,
) -> Result<AdjacencyGraph<usize, i64>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let adjacency = (0..n).map(|origin| {
        let mut edges = Vec::with_capacity(edges_per_vertex);
        for _ in 0..edges_per_vertex {
            let destination = rng.gen_range(0..n);
            if destination == origin {
                continue;
            }
            edges.push((destination, rng.gen_range(0..=max_weight)));
        }
        (origin, edges)
    });

    AdjacencyGraph::from_adjacency(adjacency.collect::<Vec<_>>())
}

/// Generates a random directed graph with float weights in `0.1..100.0`,
/// wrapped in `OrderedFloat` so they satisfy the `Ord` weight bound.
pub fn random_float_graph(
    n: usize,
    edges_per_vertex: usize,
    seed: u64,
) -> Result<AdjacencyGraph<usize, OrderedFloat<f64>>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let adjacency = (0..n).map(|origin| {
        let mut edges = Vec::with_capacity(edges_per_vertex);
        for _ in 0..edges_per_vertex {
            let destination = rng.gen_range(0..n);
            if destination == origin {
                continue;
            }
            edges.push((destination, OrderedFloat(rng.gen_range(0.1..100.0))));
        }
        (origin, edges)
    });

    AdjacencyGraph::from_adjacency(adjacency.collect::<Vec<_>>())
}
