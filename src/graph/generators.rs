use crate::graph::{DirectedGraph, Graph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with about `edge_factor * n` edges and weights in
/// `0..=max_weight`. Self-loops are skipped; repeated pairs keep the last weight drawn.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    seed: u64,
) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertex_count(n);
    if n < 2 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(0..=max_weight);
            insert(&mut graph, u, v, weight);
        }
    }

    graph
}

/// Generates a random directed graph that has negative edges but no negative cycle.
///
/// Each vertex draws a hidden potential `p` in `0..=max_weight`, each edge draws a base cost
/// `c >= 0`, and the stored weight is `c - p[u] + p[v]`. Any cycle sums to the sum of its base
/// costs, so no cycle is negative.
pub fn generate_negative_acyclic_weights(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    seed: u64,
) -> DirectedGraph<i64> {
    let base = generate_random_graph(n, edge_factor, max_weight, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let potentials: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=max_weight)).collect();

    let mut graph = DirectedGraph::with_vertex_count(n);
    for (u, v, cost) in base.edges() {
        insert(&mut graph, u, v, cost - potentials[u] + potentials[v]);
    }

    graph
}

/// Generates a directed grid `width x height` with edges to the right and downward.
/// Useful for checking reachability: nothing flows up or left.
pub fn generate_grid(width: usize, height: usize, weight: i64) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertex_count(width * height);

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                insert(&mut graph, current, current + 1, weight);
            }
            if y + 1 < height {
                insert(&mut graph, current, current + width, weight);
            }
        }
    }

    graph
}

// Generated endpoints always come from `0..n`, so the insert cannot fail.
fn insert(graph: &mut DirectedGraph<i64>, tail: usize, head: usize, weight: i64) {
    let inserted = graph.add_edge(tail, head, weight);
    debug_assert!(inserted.is_ok(), "generated edge {} -> {} is out of range", tail, head);
}
