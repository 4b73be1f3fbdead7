use std::time::{Duration, Instant};

use johnson_apsp::algorithm::{AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult};
use johnson_apsp::graph::generators::{generate_negative_acyclic_weights, generate_random_graph};
use johnson_apsp::graph::{DirectedGraph, Graph};
use johnson_apsp::{Dijkstra, Johnson};

// Runs Dijkstra from every vertex; only meaningful on non-negative graphs
fn repeated_dijkstra(graph: &DirectedGraph<i64>) -> AllPairsResult<i64> {
    let rows: Vec<ShortestPathResult<i64>> = (0..graph.vertex_count())
        .map(|source| {
            <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::compute_shortest_paths(
                &Dijkstra,
                graph,
                source,
            )
            .expect("source is in range")
        })
        .collect();
    AllPairsResult::from_rows(rows)
}

// Function to benchmark an all-pairs algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &DirectedGraph<i64>) -> (Duration, AllPairsResult<i64>)
where
    A: AllPairsAlgorithm<i64, DirectedGraph<i64>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_all_pairs(graph).expect("generated graphs have no negative cycle");
    let duration = start.elapsed();

    let reachable = result.distances.iter().flatten().filter(|d| d.is_some()).count();
    println!("  - Found {} reachable pairs in {:?}", reachable, duration);

    (duration, result)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![100, 250, 500, 1_000, 2_000];
    let edge_factor = 4.0;
    let max_weight = 100;

    println!("=====================================================");
    println!("Benchmark: Johnson (sequential / parallel) vs repeated Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let sequential = Johnson::sequential();
    let parallel = Johnson::new();

    let mut results = Vec::new();

    for (i, &size) in graph_sizes.iter().enumerate() {
        let seed = 42 + i as u64;

        println!("\nGenerating graphs with {} vertices...", size);
        let non_negative = generate_random_graph(size, edge_factor, max_weight, seed);
        let negative = generate_negative_acyclic_weights(size, edge_factor, max_weight, seed);

        let start = Instant::now();
        let baseline = repeated_dijkstra(&non_negative);
        let dijkstra_time = start.elapsed();
        println!("  - Repeated Dijkstra took {:?}", dijkstra_time);

        let (seq_time, seq_result) = benchmark_algorithm("Johnson (sequential)", &sequential, &negative);
        let (par_time, par_result) = benchmark_algorithm("Johnson (parallel)", &parallel, &negative);
        assert_eq!(seq_result.distances, par_result.distances, "parallel run disagrees with sequential");

        let (_, non_negative_result) = benchmark_algorithm("Johnson (non-negative)", &parallel, &non_negative);
        assert_eq!(baseline.distances, non_negative_result.distances, "Johnson disagrees with Dijkstra");

        results.push((size, dijkstra_time, seq_time, par_time));

        let speedup = seq_time.as_secs_f64() / par_time.as_secs_f64();
        println!("Speedup - parallel vs sequential: {:.2}x", speedup);
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Dijkstra x N (ms)", "Johnson-Seq (ms)", "Johnson-Par (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, seq_time, par_time) in &results {
        let speedup = seq_time.as_secs_f64() / par_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15} | {:<10.2}",
            size,
            dijkstra_time.as_millis(),
            seq_time.as_millis(),
            par_time.as_millis(),
            speedup
        );
    }
}
