use johnson_apsp::algorithm::dijkstra::Dijkstra;
use johnson_apsp::algorithm::johnson::Johnson;
use johnson_apsp::algorithm::traits::ShortestPathAlgorithm;
use johnson_apsp::graph::DirectedGraph;
use johnson_apsp::graph::{Graph, MutableGraph};

// Test helper function to create a grid with integer costs (10 straight, 14 diagonal)
fn create_test_grid(width: usize, height: usize) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertex_count(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 10), (1, 0, 10), (0, 1, 10), (-1, 0, 10),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 14), (1, 1, 14), (-1, 1, 14), (-1, -1, 14),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, cost).unwrap();
                }
            }
        }
    }

    graph
}

fn dijkstra_path(graph: &DirectedGraph<i64>, source: usize, target: usize) -> Option<Vec<usize>> {
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(graph, source).unwrap();
    <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::get_path(&dijkstra, &result, target)
}

fn assert_valid_path(graph: &DirectedGraph<i64>, path: &[usize], source: usize, target: usize) -> i64 {
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");

    path.windows(2)
        .map(|step| {
            assert!(graph.has_edge(step[0], step[1]), "Path should only use existing edges");
            graph.weight_of(step[0], step[1]).unwrap()
        })
        .sum()
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10);
    let source = 0;
    let target = 99;

    let path = dijkstra_path(&graph, source, target).expect("Dijkstra should construct a path");
    let cost = assert_valid_path(&graph, &path, source, target);
    assert_eq!(cost, 9 * 14);

    let all_pairs = Johnson::new().run_all_pairs(&graph).unwrap();
    assert_eq!(all_pairs.distance(source, target), Some(9 * 14));
    let johnson_path = all_pairs.path(source, target).expect("Johnson should construct a path");
    assert_eq!(assert_valid_path(&graph, &johnson_path, source, target), 9 * 14);
}

#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = create_test_grid(10, 10);

    // Wall in column 5, open only in the last two rows
    for y in 0..8 {
        let obstacle = y * 10 + 5;

        let mut edges_to_remove = Vec::new();
        for v in 0..graph.vertex_count() {
            if graph.has_edge(v, obstacle) {
                edges_to_remove.push((v, obstacle));
            }
            if graph.has_edge(obstacle, v) {
                edges_to_remove.push((obstacle, v));
            }
        }

        for (from, to) in edges_to_remove {
            graph.remove_edge(from, to).unwrap();
        }
    }

    let source = 0;
    let target = 9;

    let path = dijkstra_path(&graph, source, target).expect("Dijkstra should find a way around the wall");
    let cost = assert_valid_path(&graph, &path, source, target);
    assert!(path.iter().all(|&v| v % 10 != 5 || v / 10 >= 8), "Path must not cross the wall");

    let all_pairs = Johnson::new().run_all_pairs(&graph).unwrap();
    assert_eq!(all_pairs.distance(source, target), Some(cost));

    // Wall vertices are cut off in both directions
    assert_eq!(all_pairs.distance(source, 5), None);
    assert_eq!(all_pairs.distance(5, source), None);
    assert_eq!(all_pairs.distance(5, 5), Some(0));
}

#[test]
fn test_johnson_rows_match_dijkstra_on_grid() {
    let graph = create_test_grid(6, 5);
    let all_pairs = Johnson::sequential().run_all_pairs(&graph).unwrap();
    let dijkstra = Dijkstra::new();

    for source in 0..graph.vertex_count() {
        let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(all_pairs.distances[source], result.distances);
    }
}
