use johnson_apsp::data_structures::MinQueue;
use johnson_apsp::graph::{DirectedGraph, MutableGraph};
use johnson_apsp::{Dijkstra, Error};

fn sample_graph() -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertex_count(6);
    for (u, v, w) in [
        (0, 1, 10),
        (0, 2, 5),
        (1, 3, 1),
        (2, 1, 3),
        (2, 3, 9),
        (2, 4, 2),
        (3, 4, 4),
        (4, 0, 7),
        (4, 3, 6),
    ] {
        graph.add_edge(u, v, w).unwrap();
    }
    // vertex 5 stays isolated
    graph
}

#[test]
fn test_distances_and_path() {
    let graph = sample_graph();

    let (path, distances) = Dijkstra::new().run(&graph, 0, Some(3)).unwrap();
    assert_eq!(distances, vec![Some(0), Some(8), Some(5), Some(9), Some(7), None]);
    assert_eq!(path, Some(vec![0, 2, 1, 3]));
}

#[test]
fn test_no_target_yields_no_path() {
    let graph = sample_graph();

    let (path, distances) = Dijkstra::new().run(&graph, 2, None).unwrap();
    assert_eq!(path, None);
    assert_eq!(distances[2], Some(0));
    assert_eq!(distances[0], Some(9));
}

#[test]
fn test_unreachable_target_yields_none() {
    let graph = sample_graph();

    let (path, distances) = Dijkstra::new().run(&graph, 0, Some(5)).unwrap();
    assert_eq!(path, None);
    assert_eq!(distances[5], None);
}

#[test]
fn test_target_equal_to_source() {
    let graph = sample_graph();

    let (path, _) = Dijkstra::new().run(&graph, 4, Some(4)).unwrap();
    assert_eq!(path, Some(vec![4]));
}

#[test]
fn test_invalid_vertices() {
    let graph = sample_graph();

    assert!(matches!(
        Dijkstra::new().run(&graph, 6, None),
        Err(Error::InvalidVertex(6))
    ));
    assert!(matches!(
        Dijkstra::new().run(&graph, 0, Some(9)),
        Err(Error::InvalidVertex(9))
    ));
}

#[test]
fn test_min_queue_pops_smallest_first() {
    let mut queue: MinQueue<usize, i64> = MinQueue::new();
    queue.push(1, 7);
    queue.push(2, -3);
    queue.push(3, 7);
    queue.push(4, 0);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek(), Some((2, -3)));
    assert_eq!(queue.pop(), Some((2, -3)));
    assert_eq!(queue.pop(), Some((4, 0)));
    assert_eq!(queue.pop().map(|(_, p)| p), Some(7));
    assert_eq!(queue.pop().map(|(_, p)| p), Some(7));
    assert!(queue.is_empty());
}
