use johnson_apsp::graph::Graph;
use johnson_apsp::io::{EdgeList, EdgeListReader};
use johnson_apsp::{Error, Johnson};
use ordered_float::OrderedFloat;
use std::io::Write;

const FIXTURE: &str = "\
4 4
1 2 1
2 3 -2
3 4 2
4 2 1
";

#[test]
fn test_reads_one_based_indices() {
    let edge_list: EdgeList<i64> = EdgeListReader::new().read(FIXTURE.as_bytes()).unwrap();

    assert_eq!(edge_list.vertex_count, 4);
    assert_eq!(edge_list.declared_edges, 4);
    assert_eq!(edge_list.edges, vec![(0, 1, 1), (1, 2, -2), (2, 3, 2), (3, 1, 1)]);

    let graph = edge_list.into_graph().unwrap();
    let result = Johnson::new().run_all_pairs(&graph).unwrap();
    assert_eq!(result.distance(0, 3), Some(1));
    assert_eq!(result.min_distance(), Some(-2));
}

#[test]
fn test_zero_based_comments_and_blank_lines() {
    let input = "# generated\n\n3 2\n0 1 5\n# skipped\n\n1 2 -1\n";
    let edge_list: EdgeList<i64> = EdgeListReader::new().one_based(false).read(input.as_bytes()).unwrap();

    assert_eq!(edge_list.edges, vec![(0, 1, 5), (1, 2, -1)]);
}

#[test]
fn test_custom_comment_prefix() {
    let input = "c pace style\n2 1\n1 2 3\n";
    let edge_list: EdgeList<i64> = EdgeListReader::new().comment_prefix("c").read(input.as_bytes()).unwrap();

    assert_eq!(edge_list.edges, vec![(0, 1, 3)]);
}

#[test]
fn test_duplicate_pair_last_write_wins() {
    let input = "2 2\n1 2 7\n1 2 4\n";
    let graph = EdgeListReader::new()
        .read::<i64, _>(input.as_bytes())
        .unwrap()
        .into_graph()
        .unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight_of(0, 1).unwrap(), 4);
}

#[test]
fn test_edge_count_mismatch_is_tolerated() {
    let input = "3 5\n1 2 1\n";
    let edge_list: EdgeList<i64> = EdgeListReader::new().read(input.as_bytes()).unwrap();

    assert_eq!(edge_list.declared_edges, 5);
    assert_eq!(edge_list.edges.len(), 1);
}

#[test]
fn test_malformed_lines_report_line_number() {
    let cases = [
        ("3\n1 2 1\n", 1),
        ("3 1\n1 2\n", 2),
        ("3 2\n1 2 1\n1 x 1\n", 3),
        ("3 1\n1 2 one\n", 2),
        ("3 1\n0 2 1\n", 2),
        ("3 1\n1 4 1\n", 2),
    ];

    for (input, expected_line) in cases {
        match EdgeListReader::new().read::<i64, _>(input.as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, expected_line, "input {:?}", input),
            other => panic!("expected parse error for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_missing_header() {
    let result = EdgeListReader::new().read::<i64, _>("# only a comment\n".as_bytes());
    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[test]
fn test_float_weights() {
    let input = "2 1\n1 2 -0.5\n";
    let edge_list: EdgeList<OrderedFloat<f64>> = EdgeListReader::new().read(input.as_bytes()).unwrap();

    assert_eq!(edge_list.edges, vec![(0, 1, OrderedFloat(-0.5))]);
}

#[test]
fn test_non_finite_float_weights_are_rejected() {
    for weight in ["inf", "-inf", "NaN"] {
        let input = format!("2 2\n1 2 1.5\n2 1 {}\n", weight);
        match EdgeListReader::new().read::<OrderedFloat<f64>, _>(input.as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3, "weight {}", weight),
            other => panic!("expected parse error for weight {}, got {:?}", weight, other),
        }
    }
}

#[test]
fn test_read_file() {
    let path = std::env::temp_dir().join(format!("johnson_apsp_edge_list_{}.txt", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
    }

    let edge_list: EdgeList<i64> = EdgeListReader::new().read_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(edge_list.edges.len(), 4);

    let missing = EdgeListReader::new().read_file::<i64, _>(&path);
    assert!(matches!(missing, Err(Error::Io(_))));
}
