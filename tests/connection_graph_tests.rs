use metro_route::graph::generators::{metro_grid, random_network};
use metro_route::{ConnectionGraph, ConnectionRecord, DuplicatePolicy, Graph, MutableGraph};

#[test]
fn test_neighbors_of_unknown_station_is_empty() {
    let graph: ConnectionGraph<u64> = ConnectionGraph::from_edges([(1, 2, 4)]);

    assert_eq!(graph.neighbors(2).count(), 0);
    assert_eq!(graph.neighbors(777).count(), 0);
    assert!(graph.contains(2));
    assert!(!graph.contains(777));
}

#[test]
fn test_edges_are_directed() {
    let graph: ConnectionGraph<u64> = ConnectionGraph::from_edges([(1, 2, 4), (1, 3, 6)]);

    assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(2, 4), (3, 6)]);
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1));
    assert_eq!(graph.edge_weight(1, 3), Some(6));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.station_count(), 3);
}

#[test]
fn test_duplicate_edge_overwrites_by_default() {
    let mut graph: ConnectionGraph<u64> = ConnectionGraph::new();

    assert_eq!(graph.add_edge(1, 2, 5), None);
    assert_eq!(graph.add_edge(1, 2, 9), Some(5));
    assert_eq!(graph.add_edge(1, 2, 3), Some(9));

    assert_eq!(graph.edge_weight(1, 2), Some(3));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(1).count(), 1);
}

#[test]
fn test_duplicate_edge_keep_minimum() {
    let mut graph: ConnectionGraph<u64> =
        ConnectionGraph::with_policy(DuplicatePolicy::KeepMinimum);

    graph.add_edge(1, 2, 5);
    graph.add_edge(1, 2, 9);
    assert_eq!(graph.edge_weight(1, 2), Some(5));

    graph.add_edge(1, 2, 2);
    assert_eq!(graph.edge_weight(1, 2), Some(2));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_edge() {
    let mut graph: ConnectionGraph<u64> = ConnectionGraph::from_edges([(1, 2, 5), (1, 3, 1)]);

    assert!(graph.remove_edge(1, 2));
    assert!(!graph.remove_edge(1, 2));
    assert!(!graph.remove_edge(5, 6));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(3, 1)]);
}

#[test]
fn test_load_skips_malformed_rows() {
    let mut graph: ConnectionGraph<u64> = ConnectionGraph::new();
    let report = graph.load([
        ConnectionRecord::new("1", "2", "5").at_line(2),
        ConnectionRecord::new("x", "2", "5").at_line(3),
        ConnectionRecord::new("2", "3", "4").at_line(4),
    ]);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 3);
    assert_eq!(report.skipped[0].content, "x,2,5");
    assert!(graph.has_edge(1, 2));
    assert!(graph.has_edge(2, 3));
}

#[test]
fn test_load_rejects_negative_and_missing_durations() {
    let mut graph: ConnectionGraph<u64> = ConnectionGraph::new();
    let report = graph.load([
        ConnectionRecord::new("1", "2", "-5"),
        ConnectionRecord::new("1", "2", ""),
        ConnectionRecord::new("1", "", "5"),
        ConnectionRecord::new("1", "2", "2.5"),
    ]);

    assert_eq!(report.loaded, 0);
    assert_eq!(report.skipped.len(), 4);
    assert!(report.skipped[0].reason.contains("duration"));
    assert!(report.skipped[2].reason.contains("end id"));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_load_duplicates_follow_policy() {
    let rows = || {
        vec![
            ConnectionRecord::new("1", "2", "7"),
            ConnectionRecord::new("1", "2", "9"),
        ]
    };

    let mut overwrite: ConnectionGraph<u64> = ConnectionGraph::new();
    overwrite.load(rows());
    assert_eq!(overwrite.edge_weight(1, 2), Some(9));

    let mut minimum: ConnectionGraph<u64> =
        ConnectionGraph::with_policy(DuplicatePolicy::KeepMinimum);
    minimum.load(rows());
    assert_eq!(minimum.edge_weight(1, 2), Some(7));
}

#[test]
fn test_load_trims_fields() {
    let mut graph: ConnectionGraph<u32> = ConnectionGraph::new();
    let report = graph.load([ConnectionRecord::new(" 4 ", "5 ", " 12")]);

    assert!(report.is_clean());
    assert_eq!(graph.edge_weight(4, 5), Some(12u32));
}

#[test]
fn test_referenced_ids_cover_both_ends() {
    let graph: ConnectionGraph<u64> = ConnectionGraph::from_edges([(9, 3, 1), (3, 5, 1)]);

    assert_eq!(graph.referenced_ids().into_iter().collect::<Vec<_>>(), vec![3, 5, 9]);
}

#[test]
fn test_random_network_is_reproducible() {
    let first = random_network(100, 3.0, 10, 5);
    let second = random_network(100, 3.0, 10, 5);

    for station in 0..100 {
        assert_eq!(
            first.neighbors(station).collect::<Vec<_>>(),
            second.neighbors(station).collect::<Vec<_>>()
        );
        for (_, weight) in first.neighbors(station) {
            assert!((1..=10).contains(&weight));
        }
    }
}

#[test]
fn test_metro_grid_layout() {
    let (directory, graph) = metro_grid(3, 4, 2, 5);

    assert_eq!(directory.len(), 12);
    assert_eq!(directory.resolve("Stop 0", "1").unwrap(), 0);
    assert_eq!(directory.resolve("Stop 3", "3").unwrap(), 11);

    // Along line 1 and across to line 2
    assert_eq!(graph.edge_weight(0, 1), Some(2));
    assert_eq!(graph.edge_weight(1, 0), Some(2));
    assert_eq!(graph.edge_weight(0, 4), Some(5));
    assert!(!graph.has_edge(3, 4), "lines do not wrap");
    assert_eq!(graph.edge_count(), 2 * (3 * 3) + 2 * (2 * 4));
}
