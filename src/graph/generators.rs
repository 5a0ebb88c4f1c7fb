use crate::graph::{ConnectionGraph, MutableGraph};
use crate::station::{StationDirectory, StationId, StationRecord};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed network with `n` stations (ids `0..n`) and
/// roughly `edge_factor * n` edges weighted in `1..=max_weight`.
///
/// The same seed always yields the same network.
pub fn random_network(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> ConnectionGraph<u64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = ConnectionGraph::new();
    if n == 0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n) as StationId;
        let v = rng.gen_range(0..n) as StationId;
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }

    graph
}

/// Generates a grid-shaped metro: `lines` parallel lines of `stops` stations each.
///
/// Stop `i` on line `l` has id `l * stops + i`, name `"Stop i"` and line id
/// `"l + 1"`. Neighbouring stops on a line are linked both ways with
/// `travel_time`; stops with the same index on adjacent lines are linked both
/// ways with `transfer_time`.
pub fn metro_grid(
    lines: usize,
    stops: usize,
    travel_time: u64,
    transfer_time: u64,
) -> (StationDirectory, ConnectionGraph<u64>) {
    let id = |line: usize, stop: usize| (line * stops + stop) as StationId;

    let records = (0..lines).flat_map(|line| {
        (0..stops).map(move |stop| {
            StationRecord::new(
                format!("Stop {}", stop),
                (line * stops + stop).to_string(),
                (line + 1).to_string(),
            )
            .with_line_name(format!("Line {}", line + 1))
        })
    });
    let directory = StationDirectory::from_records(records);

    let mut graph = ConnectionGraph::new();
    for line in 0..lines {
        for stop in 0..stops {
            if stop + 1 < stops {
                graph.add_edge(id(line, stop), id(line, stop + 1), travel_time);
                graph.add_edge(id(line, stop + 1), id(line, stop), travel_time);
            }
            if line + 1 < lines {
                graph.add_edge(id(line, stop), id(line + 1, stop), transfer_time);
                graph.add_edge(id(line + 1, stop), id(line, stop), transfer_time);
            }
        }
    }

    (directory, graph)
}
