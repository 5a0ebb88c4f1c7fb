use std::time::{Duration, Instant};

use env_logger::Env;
use metro_route::graph::generators::{metro_grid, random_network};
use metro_route::{
    ConnectionGraph, Dijkstra, Graph, RoutePlanner, RouteQuery, ShortestPathAlgorithm, StationKey,
};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    name: &str,
    algorithm: &A,
    graph: &ConnectionGraph<u64>,
    source: u64,
) -> Result<Duration, metro_route::Error>
where
    A: ShortestPathAlgorithm<u64, ConnectionGraph<u64>>,
{
    println!("Running {} on graph with {} stations...", name, graph.station_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Reached {} stations in {:?} ({} stale pops)",
        result.reachable_count(),
        duration,
        result.stale_pops
    );

    Ok(duration)
}

fn grid_queries(lines: usize, stops: usize, count: usize) -> Vec<RouteQuery> {
    (0..count)
        .map(|i| {
            let from_line = i % lines;
            let to_line = (i * 7 + 3) % lines;
            RouteQuery::new(
                StationKey::new(
                    format!("Stop {}", (i * 13) % stops),
                    (from_line + 1).to_string(),
                ),
                StationKey::new(
                    format!("Stop {}", (i * 31 + 5) % stops),
                    (to_line + 1).to_string(),
                ),
            )
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per station
    let edge_factor = 3.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra over random networks");
    println!("Edge factor: {} edges per station (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random network with {} stations...", size);
        let graph = random_network(size, edge_factor, 20, size as u64);
        println!(
            "Network has {} stations and {} edges",
            graph.station_count(),
            graph.edge_count()
        );

        let duration = benchmark_algorithm("Dijkstra", &dijkstra, &graph, 0)?;
        results.push((size, graph.edge_count(), duration));
    }

    println!("\n=====================================================");
    println!("Batch queries on a metro grid: sequential vs parallel");
    println!("=====================================================");

    let (lines, stops) = (40, 200);
    let (directory, graph) = metro_grid(lines, stops, 2, 5);
    let planner: RoutePlanner<'_, u64, _> = RoutePlanner::new(&directory, &graph);
    let queries = grid_queries(lines, stops, 64);

    let start = Instant::now();
    for query in &queries {
        planner.plan(query)?;
    }
    let sequential = start.elapsed();

    let start = Instant::now();
    let batch = planner.plan_batch(&queries);
    let parallel = start.elapsed();
    let failed = batch.iter().filter(|route| route.is_err()).count();

    println!("{} queries sequential: {:?}", queries.len(), sequential);
    println!("{} queries parallel:   {:?} ({} failed)", queries.len(), parallel, failed);

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Stations", "Edges", "Dijkstra (ms)");
    println!("-----------------------------------------------------");
    for (size, edges, duration) in &results {
        println!(
            "{:<10} | {:<10} | {:<15.2}",
            size,
            edges,
            duration.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
