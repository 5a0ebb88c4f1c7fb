use criterion::{criterion_group, criterion_main, Criterion};
use metro_route::graph::generators::{metro_grid, random_network};
use metro_route::{
    Dijkstra, RoutePlanner, RouteQuery, ShortestPathAlgorithm, ShortestPathEngine,
    ShortestPathResult, StationKey,
};
use std::hint::black_box;

fn benchmark_dijkstra(c: &mut Criterion) {
    let graph = random_network(10_000, 3.0, 20, 42);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_random_10k", |b| {
        b.iter(|| {
            let result: ShortestPathResult<u64> = dijkstra
                .compute_shortest_paths(&graph, black_box(0))
                .expect("computation succeeds");
            black_box(result.reachable_count())
        });
    });

    let engine: ShortestPathEngine<'_, u64, _> = ShortestPathEngine::new(&graph);
    c.bench_function("engine_random_10k", |b| {
        b.iter(|| {
            let result = engine.compute_from(black_box(17)).expect("computation succeeds");
            black_box(result.distance_to(9_999))
        });
    });
}

fn benchmark_planner(c: &mut Criterion) {
    let (directory, graph) = metro_grid(20, 100, 2, 5);
    let planner: RoutePlanner<'_, u64, _> = RoutePlanner::new(&directory, &graph);
    let query = RouteQuery::new(StationKey::new("Stop 0", "1"), StationKey::new("Stop 99", "20"));

    c.bench_function("plan_grid_corner_to_corner", |b| {
        b.iter(|| {
            let route = planner.plan(black_box(&query)).expect("route exists");
            black_box(route.total_time)
        });
    });

    let queries: Vec<RouteQuery> = (0..20)
        .map(|line| {
            RouteQuery::new(
                StationKey::new("Stop 0", (line + 1).to_string()),
                StationKey::new("Stop 50", ((19 - line) + 1).to_string()),
            )
        })
        .collect();

    c.bench_function("plan_grid_batch_20", |b| {
        b.iter(|| black_box(planner.plan_batch(black_box(&queries)).len()));
    });
}

criterion_group!(benches, benchmark_dijkstra, benchmark_planner);
criterion_main!(benches);
