use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wayfind_floor::NodeId;
use wayfind_geom::{Point, Polygon};
use wayfind_graph::{GraphConfig, ObstacleGraph, VertexId};
use wayfind_planner::{plan_into, route_between, PlanQuery};

fn booth_hall(cols: usize, rows: usize) -> ObstacleGraph {
    let mut nodes = Vec::new();
    let mut obstacles = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let x0 = x as f64 * 6.0 + 1.0;
            let y0 = y as f64 * 6.0 + 1.0;
            obstacles.push(
                Polygon::rect(Point::new(x0, y0), Point::new(x0 + 4.0, y0 + 4.0)).expect("table"),
            );
            nodes.push((
                NodeId(nodes.len() as u32),
                Point::new(x as f64 * 6.0, y as f64 * 6.0),
            ));
        }
    }
    ObstacleGraph::from_parts(&nodes, &obstacles, &GraphConfig::obstacle_vertices(0.25))
        .expect("graph")
}

fn bench_planner(c: &mut Criterion) {
    let graph = booth_hall(8, 8);
    let last = VertexId(63);
    let mut query = PlanQuery::new();

    let mut group = c.benchmark_group("wayfind-planner");

    group.bench_function("plan_corner_to_corner", |b| {
        b.iter(|| {
            let path = plan_into(&graph, VertexId(0), last, &mut query).expect("plan");
            black_box(path.len());
        })
    });

    group.bench_function("route_between_positions", |b| {
        b.iter(|| {
            let path = route_between(&graph, Point::new(0.5, 3.0), Point::new(44.5, 39.0))
                .expect("route");
            black_box(path.len());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
