use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wayfind_floor::NodeId;
use wayfind_geom::{Point, Polygon};
use wayfind_graph::{GraphConfig, ObstacleGraph};

// A hall of `cols` x `rows` booth tables with a POI in every aisle crossing.
fn booth_hall(cols: usize, rows: usize) -> (Vec<(NodeId, Point)>, Vec<Polygon>) {
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
    (nodes, obstacles)
}

fn bench_graph_build(c: &mut Criterion) {
    let (nodes, obstacles) = booth_hall(6, 6);

    let mut group = c.benchmark_group("wayfind-graph/build");

    group.bench_function("waypoints", |b| {
        b.iter(|| {
            let graph = ObstacleGraph::from_parts(&nodes, &obstacles, &GraphConfig::waypoints(0.25))
                .expect("graph");
            black_box(graph.edge_count());
        })
    });

    group.bench_function("obstacle_vertices", |b| {
        b.iter(|| {
            let graph = ObstacleGraph::from_parts(
                &nodes,
                &obstacles,
                &GraphConfig::obstacle_vertices(0.25),
            )
            .expect("graph");
            black_box(graph.edge_count());
        })
    });

    let graph =
        ObstacleGraph::from_parts(&nodes, &obstacles, &GraphConfig::obstacle_vertices(0.25))
            .expect("graph");
    group.bench_function("scope_splice", |b| {
        b.iter(|| {
            let mut scope = graph.scope();
            let t = scope.add_temporary(Point::new(0.5, 17.5)).expect("temp");
            black_box(scope.connect_temporary(t).expect("connect"));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_graph_build);
criterion_main!(benches);
