use proptest::prelude::*;
use wayfind_floor::NodeId;
use wayfind_geom::{Point, Polygon};
use wayfind_graph::{GraphConfig, GraphStrategy, NavGraph, ObstacleGraph, VertexId};
use wayfind_planner::{plan, plan_into, PlanQuery};

fn dijkstra(graph: &impl NavGraph, start: VertexId) -> Vec<f64> {
    let n = graph.vertex_bound();
    let mut dist = vec![f64::INFINITY; n];
    let mut done = vec![false; n];
    dist[start.index()] = 0.0;

    loop {
        let next = (0..n)
            .filter(|&v| !done[v] && dist[v].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
        let Some(v) = next else { break };
        done[v] = true;
        for edge in graph.neighbors(VertexId(v as u32)) {
            let d = dist[v] + edge.weight;
            if d < dist[edge.to.index()] {
                dist[edge.to.index()] = d;
            }
        }
    }
    dist
}

fn scene() -> impl Strategy<Value = (Vec<Point>, Vec<Polygon>, GraphStrategy, f64)> {
    let nodes = prop::collection::vec((0.0f64..20.0, 0.0f64..20.0), 2..9)
        .prop_map(|v| v.into_iter().map(Point::from).collect::<Vec<_>>());
    let rects = prop::collection::vec(
        (0.0f64..16.0, 0.0f64..16.0, 1.0f64..4.0, 1.0f64..4.0),
        0..4,
    )
    .prop_map(|v| {
        v.into_iter()
            .filter_map(|(x, y, w, h)| {
                Polygon::rect(Point::new(x, y), Point::new(x + w, y + h)).ok()
            })
            .collect::<Vec<_>>()
    });
    let strategy = prop_oneof![
        Just(GraphStrategy::Waypoints),
        Just(GraphStrategy::ObstacleVertices)
    ];
    (nodes, rects, strategy, 0.0f64..0.5)
}

fn build(nodes: &[Point], obstacles: &[Polygon], strategy: GraphStrategy, radius: f64) -> ObstacleGraph {
    let nodes: Vec<(NodeId, Point)> = nodes
        .iter()
        .enumerate()
        .map(|(i, &p)| (NodeId(i as u32), p))
        .collect();
    let config = GraphConfig {
        buffer_radius: radius,
        strategy,
    };
    ObstacleGraph::from_parts(&nodes, obstacles, &config).expect("graph")
}

proptest! {
    #[test]
    fn astar_matches_dijkstra((nodes, obstacles, strategy, radius) in scene()) {
        let graph = build(&nodes, &obstacles, strategy, radius);
        let mut query = PlanQuery::new();

        for start in 0..nodes.len() {
            let start = VertexId(start as u32);
            let dist = dijkstra(&graph, start);
            for end in 0..nodes.len() {
                let path = plan_into(&graph, start, VertexId(end as u32), &mut query).expect("plan");
                match path.length() {
                    Some(length) => {
                        prop_assert!((length - dist[end]).abs() < 1e-6, "{} vs {}", length, dist[end]);
                        let vertices = path.vertices();
                        prop_assert_eq!(vertices.first(), Some(&start));
                        prop_assert_eq!(vertices.last(), Some(&VertexId(end as u32)));
                        for w in vertices.windows(2) {
                            prop_assert!(graph.neighbors(w[0]).any(|e| e.to == w[1]));
                        }
                    }
                    None => prop_assert!(dist[end].is_infinite()),
                }
            }
        }
    }

    #[test]
    fn reverse_query_reverses_the_route_exactly((nodes, obstacles, strategy, radius) in scene()) {
        let graph = build(&nodes, &obstacles, strategy, radius);
        let a = VertexId(0);
        let b = VertexId(nodes.len() as u32 - 1);

        let forward = plan(&graph, a, b).expect("plan");
        let backward = plan(&graph, b, a).expect("plan");

        prop_assert_eq!(backward, forward.reversed());
    }
}
