#![cfg(feature = "full")]

use std::sync::Arc;

use wayfind::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn venue() -> FloorPlan {
    FloorPlan::from_records(vec![
        FeatureRecord::polygon(
            "room",
            vec![p(-20.0, -20.0), p(-20.0, 30.0), p(30.0, 30.0), p(30.0, -20.0)],
        )
        .with_name("Building"),
        FeatureRecord::polygon(
            "wall",
            vec![p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)],
        ),
        FeatureRecord::point("Booth A", p(-5.0, 5.0)).with_category("food"),
        FeatureRecord::point("Booth B", p(15.0, 5.0)).with_category("tech"),
        FeatureRecord::point("Help", p(5.0, 15.0)),
    ])
    .expect("plan")
}

#[test]
fn wall_scenario_detours_through_the_waypoint() {
    let floor = venue();
    let graph = ObstacleGraph::build(&floor, &GraphConfig::waypoints(0.0)).expect("graph");

    let a = floor.node_named("booth a").expect("a").id;
    let b = floor.node_named("Booth B").expect("b").id;
    let from = graph.vertex_for_node(a).expect("vertex");
    let to = graph.vertex_for_node(b).expect("vertex");

    let path = plan(&graph, from, to).expect("plan");
    assert_eq!(path.points(), &[p(-5.0, 5.0), p(5.0, 15.0), p(15.0, 5.0)]);
    let expected = p(-5.0, 5.0).distance(p(5.0, 15.0)) + p(5.0, 15.0).distance(p(15.0, 5.0));
    assert!((path.length().expect("found") - expected).abs() < 1e-9);
}

#[test]
fn many_queries_leave_the_shared_graph_unchanged() {
    let floor = Arc::new(venue());
    let graph = Arc::new(ObstacleGraph::build(&floor, &GraphConfig::default()).expect("graph"));
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();

    let mut session = NavigationSession::new(Arc::clone(&floor), Arc::clone(&graph));
    for i in 0..20 {
        let x = -10.0 + i as f64;
        session.set_start(Endpoint::Position(p(x, -10.0))).expect("start");
        session.set_end(NodeId(1)).expect("end");
        assert_eq!(session.state(), SessionState::Ready);
        route_between(&graph, p(x, 20.0), p(x, -10.0)).expect("route");
    }

    assert_eq!(graph.vertex_count(), vertices);
    assert_eq!(graph.edge_count(), edges);
}
