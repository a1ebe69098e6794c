#![cfg(feature = "serde")]

use wayfind_geom::Point;
use wayfind_graph::VertexId;
use wayfind_planner::{Route, RoutePath};

#[test]
fn route_path_serializes_with_status_tag() {
    let path = RoutePath::Found(Route {
        vertices: vec![VertexId(0), VertexId(3)],
        points: vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)],
    });

    let json = serde_json::to_value(&path).expect("serialize");
    assert_eq!(json["status"], "found");

    let back: RoutePath = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, path);

    let missing = serde_json::to_value(RoutePath::NotFound).expect("serialize");
    assert_eq!(missing["status"], "not_found");
}
