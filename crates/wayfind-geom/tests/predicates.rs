use proptest::prelude::*;
use wayfind_geom::{
    bounding_box, distance, point_in_polygon, segment_enters_polygon, segments_intersect,
    GeomError, Point, Polygon,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn wall() -> Polygon {
    Polygon::new(vec![p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)]).expect("wall")
}

#[test]
fn polygon_drops_closing_vertex_and_duplicates() {
    let poly = Polygon::new(vec![
        p(0.0, 0.0),
        p(0.0, 0.0),
        p(4.0, 0.0),
        p(4.0, 3.0),
        p(0.0, 0.0),
    ])
    .expect("triangle");
    assert_eq!(poly.len(), 3);
    assert!((poly.signed_area() - 6.0).abs() < 1e-12);
}

#[test]
fn polygon_rejects_degenerate_rings() {
    let err = Polygon::new(vec![p(0.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]).unwrap_err();
    assert_eq!(err, GeomError::TooFewVertices { count: 2 });

    let err = Polygon::new(vec![p(0.0, 0.0), p(f64::NAN, 1.0), p(1.0, 0.0)]).unwrap_err();
    assert_eq!(err, GeomError::NonFiniteCoordinate);
}

#[test]
fn bounding_box_covers_all_vertices() {
    let bb = bounding_box(&wall());
    assert_eq!((bb.min_x, bb.max_x, bb.min_y, bb.max_y), (0.0, 10.0, 0.0, 10.0));
    assert!(bb.contains_point(p(5.0, 5.0)));
    assert!(!bb.contains_point(p(-0.1, 5.0)));
}

#[test]
fn segments_intersect_handles_crossing_touching_and_disjoint() {
    assert!(segments_intersect(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)));
    // Touching at an endpoint.
    assert!(segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0)));
    // Collinear overlap.
    assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
    // Collinear but disjoint.
    assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
    // Parallel.
    assert!(!segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 1.0), p(2.0, 1.0)));
}

#[test]
fn point_in_polygon_uses_even_odd_rule() {
    let poly = wall();
    assert!(point_in_polygon(p(5.0, 5.0), &poly));
    assert!(!point_in_polygon(p(15.0, 5.0), &poly));
    assert!(!point_in_polygon(p(5.0, -1.0), &poly));

    // Concave "U": the notch is outside.
    let u = Polygon::new(vec![
        p(0.0, 0.0),
        p(6.0, 0.0),
        p(6.0, 6.0),
        p(4.0, 6.0),
        p(4.0, 2.0),
        p(2.0, 2.0),
        p(2.0, 6.0),
        p(0.0, 6.0),
    ])
    .expect("u");
    assert!(!point_in_polygon(p(3.0, 4.0), &u));
    assert!(point_in_polygon(p(1.0, 4.0), &u));
}

#[test]
fn segment_through_interior_is_obstructed() {
    let poly = wall();
    assert!(segment_enters_polygon(p(-5.0, 5.0), p(15.0, 5.0), &poly));
    // Diagonal between two corners of the same polygon.
    assert!(segment_enters_polygon(p(0.0, 0.0), p(10.0, 10.0), &poly));
    // Fully inside.
    assert!(segment_enters_polygon(p(2.0, 2.0), p(3.0, 3.0), &poly));
}

#[test]
fn grazing_a_corner_or_edge_is_not_an_obstruction() {
    let poly = wall();
    // Touches the (0, 10) corner only.
    assert!(!segment_enters_polygon(p(-5.0, 5.0), p(5.0, 15.0), &poly));
    // Runs along the top edge.
    assert!(!segment_enters_polygon(p(-2.0, 10.0), p(12.0, 10.0), &poly));
    // Polygon edge itself.
    assert!(!segment_enters_polygon(p(0.0, 10.0), p(10.0, 10.0), &poly));
    // Entirely outside.
    assert!(!segment_enters_polygon(p(-5.0, 11.0), p(15.0, 11.0), &poly));
}

#[test]
fn midpoint_heuristic_gap_is_caught() {
    // The midpoint of this segment is outside the thin obstacle, but the segment clips it.
    let thin = Polygon::rect(p(1.0, -1.0), p(1.5, 1.0)).expect("thin");
    let a = p(0.0, 0.0);
    let b = p(6.0, 0.0);
    assert!(!thin.contains(a.lerp(b, 0.5)));
    assert!(segment_enters_polygon(a, b, &thin));
}

proptest! {
    #[test]
    fn distance_is_symmetric(ax in -1e3..1e3f64, ay in -1e3..1e3f64, bx in -1e3..1e3f64, by in -1e3..1e3f64) {
        let a = p(ax, ay);
        let b = p(bx, by);
        prop_assert_eq!(distance(a, b), distance(b, a));
        prop_assert!(distance(a, b) >= 0.0);
    }

    #[test]
    fn segment_intersection_is_symmetric(
        coords in proptest::collection::vec(-10.0..10.0f64, 8)
    ) {
        let (a1, a2) = (p(coords[0], coords[1]), p(coords[2], coords[3]));
        let (b1, b2) = (p(coords[4], coords[5]), p(coords[6], coords[7]));
        prop_assert_eq!(segments_intersect(a1, a2, b1, b2), segments_intersect(b1, b2, a1, a2));
        prop_assert_eq!(segments_intersect(a1, a2, b1, b2), segments_intersect(a2, a1, b2, b1));
    }
}
