use proptest::prelude::*;
use wayfind_geom::{distance_to_boundary, inflate, Point, Polygon};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn regular(n: usize, radius: f64, ccw: bool) -> Polygon {
    let mut pts: Vec<Point> = (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            p(radius * a.cos(), radius * a.sin())
        })
        .collect();
    if !ccw {
        pts.reverse();
    }
    Polygon::new(pts).expect("regular polygon")
}

#[test]
fn inflating_a_square_grows_each_side_by_the_radius() {
    let square = Polygon::rect(p(0.0, 0.0), p(10.0, 10.0)).expect("square");
    let grown = inflate(&square, 1.0);
    let bb = grown.bounding_box();
    assert!((bb.min_x + 1.0).abs() < 1e-9);
    assert!((bb.max_x - 11.0).abs() < 1e-9);
    assert!((bb.min_y + 1.0).abs() < 1e-9);
    assert!((bb.max_y - 11.0).abs() < 1e-9);
    assert_eq!(grown.len(), 4);
}

#[test]
fn zero_radius_is_identity() {
    let square = Polygon::rect(p(0.0, 0.0), p(2.0, 3.0)).expect("square");
    assert_eq!(inflate(&square, 0.0), square);
    assert_eq!(inflate(&square, -1.0), square);
}

#[test]
fn sharp_corners_are_bevelled() {
    let spike = Polygon::new(vec![p(0.0, 0.0), p(10.0, 0.5), p(0.0, 1.0)]).expect("spike");
    let grown = inflate(&spike, 0.5);
    assert!(grown.len() > spike.len());
    assert!(grown.bounding_box().max_x < 11.0);
    for v in spike.points() {
        assert!(grown.strictly_contains(*v));
    }
}

proptest! {
    #[test]
    fn inflated_convex_polygon_contains_input(
        n in 3usize..12,
        size in 0.5..50.0f64,
        radius in 0.01..5.0f64,
        ccw in any::<bool>(),
    ) {
        let poly = regular(n, size, ccw);
        let grown = inflate(&poly, radius);
        prop_assert!(grown.is_convex());
        for v in poly.points() {
            prop_assert!(grown.strictly_contains(*v));
            prop_assert!(distance_to_boundary(*v, &grown) >= radius * 0.5 - 1e-9);
        }
        prop_assert!(grown.signed_area().abs() > poly.signed_area().abs());
    }
}
