use wayfind_cli::{Projection, ProjectionKind};
use wayfind_floor::FeatureRecord;
use wayfind_geom::Point;

#[test]
fn local_meters_round_trips_and_has_metric_scale() {
    let origin = Point::new(106.6528, -6.3024);
    let projection = Projection::local_meters(origin);

    assert_eq!(projection.project(origin), Point::ZERO);

    // 0.001 degrees of latitude is roughly 111 m everywhere.
    let north = projection.project(Point::new(origin.x, origin.y + 0.001));
    assert!(north.x.abs() < 1e-9);
    assert!((north.y - 111.195).abs() < 0.01, "{}", north.y);

    let p = Point::new(106.6531, -6.3019);
    let back = projection.unproject(projection.project(p));
    assert!(back.distance(p) < 1e-12);
}

#[test]
fn fit_centres_on_the_records() {
    let records = vec![
        FeatureRecord::point("A", Point::new(10.0, 50.0)),
        FeatureRecord::point("B", Point::new(10.002, 50.002)),
    ];

    let projection = Projection::fit(ProjectionKind::LocalMeters, &records);
    let a = projection.project(Point::new(10.0, 50.0));
    let b = projection.project(Point::new(10.002, 50.002));
    assert!((a.x + b.x).abs() < 1e-6);
    assert!((a.y + b.y).abs() < 1e-6);

    assert_eq!(
        Projection::fit(ProjectionKind::Identity, &records),
        Projection::Identity
    );
}
