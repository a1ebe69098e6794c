use wayfind_floor::{FeatureGeometry, FeatureRecord};
use wayfind_geom::{BoundingBox, Point};

use crate::config::ProjectionKind;

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Maps source coordinates to the planar metres the engine works in, and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Identity,
    /// Equirectangular projection around `origin` (longitude, latitude in degrees). Accurate to
    /// well under a centimetre across a venue-sized area.
    LocalMeters { origin: Point, cos_lat: f64 },
}

impl Projection {
    /// Build the projection for `records`, centred on their bounding box.
    pub fn fit(kind: ProjectionKind, records: &[FeatureRecord]) -> Self {
        match kind {
            ProjectionKind::Identity => Self::Identity,
            ProjectionKind::LocalMeters => {
                let origin = BoundingBox::from_points(records.iter().flat_map(record_points))
                    .map(|b| b.center())
                    .unwrap_or_default();
                Self::local_meters(origin)
            }
        }
    }

    pub fn local_meters(origin: Point) -> Self {
        Self::LocalMeters {
            origin,
            cos_lat: origin.y.to_radians().cos(),
        }
    }

    /// Source coordinate to planar metres.
    pub fn project(&self, p: Point) -> Point {
        match *self {
            Self::Identity => p,
            Self::LocalMeters { origin, cos_lat } => Point::new(
                (p.x - origin.x).to_radians() * cos_lat * EARTH_RADIUS_M,
                (p.y - origin.y).to_radians() * EARTH_RADIUS_M,
            ),
        }
    }

    /// Planar metres back to a source coordinate.
    pub fn unproject(&self, p: Point) -> Point {
        match *self {
            Self::Identity => p,
            Self::LocalMeters { origin, cos_lat } => Point::new(
                origin.x + (p.x / (EARTH_RADIUS_M * cos_lat)).to_degrees(),
                origin.y + (p.y / EARTH_RADIUS_M).to_degrees(),
            ),
        }
    }

    pub fn project_record(&self, record: FeatureRecord) -> FeatureRecord {
        let geometry = match record.geometry {
            FeatureGeometry::Point(p) => FeatureGeometry::Point(self.project(p)),
            FeatureGeometry::Polygon(ring) => {
                FeatureGeometry::Polygon(ring.into_iter().map(|p| self.project(p)).collect())
            }
            FeatureGeometry::LineString(line) => {
                FeatureGeometry::LineString(line.into_iter().map(|p| self.project(p)).collect())
            }
        };
        FeatureRecord { geometry, ..record }
    }
}

fn record_points(record: &FeatureRecord) -> Vec<Point> {
    match &record.geometry {
        FeatureGeometry::Point(p) => vec![*p],
        FeatureGeometry::Polygon(points) | FeatureGeometry::LineString(points) => points.clone(),
    }
}
