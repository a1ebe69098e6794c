use crate::{predicates, GeomError, Point, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of a point set, or `None` when it is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bb = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in iter {
            bb.min_x = bb.min_x.min(p.x);
            bb.max_x = bb.max_x.max(p.x);
            bb.min_y = bb.min_y.min(p.y);
            bb.max_y = bb.max_y.max(p.y);
        }
        Some(bb)
    }

    pub fn of_segment(a: Point, b: Point) -> Self {
        BoundingBox {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_y: a.y.min(b.y),
            max_y: a.y.max(b.y),
        }
    }

    /// Closed-interval overlap test (touching boxes intersect).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A closed exterior ring of at least three distinct vertices.
///
/// The ring is stored open: the last vertex connects back to the first implicitly. Simplicity
/// (no self-intersection) is assumed but not validated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Polygon {
    points: Vec<Point>,
    bounds: BoundingBox,
}

impl Polygon {
    /// Build a polygon from a ring.
    ///
    /// Consecutive duplicate vertices are collapsed and a closing vertex equal to the first one
    /// (as GeoJSON rings carry) is dropped.
    pub fn new(points: impl Into<Vec<Point>>) -> Result<Self> {
        let mut points: Vec<Point> = points.into();
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeomError::NonFiniteCoordinate);
        }

        points.dedup();
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return Err(GeomError::TooFewVertices {
                count: points.len(),
            });
        }

        Ok(Self::from_ring(points))
    }

    /// Axis-aligned rectangle spanning two opposite corners.
    pub fn rect(min: Point, max: Point) -> Result<Self> {
        Self::new(vec![
            Point::new(min.x, min.y),
            Point::new(min.x, max.y),
            Point::new(max.x, max.y),
            Point::new(max.x, min.y),
        ])
    }

    // Callers guarantee `points.len() >= 3`.
    pub(crate) fn from_ring(points: Vec<Point>) -> Self {
        let bounds = BoundingBox::from_points(points.iter().copied()).unwrap_or(BoundingBox {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        });
        Self { points, bounds }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges in ring order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.cross(b)).sum::<f64>() * 0.5
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        let mut sign = 0.0_f64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let c = self.points[(i + 2) % n];
            let turn = (b - a).cross(c - b);
            if turn.abs() <= crate::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Even-odd containment (boundary points may go either way).
    pub fn contains(&self, p: Point) -> bool {
        predicates::point_in_polygon(p, self)
    }

    /// Containment that excludes a thin band around the boundary.
    pub fn strictly_contains(&self, p: Point) -> bool {
        self.bounds.contains_point(p)
            && predicates::point_in_polygon(p, self)
            && predicates::distance_to_boundary(p, self) > crate::EPSILON
    }
}

/// Axis-aligned bounds of a polygon, used for overlap pre-filtering.
pub fn bounding_box(polygon: &Polygon) -> BoundingBox {
    polygon.bounding_box()
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = GeomError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}
