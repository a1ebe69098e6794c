use crate::{Point, Polygon};

/// Corners whose miter would reach further than this multiple of the radius are bevelled.
const MITER_LIMIT: f64 = 2.0;

/// Expand `polygon` outward by `radius`.
///
/// Every edge is pushed out by `radius` along its outward normal and neighbouring offset edges
/// are joined at their intersection (a miter). Sharp convex corners are bevelled instead. For
/// convex inputs the result is convex and contains the input; reflex corners of non-convex
/// inputs are mitred inward as far as the offset edges meet, which is best-effort.
///
/// A non-positive (or non-finite) radius returns the polygon unchanged.
pub fn inflate(polygon: &Polygon, radius: f64) -> Polygon {
    if !radius.is_finite() || radius <= 0.0 {
        return polygon.clone();
    }

    let pts = polygon.points();
    let n = pts.len();
    // Outward normals point right of the travel direction for counter-clockwise rings.
    let orient = if polygon.is_ccw() { 1.0 } else { -1.0 };

    let mut out = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = pts[(i + n - 1) % n];
        let cur = pts[i];
        let next = pts[(i + 1) % n];

        let (Some(n1), Some(n2)) = (
            outward_normal(prev, cur, orient),
            outward_normal(cur, next, orient),
        ) else {
            continue;
        };

        let convex = (cur - prev).cross(next - cur) * orient > 0.0;

        let Some(bisector) = (n1 + n2).normalized() else {
            // Hairpin: the two edges fold back on each other.
            out.push(cur + n1 * radius);
            out.push(cur + n2 * radius);
            continue;
        };

        let cos_half = bisector.dot(n1);
        if convex && cos_half * MITER_LIMIT < 1.0 {
            out.push(cur + n1 * radius);
            out.push(cur + n2 * radius);
        } else {
            out.push(cur + bisector * (radius / cos_half.max(1.0 / MITER_LIMIT)));
        }
    }

    out.dedup();
    if out.len() < 3 {
        return polygon.clone();
    }
    Polygon::from_ring(out)
}

fn outward_normal(a: Point, b: Point, orient: f64) -> Option<Point> {
    let dir = (b - a).normalized()?;
    Some(Point::new(dir.y, -dir.x) * orient)
}
