use crate::{BoundingBox, Point, Polygon, EPSILON};

fn orientation(a: Point, b: Point, c: Point) -> i8 {
    let v = (b - a).cross(c - a);
    if v > EPSILON {
        1
    } else if v < -EPSILON {
        -1
    } else {
        0
    }
}

// Assumes `p` is collinear with `a`-`b`.
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) - EPSILON
        && p.x <= a.x.max(b.x) + EPSILON
        && p.y >= a.y.min(b.y) - EPSILON
        && p.y <= a.y.max(b.y) + EPSILON
}

/// Closed segment intersection test: touching endpoints and collinear overlap count.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    if !BoundingBox::of_segment(a1, a2).intersects(&BoundingBox::of_segment(b1, b2)) {
        return false;
    }

    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && on_segment(b1, b2, a1))
        || (d2 == 0 && on_segment(b1, b2, a2))
        || (d3 == 0 && on_segment(a1, a2, b1))
        || (d4 == 0 && on_segment(a1, a2, b2))
}

// Intersection between lines p + t*r and q + u*s. Returns t if both parameters are in [0, 1].
fn segment_intersection_t(p: Point, r: Point, q: Point, s: Point) -> Option<f64> {
    let denom = r.cross(s);
    if denom.abs() <= EPSILON * EPSILON {
        return None;
    }
    let qp = q - p;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    let range = -EPSILON..=1.0 + EPSILON;
    if range.contains(&t) && range.contains(&u) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Even-odd ray casting test.
pub fn point_in_polygon(p: Point, polygon: &Polygon) -> bool {
    let mut inside = false;
    for (a, b) in polygon.edges() {
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let denom = ab.dot(ab);
    if denom <= f64::EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / denom).clamp(0.0, 1.0);
    a + ab * t
}

/// Distance from `p` to the nearest point on the polygon's boundary.
pub fn distance_to_boundary(p: Point, polygon: &Polygon) -> f64 {
    polygon
        .edges()
        .map(|(a, b)| closest_point_on_segment(p, a, b).distance(p))
        .fold(f64::INFINITY, f64::min)
}

/// Precise obstruction test: does any positive-length piece of `a`-`b` lie strictly inside
/// `polygon`?
///
/// Grazing a vertex or running along an edge does not count, so visibility edges may hug
/// obstacle corners and walls. The segment is cut at every point where it meets the boundary
/// and the midpoint of each piece is tested for interior containment.
pub fn segment_enters_polygon(a: Point, b: Point, polygon: &Polygon) -> bool {
    if !polygon
        .bounding_box()
        .intersects(&BoundingBox::of_segment(a, b))
    {
        return false;
    }

    let dir = b - a;
    let len2 = dir.dot(dir);
    if len2 <= EPSILON * EPSILON {
        return polygon.strictly_contains(a);
    }

    let mut cuts = vec![0.0, 1.0];
    for (p, q) in polygon.edges() {
        if !segments_intersect(a, b, p, q) {
            continue;
        }
        match segment_intersection_t(a, dir, p, q - p) {
            Some(t) => cuts.push(t),
            None => {
                // Collinear overlap: the edge endpoints bound the shared piece.
                for v in [p, q] {
                    let t = (v - a).dot(dir) / len2;
                    if (0.0..=1.0).contains(&t) {
                        cuts.push(t);
                    }
                }
            }
        }
    }

    cuts.sort_by(f64::total_cmp);
    cuts.dedup_by(|x, y| (*x - *y).abs() <= f64::EPSILON);

    cuts.windows(2).any(|w| {
        let mid = a + dir * ((w[0] + w[1]) * 0.5);
        polygon.strictly_contains(mid)
    })
}
