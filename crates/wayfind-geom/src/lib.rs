//! Planar geometry primitives for indoor routing.
//!
//! All coordinates are planar and unit-agnostic; the routing engine assumes projected metres.
//! Geographic sources must be projected before they reach this crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod inflate;
pub mod point;
pub mod polygon;
pub mod predicates;

pub use inflate::inflate;
pub use point::{distance, Point};
pub use polygon::{bounding_box, BoundingBox, Polygon};
pub use predicates::{
    closest_point_on_segment, distance_to_boundary, point_in_polygon, segment_enters_polygon,
    segments_intersect,
};

use thiserror::Error;

/// Tolerance used by orientation tests and boundary checks.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("polygon needs at least 3 distinct vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon contains a non-finite coordinate")]
    NonFiniteCoordinate,
}

pub type Result<T> = std::result::Result<T, GeomError>;
