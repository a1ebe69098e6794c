use wayfind_geom::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry of one source feature.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "coordinates"))]
pub enum FeatureGeometry {
    Point(Point),
    /// Exterior ring only; holes are not represented.
    Polygon(Vec<Point>),
    LineString(Vec<Point>),
}

/// A decoded source feature: classification plus geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureRecord {
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
    pub geometry: FeatureGeometry,
}

impl FeatureRecord {
    pub fn new(kind: impl Into<String>, geometry: FeatureGeometry) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            category: None,
            location: None,
            geometry,
        }
    }

    pub fn point(name: impl Into<String>, position: Point) -> Self {
        Self::new("point", FeatureGeometry::Point(position)).with_name(name)
    }

    pub fn polygon(kind: impl Into<String>, ring: Vec<Point>) -> Self {
        Self::new(kind, FeatureGeometry::Polygon(ring))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
