use wayfind_geom::Point;
use wayfind_graph::VertexId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A found route: the vertex sequence and the matching positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    pub vertices: Vec<VertexId>,
    pub points: Vec<Point>,
}

impl Route {
    /// Total polyline length.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

/// Result of a planning query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum RoutePath {
    Found(Route),
    /// The endpoints are in disconnected parts of the graph.
    NotFound,
}

impl RoutePath {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::NotFound => None,
        }
    }

    /// Route positions; empty when no route exists.
    pub fn points(&self) -> &[Point] {
        self.route().map(|r| r.points.as_slice()).unwrap_or(&[])
    }

    pub fn vertices(&self) -> &[VertexId] {
        self.route().map(|r| r.vertices.as_slice()).unwrap_or(&[])
    }

    /// Number of route points.
    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Total length, or `None` when no route exists.
    pub fn length(&self) -> Option<f64> {
        self.route().map(Route::length)
    }

    pub fn reversed(&self) -> Self {
        match self {
            Self::Found(route) => Self::Found(route.reversed()),
            Self::NotFound => Self::NotFound,
        }
    }
}
