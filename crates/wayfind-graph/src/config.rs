#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GraphError, Result};

/// How permanent graph vertices are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GraphStrategy {
    /// Only named nodes are vertices. Cheap; good when POIs densely cover the free space.
    Waypoints,
    /// Inflated obstacle corners join the named nodes, so routes can bend tightly around
    /// corners.
    #[default]
    ObstacleVertices,
}

/// Graph construction settings.
///
/// Coordinates are planar metres, so `buffer_radius` is a clearance in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Clearance kept between routes and obstacle outlines.
    pub buffer_radius: f64,
    pub strategy: GraphStrategy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            buffer_radius: 0.25,
            strategy: GraphStrategy::default(),
        }
    }
}

impl GraphConfig {
    pub fn new(buffer_radius: f64, strategy: GraphStrategy) -> Self {
        Self {
            buffer_radius,
            strategy,
        }
    }

    pub fn waypoints(buffer_radius: f64) -> Self {
        Self::new(buffer_radius, GraphStrategy::Waypoints)
    }

    pub fn obstacle_vertices(buffer_radius: f64) -> Self {
        Self::new(buffer_radius, GraphStrategy::ObstacleVertices)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.buffer_radius.is_finite() || self.buffer_radius < 0.0 {
            return Err(GraphError::InvalidBufferRadius(self.buffer_radius));
        }
        Ok(())
    }
}
