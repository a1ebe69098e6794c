use wayfind_floor::{FloorPlan, NodeId};
use wayfind_geom::Point;
use wayfind_graph::{ObstacleGraph, QueryScope, VertexId};
use wayfind_planner::PlanError;

use crate::{Result, SessionError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One end of a route: a named node or a free position (e.g. the user's location).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Endpoint {
    Node(NodeId),
    Position(Point),
}

impl Endpoint {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            Self::Position(_) => None,
        }
    }

    pub(crate) fn validate(&self, plan: &FloorPlan) -> Result<()> {
        match *self {
            Self::Node(id) => plan
                .node(id)
                .map(|_| ())
                .ok_or(SessionError::UnknownNode(id)),
            Self::Position(p) if !p.is_finite() => Err(SessionError::InvalidPosition(p)),
            Self::Position(_) => Ok(()),
        }
    }

    /// Map to a permanent vertex when the graph has one; anything else is spliced per plan.
    pub(crate) fn resolve(&self, plan: &FloorPlan, graph: &ObstacleGraph) -> Result<Resolved> {
        match *self {
            Self::Node(id) => {
                if let Some(vertex) = graph.vertex_for_node(id) {
                    return Ok(Resolved::Vertex(vertex));
                }
                let node = plan.require_node(id).map_err(|_| SessionError::UnknownNode(id))?;
                Ok(Resolved::Temporary(node.position))
            }
            Self::Position(p) => Ok(Resolved::Temporary(p)),
        }
    }
}

impl From<NodeId> for Endpoint {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<Point> for Endpoint {
    fn from(p: Point) -> Self {
        Self::Position(p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Resolved {
    Vertex(VertexId),
    Temporary(Point),
}

impl Resolved {
    /// Splice into `scope` (adding and connecting a temporary if needed).
    pub(crate) fn splice(self, scope: &mut QueryScope<'_>) -> Result<VertexId> {
        match self {
            Self::Vertex(v) => Ok(v),
            Self::Temporary(p) => {
                let v = scope
                    .add_temporary(p)
                    .map_err(PlanError::from)?;
                scope
                    .connect_temporary(v)
                    .map_err(PlanError::from)?;
                Ok(v)
            }
        }
    }
}
