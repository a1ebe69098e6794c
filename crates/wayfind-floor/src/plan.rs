use wayfind_geom::{BoundingBox, Point, Polygon};

use crate::{FeatureGeometry, FeatureRecord, FloorPlanError, NamedNode, NodeId, PolygonKind, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A floor-plan polygon plus its classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassifiedPolygon {
    pub name: Option<String>,
    pub kind: PolygonKind,
    pub polygon: Polygon,
}

impl ClassifiedPolygon {
    pub fn is_obstacle(&self) -> bool {
        self.kind.is_obstacle()
    }
}

/// Render-only polyline (corridor markings, guide lines). Never obstructs movement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decoration {
    pub name: Option<String>,
    pub kind: String,
    pub points: Vec<Point>,
}

/// Classified geometry and named nodes for one venue level.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FloorPlan {
    nodes: Vec<NamedNode>,
    polygons: Vec<ClassifiedPolygon>,
    decorations: Vec<Decoration>,
    bounds: Option<BoundingBox>,
}

impl FloorPlan {
    /// Build a plan from decoded source features.
    ///
    /// Point features become named nodes (handles assigned in record order), polygon features
    /// become classified polygons, and line strings are kept as decorations. Polygons that are
    /// not valid rings are skipped with a warning. A plan without any named node cannot be
    /// routed and is rejected.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = FeatureRecord>,
    {
        let mut nodes = Vec::new();
        let mut polygons = Vec::new();
        let mut decorations = Vec::new();

        for record in records {
            let FeatureRecord {
                kind,
                name,
                category,
                location,
                geometry,
            } = record;

            match geometry {
                FeatureGeometry::Point(position) => {
                    if !position.is_finite() {
                        tracing::warn!(?name, "skipping point feature with non-finite coordinate");
                        continue;
                    }
                    let id = NodeId(nodes.len() as u32);
                    nodes.push(NamedNode {
                        id,
                        name: name.unwrap_or_else(|| "Unnamed".to_string()),
                        position,
                        category,
                        location,
                    });
                }
                FeatureGeometry::Polygon(ring) => {
                    let polygon = match Polygon::new(ring) {
                        Ok(polygon) => polygon,
                        Err(err) => {
                            tracing::warn!(?name, kind = %kind, error = %err, "skipping polygon feature");
                            continue;
                        }
                    };
                    let is_building_name = name
                        .as_deref()
                        .is_some_and(|n| n.eq_ignore_ascii_case("building"));
                    let kind = if is_building_name {
                        PolygonKind::Building
                    } else {
                        PolygonKind::parse(&kind)
                    };
                    polygons.push(ClassifiedPolygon {
                        name,
                        kind,
                        polygon,
                    });
                }
                FeatureGeometry::LineString(points) => {
                    decorations.push(Decoration { name, kind, points });
                }
            }
        }

        if nodes.is_empty() {
            return Err(FloorPlanError::Malformed(
                "floor plan has no named nodes".to_string(),
            ));
        }

        let bounds = BoundingBox::from_points(
            nodes
                .iter()
                .map(|n| n.position)
                .chain(polygons.iter().flat_map(|p| p.polygon.points().iter().copied())),
        );

        tracing::debug!(
            nodes = nodes.len(),
            polygons = polygons.len(),
            decorations = decorations.len(),
            "floor plan built"
        );

        Ok(Self {
            nodes,
            polygons,
            decorations,
            bounds,
        })
    }

    pub fn nodes(&self) -> &[NamedNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&NamedNode> {
        self.nodes.get(id.index())
    }

    /// Like [`FloorPlan::node`], but an unknown handle is an error.
    pub fn require_node(&self, id: NodeId) -> Result<&NamedNode> {
        self.node(id).ok_or(FloorPlanError::UnknownNode(id))
    }

    /// First node whose name equals `name`, ignoring case.
    pub fn node_named(&self, name: &str) -> Option<&NamedNode> {
        let name = name.trim();
        self.nodes
            .iter()
            .find(|n| n.name.trim().eq_ignore_ascii_case(name))
    }

    /// Nodes whose name or location contains `query` (case-insensitive), in plan order.
    pub fn search<'a, 'q>(&'a self, query: &'q str) -> impl Iterator<Item = &'a NamedNode> + use<'a, 'q> {
        self.nodes.iter().filter(move |n| n.matches(query))
    }

    /// Nodes carrying a category (booths and typed facilities).
    pub fn booths(&self) -> impl Iterator<Item = &NamedNode> {
        self.nodes.iter().filter(|n| n.category.is_some())
    }

    /// Closest node to `point`, skipping `exclude`. Ties go to the earlier node.
    pub fn nearest_node(&self, point: Point, exclude: Option<NodeId>) -> Option<&NamedNode> {
        let mut best: Option<(f64, &NamedNode)> = None;
        for node in self.nodes.iter().filter(|n| Some(n.id) != exclude) {
            let d = node.position.distance(point);
            match best {
                Some((best_d, _)) if d >= best_d => {}
                _ => best = Some((d, node)),
            }
        }
        best.map(|(_, node)| node)
    }

    /// Routing-relevant polygons (everything except the building footprint), in source order.
    pub fn obstacle_polygons(&self) -> impl Iterator<Item = &ClassifiedPolygon> {
        self.polygons.iter().filter(|p| p.is_obstacle())
    }

    /// Every classified polygon, for rendering.
    pub fn all_polygons(&self) -> &[ClassifiedPolygon] {
        &self.polygons
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }
}
