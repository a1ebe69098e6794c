use std::collections::{BTreeMap, BTreeSet};

use wayfind_floor::{FloorPlan, NodeId};
use wayfind_geom::{inflate, segment_enters_polygon, BoundingBox, Point, Polygon};

use crate::{Edge, GraphConfig, GraphError, GraphStrategy, NavGraph, QueryScope, Result, VertexId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a vertex came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VertexKind {
    /// A named floor-plan node.
    Node(NodeId),
    /// Corner `corner` of inflated obstacle `obstacle`.
    Corner { obstacle: u32, corner: u32 },
    /// A per-query vertex living in a [`QueryScope`].
    Temporary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub position: Point,
    pub kind: VertexKind,
}

/// Reusable visibility graph built from a floor plan's obstacles.
///
/// The graph owns the inflated copies of the obstacles it was built from. It is never mutated
/// after construction; rebuilding the floor plan requires rebuilding the graph.
#[derive(Debug, Clone)]
pub struct ObstacleGraph {
    config: GraphConfig,
    obstacles: Vec<Polygon>,
    obstacle_bounds: Vec<BoundingBox>,
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    node_vertices: BTreeMap<NodeId, VertexId>,
    edge_count: usize,
}

impl ObstacleGraph {
    /// Build a graph from a floor plan's named nodes and obstacle polygons.
    pub fn build(plan: &FloorPlan, config: &GraphConfig) -> Result<Self> {
        let nodes: Vec<(NodeId, Point)> = plan.nodes().iter().map(|n| (n.id, n.position)).collect();
        let obstacles: Vec<Polygon> = plan
            .obstacle_polygons()
            .map(|p| p.polygon.clone())
            .collect();
        Self::from_parts(&nodes, &obstacles, config)
    }

    /// Build a graph from a raw node set and obstacle list.
    ///
    /// Vertex order is the node order followed (for [`GraphStrategy::ObstacleVertices`]) by
    /// obstacle corners in obstacle and ring order, so identical inputs always yield identical
    /// graphs.
    pub fn from_parts(
        nodes: &[(NodeId, Point)],
        obstacles: &[Polygon],
        config: &GraphConfig,
    ) -> Result<Self> {
        config.validate()?;

        if config.strategy == GraphStrategy::ObstacleVertices
            && obstacles.is_empty()
            && nodes.is_empty()
        {
            return Err(GraphError::EmptyObstacleSet);
        }

        let inflated: Vec<Polygon> = obstacles
            .iter()
            .map(|p| inflate(p, config.buffer_radius))
            .collect();
        let obstacle_bounds = inflated.iter().map(|p| p.bounding_box()).collect();

        let mut graph = Self {
            config: *config,
            obstacles: inflated,
            obstacle_bounds,
            vertices: Vec::new(),
            adjacency: Vec::new(),
            node_vertices: BTreeMap::new(),
            edge_count: 0,
        };

        for &(id, position) in nodes {
            let vertex = VertexId(graph.vertices.len() as u32);
            graph.vertices.push(Vertex {
                position,
                kind: VertexKind::Node(id),
            });
            graph.node_vertices.entry(id).or_insert(vertex);
        }

        if config.strategy == GraphStrategy::ObstacleVertices {
            graph.add_corner_vertices();
        }

        graph.link_all();

        tracing::debug!(
            strategy = ?config.strategy,
            buffer_radius = config.buffer_radius,
            obstacles = graph.obstacles.len(),
            vertices = graph.vertices.len(),
            edges = graph.edge_count,
            "obstacle graph built"
        );

        Ok(graph)
    }

    fn add_corner_vertices(&mut self) {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        struct PointKey(u64, u64);

        impl PointKey {
            fn from_point(p: Point) -> Self {
                // -0.0 and 0.0 must share a key.
                Self((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
            }
        }

        let mut seen: BTreeSet<PointKey> = BTreeSet::new();
        let mut corners = Vec::new();

        for (obstacle_idx, obstacle) in self.obstacles.iter().enumerate() {
            for (corner_idx, &corner) in obstacle.points().iter().enumerate() {
                // Corners buried inside another obstacle can never be reached.
                let buried = self
                    .obstacles
                    .iter()
                    .enumerate()
                    .any(|(other_idx, other)| other_idx != obstacle_idx && other.strictly_contains(corner));
                if buried || !seen.insert(PointKey::from_point(corner)) {
                    continue;
                }
                corners.push(Vertex {
                    position: corner,
                    kind: VertexKind::Corner {
                        obstacle: obstacle_idx as u32,
                        corner: corner_idx as u32,
                    },
                });
            }
        }

        self.vertices.extend(corners);
    }

    fn link_all(&mut self) {
        let n = self.vertices.len();
        self.adjacency = vec![Vec::new(); n];
        self.edge_count = 0;

        for i in 0..n {
            for j in (i + 1)..n {
                let a = self.vertices[i].position;
                let b = self.vertices[j].position;
                if !self.is_visible(a, b) {
                    continue;
                }
                let weight = a.distance(b);
                self.adjacency[i].push(Edge {
                    to: VertexId(j as u32),
                    weight,
                });
                self.adjacency[j].push(Edge {
                    to: VertexId(i as u32),
                    weight,
                });
                self.edge_count += 1;
            }
        }
    }

    /// True when the straight segment `a`-`b` does not pass through any inflated obstacle.
    ///
    /// Bounding boxes pre-filter obstacles; survivors get the precise segment test.
    pub fn is_visible(&self, a: Point, b: Point) -> bool {
        let segment = BoundingBox::of_segment(a, b);
        !self
            .obstacles
            .iter()
            .zip(&self.obstacle_bounds)
            .filter(|(_, bounds)| bounds.intersects(&segment))
            .any(|(obstacle, _)| segment_enters_polygon(a, b, obstacle))
    }

    /// Open a per-query overlay for temporary vertices.
    pub fn scope(&self) -> QueryScope<'_> {
        QueryScope::new(self)
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Inflated obstacles the graph was built from.
    pub fn obstacles(&self) -> &[Polygon] {
        &self.obstacles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Permanent vertex of a named node, if the node was part of the build input.
    pub fn vertex_for_node(&self, node: NodeId) -> Option<VertexId> {
        self.node_vertices.get(&node).copied()
    }

    pub(crate) fn edges(&self, id: VertexId) -> &[Edge] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl NavGraph for ObstacleGraph {
    fn vertex_bound(&self) -> usize {
        self.vertices.len()
    }

    fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    fn position(&self, vertex: VertexId) -> Option<Point> {
        self.vertex(vertex).map(|v| v.position)
    }

    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = Edge> + '_ {
        self.edges(vertex).iter().copied()
    }
}
