//! Printable command results.

use std::fmt;

use serde::Serialize;
use wayfind_floor::NamedNode;
use wayfind_planner::RoutePath;
use wayfind_session::SessionState;

use crate::projection::Projection;
use crate::venue::Venue;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReport {
    pub id: u32,
    pub name: String,
    pub category: Option<String>,
    pub location: Option<String>,
    /// Source coordinates.
    pub position: [f64; 2],
}

impl NodeReport {
    pub fn new(node: &NamedNode, projection: &Projection) -> Self {
        let p = projection.unproject(node.position);
        Self {
            id: node.id.0,
            name: node.name.clone(),
            category: node.category.clone(),
            location: node.location.clone(),
            position: [p.x, p.y],
        }
    }
}

impl fmt::Display for NodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}  {}", self.id, self.name)?;
        if let Some(category) = &self.category {
            write!(f, " [{category}]")?;
        }
        if let Some(location) = &self.location {
            write!(f, " @ {location}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub state: SessionState,
    /// Planar length in metres; absent when no route exists.
    pub length_m: Option<f64>,
    /// Route in source coordinates.
    pub points: Vec<[f64; 2]>,
}

impl RouteReport {
    pub fn new(
        from: String,
        to: String,
        state: SessionState,
        path: Option<&RoutePath>,
        projection: &Projection,
    ) -> Self {
        let points = path
            .map(|p| p.points())
            .unwrap_or_default()
            .iter()
            .map(|&p| {
                let p = projection.unproject(p);
                [p.x, p.y]
            })
            .collect();
        Self {
            from,
            to,
            state,
            length_m: path.and_then(RoutePath::length),
            points,
        }
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.length_m {
            Some(length) => {
                writeln!(f, "{} -> {}: {:.1} m", self.from, self.to, length)?;
                for [x, y] in &self.points {
                    writeln!(f, "  {x:.7}, {y:.7}")?;
                }
                Ok(())
            }
            None => writeln!(f, "{} -> {}: no route available", self.from, self.to),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub nodes: usize,
    pub booths: usize,
    pub polygons: usize,
    pub obstacles: usize,
    pub decorations: usize,
    /// Planar width and height of the plan in metres.
    pub extent_m: Option<[f64; 2]>,
    pub vertices: usize,
    pub edges: usize,
    pub buffer_radius: f64,
    pub strategy: String,
}

impl InspectReport {
    pub fn new(venue: &Venue) -> Self {
        let config = venue.graph.config();
        Self {
            nodes: venue.plan.nodes().len(),
            booths: venue.plan.booths().count(),
            polygons: venue.plan.all_polygons().len(),
            obstacles: venue.graph.obstacles().len(),
            decorations: venue.plan.decorations().len(),
            extent_m: venue.plan.bounds().map(|b| [b.width(), b.height()]),
            vertices: venue.graph.vertex_count(),
            edges: venue.graph.edge_count(),
            buffer_radius: config.buffer_radius,
            strategy: format!("{:?}", config.strategy),
        }
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Floor plan")?;
        writeln!(f, "  nodes:       {} ({} booths)", self.nodes, self.booths)?;
        writeln!(f, "  polygons:    {} ({} obstacles)", self.polygons, self.obstacles)?;
        writeln!(f, "  decorations: {}", self.decorations)?;
        if let Some([width, height]) = self.extent_m {
            writeln!(f, "  extent:      {width:.1} x {height:.1} m")?;
        }
        writeln!(f, "Graph ({}, buffer {} m)", self.strategy, self.buffer_radius)?;
        writeln!(f, "  vertices:    {}", self.vertices)?;
        writeln!(f, "  edges:       {}", self.edges)
    }
}
