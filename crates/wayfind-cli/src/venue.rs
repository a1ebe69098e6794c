use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use wayfind_floor::{FloorPlan, NamedNode};
use wayfind_graph::{GraphConfig, ObstacleGraph};

use crate::config::ProjectionKind;
use crate::geojson::parse_feature_collection;
use crate::projection::Projection;

/// A loaded venue level: projected floor plan, its graph and the projection used.
#[derive(Debug, Clone)]
pub struct Venue {
    pub plan: Arc<FloorPlan>,
    pub graph: Arc<ObstacleGraph>,
    pub projection: Projection,
}

impl Venue {
    pub fn load(path: &Path, projection: ProjectionKind, graph: &GraphConfig) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read floor plan from {}", path.display()))?;
        Self::from_geojson(&text, projection, graph)
            .with_context(|| format!("Failed to load floor plan from {}", path.display()))
    }

    pub fn from_geojson(text: &str, projection: ProjectionKind, config: &GraphConfig) -> Result<Self> {
        let records = parse_feature_collection(text)?;
        let projection = Projection::fit(projection, &records);
        let records = records.into_iter().map(|r| projection.project_record(r));

        let plan = FloorPlan::from_records(records)?;
        let graph = ObstacleGraph::build(&plan, config)?;
        tracing::info!(
            nodes = plan.nodes().len(),
            obstacles = graph.obstacles().len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "venue loaded"
        );

        Ok(Self {
            plan: Arc::new(plan),
            graph: Arc::new(graph),
            projection,
        })
    }

    /// Resolve a node by exact name, falling back to a unique search match.
    pub fn find_node(&self, query: &str) -> Result<&NamedNode> {
        if let Some(node) = self.plan.node_named(query) {
            return Ok(node);
        }
        let matches: Vec<&NamedNode> = self.plan.search(query).collect();
        match matches.as_slice() {
            [node] => Ok(*node),
            [] => bail!("no point of interest matches {query:?}"),
            many => {
                let names: Vec<&str> = many.iter().map(|n| n.name.as_str()).collect();
                bail!("{query:?} is ambiguous: {}", names.join(", "))
            }
        }
    }
}
