//! Visibility graphs over floor-plan obstacles.
//!
//! An [`ObstacleGraph`] is built once per floor plan and is read-only afterwards, so one
//! instance can be shared (e.g. behind an `Arc`) by any number of concurrent queries. Each
//! query splices its own start/end points into a [`QueryScope`], which borrows the graph and
//! discards its temporaries when dropped.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod graph;
pub mod scope;

pub use config::{GraphConfig, GraphStrategy};
pub use graph::{ObstacleGraph, Vertex, VertexKind};
pub use scope::QueryScope;

use thiserror::Error;
use wayfind_geom::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle of a graph vertex (permanent or temporary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Directed half of an undirected, distance-weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: f64,
}

/// Read access to a weighted, undirected graph with planar vertex positions.
///
/// Implemented by the permanent [`ObstacleGraph`] and by a [`QueryScope`] layered over it.
/// Neighbours are yielded in ascending id order.
pub trait NavGraph {
    /// Exclusive upper bound on vertex indices (dense scratch arrays are sized by it).
    fn vertex_bound(&self) -> usize;

    fn contains(&self, vertex: VertexId) -> bool;

    fn position(&self, vertex: VertexId) -> Option<Point>;

    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = Edge> + '_;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Nothing to build a visibility graph from.
    #[error("obstacle-vertex graph requested with no obstacles and no named nodes")]
    EmptyObstacleSet,

    #[error("buffer radius must be finite and >= 0, got {0}")]
    InvalidBufferRadius(f64),

    #[error("vertex {0:?} is not a live temporary in this scope")]
    UnknownVertex(VertexId),

    #[error("temporary vertex position must be finite, got {0:?}")]
    InvalidPosition(Point),
}

pub type Result<T> = std::result::Result<T, GraphError>;
