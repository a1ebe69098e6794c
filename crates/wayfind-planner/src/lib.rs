//! A* route planning over [`NavGraph`]s.
//!
//! Planning is a pure read of the graph: it never mutates it and keeps all per-query state in a
//! [`PlanQuery`]. A disconnected pair of vertices is a normal outcome ([`RoutePath::NotFound`]),
//! not an error.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod route;

pub use astar::{plan, plan_into, route_between, PlanQuery};
pub use route::{Route, RoutePath};
pub use wayfind_graph::NavGraph;

use thiserror::Error;
use wayfind_graph::{GraphError, VertexId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Start or end is not a vertex of the graph (or a live temporary of the scope).
    #[error("vertex {0:?} is not part of the graph")]
    InvalidNode(VertexId),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, PlanError>;
