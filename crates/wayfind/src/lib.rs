//! Umbrella crate that re-exports the `wayfind-*` building blocks.
//!
//! The usual flow is: decode a venue level into [`floor::FloorPlan`], build one
//! [`graph::ObstacleGraph`] for it, then either call [`planner::plan`] directly or drive a
//! [`session::NavigationSession`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "geom")]
#[cfg_attr(docsrs, doc(cfg(feature = "geom")))]
pub use wayfind_geom as geom;

#[cfg(feature = "floor")]
#[cfg_attr(docsrs, doc(cfg(feature = "floor")))]
pub use wayfind_floor as floor;

#[cfg(feature = "graph")]
#[cfg_attr(docsrs, doc(cfg(feature = "graph")))]
pub use wayfind_graph as graph;

#[cfg(feature = "planner")]
#[cfg_attr(docsrs, doc(cfg(feature = "planner")))]
pub use wayfind_planner as planner;

#[cfg(feature = "session")]
#[cfg_attr(docsrs, doc(cfg(feature = "session")))]
pub use wayfind_session as session;

/// The types most callers need.
#[cfg(feature = "full")]
pub mod prelude {
    pub use wayfind_floor::{FeatureGeometry, FeatureRecord, FloorPlan, NodeId};
    pub use wayfind_geom::{Point, Polygon};
    pub use wayfind_graph::{GraphConfig, GraphStrategy, NavGraph, ObstacleGraph, VertexId};
    pub use wayfind_planner::{plan, route_between, RoutePath};
    pub use wayfind_session::{Endpoint, NavigationSession, SessionState};
}
