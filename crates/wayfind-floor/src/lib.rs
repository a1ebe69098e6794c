//! Immutable floor plans for one venue level.
//!
//! A [`FloorPlan`] is built once from an abstract sequence of [`FeatureRecord`]s (the decoding
//! of any particular file format happens elsewhere) and never mutated afterwards. Reloading a
//! venue means building a new plan.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod kind;
pub mod node;
pub mod plan;
pub mod record;

pub use kind::PolygonKind;
pub use node::{NamedNode, NodeId};
pub use plan::{ClassifiedPolygon, Decoration, FloorPlan};
pub use record::{FeatureGeometry, FeatureRecord};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FloorPlanError {
    /// The source geometry cannot be routed (for example it has no named points).
    #[error("malformed floor plan: {0}")]
    Malformed(String),

    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
}

pub type Result<T> = std::result::Result<T, FloorPlanError>;
