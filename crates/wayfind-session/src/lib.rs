//! Navigation session: the current start/end selection, the route between them, and a watched
//! value that renderers subscribe to.
//!
//! Every selection change bumps a generation counter. Plans are computed by [`PlanJob`]s that
//! snapshot their generation, and [`NavigationSession::deliver`] drops any outcome whose
//! generation is no longer current, so an older route is never published after a newer one.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod endpoint;
pub mod job;
pub mod session;

pub use endpoint::Endpoint;
pub use job::{spawn_plan, PlanJob, PlanOutcome};
pub use session::{NavigationSession, PathUpdate, SessionState};

use thiserror::Error;
use wayfind_floor::NodeId;
use wayfind_geom::Point;
use wayfind_planner::PlanError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("node {0:?} is not part of the floor plan")]
    UnknownNode(NodeId),

    #[error("position must be finite, got {0:?}")]
    InvalidPosition(Point),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
