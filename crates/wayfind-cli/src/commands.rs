use anyhow::Result;
use wayfind_geom::Point;
use wayfind_session::{spawn_plan, Endpoint, NavigationSession, SessionState};

use crate::report::{InspectReport, NodeReport, RouteReport};
use crate::venue::Venue;

/// Where a route starts.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteStart {
    /// A point of interest, by name.
    Named(String),
    /// A position in source coordinates (e.g. the user's location), snapped to the nearest
    /// point of interest when `snap` is set.
    Position { at: Point, snap: bool },
}

pub fn list_nodes(venue: &Venue, search: Option<&str>) -> Vec<NodeReport> {
    venue
        .plan
        .search(search.unwrap_or_default())
        .map(|node| NodeReport::new(node, &venue.projection))
        .collect()
}

/// Plan one route through a [`NavigationSession`], running the plan on the blocking pool.
pub async fn route(venue: &Venue, start: &RouteStart, to: &str) -> Result<RouteReport> {
    let end = venue.find_node(to)?;
    let mut session = NavigationSession::new(venue.plan.clone(), venue.graph.clone());
    session.set_end(end.id)?;

    let from = match start {
        RouteStart::Named(name) => {
            let node = venue.find_node(name)?;
            session.select_start(node.id)?;
            node.name.clone()
        }
        RouteStart::Position { at, snap: true } => {
            session.set_user_location(venue.projection.project(*at))?;
            let start = session.start().and_then(|s| s.node());
            match start.and_then(|id| venue.plan.node(id)) {
                Some(node) => node.name.clone(),
                None => format!("{}, {}", at.x, at.y),
            }
        }
        RouteStart::Position { at, snap: false } => {
            session.select_start(Endpoint::Position(venue.projection.project(*at)))?;
            format!("{}, {}", at.x, at.y)
        }
    };

    // Snapping already planned inline.
    if session.state() == SessionState::Planning {
        if let Some(job) = session.prepare()? {
            let outcome = spawn_plan(job).await?;
            session.deliver(outcome);
        }
    }

    tracing::debug!(from = %from, to = %end.name, state = ?session.state(), "route computed");
    Ok(RouteReport::new(
        from,
        end.name.clone(),
        session.state(),
        session.current_path(),
        &venue.projection,
    ))
}

pub fn inspect(venue: &Venue) -> InspectReport {
    InspectReport::new(venue)
}
