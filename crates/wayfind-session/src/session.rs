use std::sync::Arc;

use tokio::sync::watch;
use wayfind_floor::FloorPlan;
use wayfind_geom::Point;
use wayfind_graph::ObstacleGraph;
use wayfind_planner::RoutePath;

use crate::{Endpoint, PlanJob, PlanOutcome, Result, SessionError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionState {
    /// Start or end (or both) not selected.
    #[default]
    Idle,
    /// Both selected; a plan for the current generation is outstanding.
    Planning,
    /// A route for the current selection is available.
    Ready,
    /// The current selection has no route.
    Unreachable,
}

/// The watched value published on every state change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathUpdate {
    pub generation: u64,
    pub state: SessionState,
    pub path: Option<RoutePath>,
}

/// Start/end selection over one floor plan and its graph.
///
/// Setters such as [`set_start`](Self::set_start) plan inline and return the resulting state.
/// The `select_*` variants only record the selection and hand back a [`PlanJob`] that the
/// caller can run elsewhere (see [`spawn_plan`](crate::spawn_plan)) and feed back through
/// [`deliver`](Self::deliver).
#[derive(Debug)]
pub struct NavigationSession {
    plan: Arc<FloorPlan>,
    graph: Arc<ObstacleGraph>,
    start: Option<Endpoint>,
    end: Option<Endpoint>,
    generation: u64,
    state: SessionState,
    path: Option<RoutePath>,
    updates: watch::Sender<PathUpdate>,
}

impl NavigationSession {
    pub fn new(plan: Arc<FloorPlan>, graph: Arc<ObstacleGraph>) -> Self {
        let (updates, _) = watch::channel(PathUpdate::default());
        Self {
            plan,
            graph,
            start: None,
            end: None,
            generation: 0,
            state: SessionState::Idle,
            path: None,
            updates,
        }
    }

    pub fn floor_plan(&self) -> &Arc<FloorPlan> {
        &self.plan
    }

    pub fn graph(&self) -> &Arc<ObstacleGraph> {
        &self.graph
    }

    pub fn start(&self) -> Option<Endpoint> {
        self.start
    }

    pub fn end(&self) -> Option<Endpoint> {
        self.end
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Route for the current selection, once planned.
    pub fn current_path(&self) -> Option<&RoutePath> {
        self.path.as_ref()
    }

    /// Watch the session. The receiver always sees the latest [`PathUpdate`]; intermediate
    /// values may be skipped.
    pub fn subscribe(&self) -> watch::Receiver<PathUpdate> {
        self.updates.subscribe()
    }

    pub fn set_start(&mut self, start: impl Into<Endpoint>) -> Result<SessionState> {
        let job = self.select_start(start)?;
        Ok(self.run_inline(job))
    }

    pub fn set_end(&mut self, end: impl Into<Endpoint>) -> Result<SessionState> {
        let job = self.select_end(end)?;
        Ok(self.run_inline(job))
    }

    /// Record a new start without planning. Returns the job for the new selection, if both
    /// ends are set.
    pub fn select_start(&mut self, start: impl Into<Endpoint>) -> Result<Option<PlanJob>> {
        let start = start.into();
        start.validate(&self.plan)?;
        self.start = Some(start);
        self.selection_changed()
    }

    /// Record a new end without planning.
    pub fn select_end(&mut self, end: impl Into<Endpoint>) -> Result<Option<PlanJob>> {
        let end = end.into();
        end.validate(&self.plan)?;
        self.end = Some(end);
        self.selection_changed()
    }

    pub fn clear_start(&mut self) -> SessionState {
        self.start = None;
        self.clear_selection()
    }

    pub fn clear_end(&mut self) -> SessionState {
        self.end = None;
        self.clear_selection()
    }

    pub fn clear(&mut self) -> SessionState {
        self.start = None;
        self.end = None;
        self.clear_selection()
    }

    /// Use the node nearest to `location` (other than the selected end node) as the start.
    ///
    /// When the end node is the only node, the start is left as it was.
    pub fn set_user_location(&mut self, location: Point) -> Result<SessionState> {
        if !location.is_finite() {
            return Err(SessionError::InvalidPosition(location));
        }
        let exclude = self.end.and_then(|e| e.node());
        let Some(nearest) = self.plan.nearest_node(location, exclude) else {
            tracing::debug!(x = location.x, y = location.y, "no node to snap user location to");
            return Ok(self.state);
        };
        let id = nearest.id;
        tracing::debug!(node = %nearest.name, "user location snapped to node");
        self.set_start(id)
    }

    /// Snapshot the current selection as a job, or `None` while idle.
    pub fn prepare(&self) -> Result<Option<PlanJob>> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Ok(None);
        };
        Ok(Some(PlanJob {
            generation: self.generation,
            graph: Arc::clone(&self.graph),
            start: start.resolve(&self.plan, &self.graph)?,
            end: end.resolve(&self.plan, &self.graph)?,
        }))
    }

    /// Publish `outcome` if it belongs to the current generation. Stale outcomes are dropped
    /// and `false` is returned.
    pub fn deliver(&mut self, outcome: PlanOutcome) -> bool {
        if outcome.generation != self.generation || self.state != SessionState::Planning {
            tracing::debug!(
                outcome = outcome.generation,
                current = self.generation,
                "discarding superseded plan"
            );
            return false;
        }

        let path = match outcome.result {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(error = %err, generation = self.generation, "planning failed");
                RoutePath::NotFound
            }
        };

        self.state = if path.is_found() {
            SessionState::Ready
        } else {
            SessionState::Unreachable
        };
        tracing::debug!(
            generation = self.generation,
            state = ?self.state,
            length = path.length(),
            "route delivered"
        );
        self.path = Some(path);
        self.publish();
        true
    }

    fn run_inline(&mut self, job: Option<PlanJob>) -> SessionState {
        if let Some(job) = job {
            let outcome = job.run();
            self.deliver(outcome);
        }
        self.state
    }

    fn selection_changed(&mut self) -> Result<Option<PlanJob>> {
        self.generation += 1;
        self.path = None;
        let job = self.prepare()?;
        self.state = if job.is_some() {
            SessionState::Planning
        } else {
            SessionState::Idle
        };
        if job.is_some() {
            tracing::debug!(generation = self.generation, "replanning");
        }
        self.publish();
        Ok(job)
    }

    fn clear_selection(&mut self) -> SessionState {
        self.generation += 1;
        self.path = None;
        self.state = SessionState::Idle;
        self.publish();
        self.state
    }

    fn publish(&self) {
        self.updates.send_replace(PathUpdate {
            generation: self.generation,
            state: self.state,
            path: self.path.clone(),
        });
    }
}
