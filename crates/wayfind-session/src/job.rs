use std::sync::Arc;

use wayfind_graph::ObstacleGraph;
use wayfind_planner::{plan, RoutePath};

use crate::endpoint::Resolved;
use crate::Result;

/// Snapshot of one planning request.
///
/// Holds everything needed to plan without touching the session, so it can run on any thread.
#[derive(Debug, Clone)]
pub struct PlanJob {
    pub(crate) generation: u64,
    pub(crate) graph: Arc<ObstacleGraph>,
    pub(crate) start: Resolved,
    pub(crate) end: Resolved,
}

/// Result of a [`PlanJob`], tagged with the generation it was planned for.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub generation: u64,
    pub result: Result<RoutePath>,
}

impl PlanJob {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Splice the endpoints into a private scope and plan. The shared graph is only read.
    pub fn run(self) -> PlanOutcome {
        let result = self.execute();
        PlanOutcome {
            generation: self.generation,
            result,
        }
    }

    fn execute(&self) -> Result<RoutePath> {
        let mut scope = self.graph.scope();
        let start = self.start.splice(&mut scope)?;
        let end = self.end.splice(&mut scope)?;
        Ok(plan(&scope, start, end)?)
    }
}

/// Run `job` on tokio's blocking pool.
pub fn spawn_plan(job: PlanJob) -> tokio::task::JoinHandle<PlanOutcome> {
    tokio::task::spawn_blocking(move || job.run())
}
