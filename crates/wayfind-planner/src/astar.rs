use core::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfind_geom::Point;
use wayfind_graph::{NavGraph, ObstacleGraph, VertexId};

use crate::{PlanError, Result, Route, RoutePath};

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f: f64,
    g: f64,
    vertex: VertexId,
    tie: u64,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap; equal f goes to the
        // earliest insertion.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

/// Reusable scratch buffers for planning queries.
///
/// Buffers grow to the largest graph seen and are reset (not reallocated) per query.
#[derive(Debug, Default)]
pub struct PlanQuery {
    open: BinaryHeap<OpenNode>,
    g_score: Vec<f64>,
    came_from: Vec<Option<VertexId>>,
    closed: Vec<bool>,
    expanded: usize,
}

impl PlanQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices expanded by the last query.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn reset(&mut self, bound: usize) {
        self.open.clear();
        self.g_score.clear();
        self.g_score.resize(bound, f64::INFINITY);
        self.came_from.clear();
        self.came_from.resize(bound, None);
        self.closed.clear();
        self.closed.resize(bound, false);
        self.expanded = 0;
    }
}

/// Plan the shortest route from `start` to `end`.
///
/// Vertices are compared by handle, so distinct vertices sharing a position stay distinct.
pub fn plan<G: NavGraph>(graph: &G, start: VertexId, end: VertexId) -> Result<RoutePath> {
    plan_into(graph, start, end, &mut PlanQuery::new())
}

/// Like [`plan`], reusing `query`'s buffers.
pub fn plan_into<G: NavGraph>(
    graph: &G,
    start: VertexId,
    end: VertexId,
    query: &mut PlanQuery,
) -> Result<RoutePath> {
    let start_pos = endpoint_position(graph, start)?;
    let goal = endpoint_position(graph, end)?;

    // Search from the lower id so swapped endpoints resolve ties identically.
    if start > end {
        return plan_into(graph, end, start, query).map(|path| path.reversed());
    }

    let heuristic = |v: VertexId| -> f64 {
        graph
            .position(v)
            .map(|p| p.distance(goal))
            .unwrap_or(0.0)
    };

    query.reset(graph.vertex_bound());
    let PlanQuery {
        open,
        g_score,
        came_from,
        closed,
        expanded,
    } = query;

    g_score[start.index()] = 0.0;
    open.push(OpenNode {
        f: start_pos.distance(goal),
        g: 0.0,
        vertex: start,
        tie: 0,
    });
    let mut tie: u64 = 1;

    while let Some(node) = open.pop() {
        let idx = node.vertex.index();
        if closed[idx] || node.g != g_score[idx] {
            continue;
        }
        closed[idx] = true;
        *expanded += 1;

        if node.vertex == end {
            let mut vertices = vec![end];
            let mut current = end;
            while let Some(prev) = came_from[current.index()] {
                current = prev;
                vertices.push(current);
            }
            vertices.reverse();

            let points: Vec<Point> = vertices.iter().filter_map(|&v| graph.position(v)).collect();
            let route = Route { vertices, points };
            tracing::trace!(
                expanded = *expanded,
                length = route.length(),
                hops = route.vertices.len(),
                "route found"
            );
            return Ok(RoutePath::Found(route));
        }

        for edge in graph.neighbors(node.vertex) {
            let n = edge.to.index();
            if n >= closed.len() || closed[n] {
                continue;
            }
            let tentative_g = node.g + edge.weight;
            if tentative_g >= g_score[n] {
                continue;
            }

            came_from[n] = Some(node.vertex);
            g_score[n] = tentative_g;
            open.push(OpenNode {
                f: tentative_g + heuristic(edge.to),
                g: tentative_g,
                vertex: edge.to,
                tie,
            });
            tie += 1;
        }
    }

    tracing::trace!(expanded = *expanded, "no route");
    Ok(RoutePath::NotFound)
}

fn endpoint_position<G: NavGraph>(graph: &G, vertex: VertexId) -> Result<Point> {
    if !graph.contains(vertex) {
        return Err(PlanError::InvalidNode(vertex));
    }
    graph
        .position(vertex)
        .ok_or(PlanError::InvalidNode(vertex))
}

/// Route between two arbitrary positions.
///
/// Both positions are spliced into a fresh [`QueryScope`](wayfind_graph::QueryScope) as
/// temporaries and discarded afterwards; the returned vertex handles of the endpoints are only
/// meaningful inside that scope.
pub fn route_between(graph: &ObstacleGraph, from: Point, to: Point) -> Result<RoutePath> {
    let mut scope = graph.scope();
    let start = scope.add_temporary(from)?;
    let end = scope.add_temporary(to)?;
    scope.connect_temporary(start)?;
    scope.connect_temporary(end)?;
    plan(&scope, start, end)
}
