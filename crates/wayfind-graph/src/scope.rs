use std::collections::BTreeMap;

use wayfind_geom::Point;

use crate::{Edge, GraphError, NavGraph, ObstacleGraph, Result, VertexId};

#[derive(Debug, Clone)]
struct TempVertex {
    position: Point,
    edges: Vec<Edge>,
}

/// Per-query overlay holding temporary vertices on top of a shared [`ObstacleGraph`].
///
/// Temporary ids start right after the permanent vertices and are never reused within one
/// scope. The permanent graph is only borrowed, so nothing a scope does can leak into other
/// queries; dropping the scope discards every temporary.
#[derive(Debug)]
pub struct QueryScope<'g> {
    graph: &'g ObstacleGraph,
    temps: Vec<Option<TempVertex>>,
    // Edges from permanent vertices to live temporaries, sorted by target.
    back_edges: BTreeMap<VertexId, Vec<Edge>>,
}

impl<'g> QueryScope<'g> {
    pub(crate) fn new(graph: &'g ObstacleGraph) -> Self {
        Self {
            graph,
            temps: Vec::new(),
            back_edges: BTreeMap::new(),
        }
    }

    pub fn graph(&self) -> &'g ObstacleGraph {
        self.graph
    }

    /// Add an unconnected temporary vertex.
    pub fn add_temporary(&mut self, position: Point) -> Result<VertexId> {
        if !position.is_finite() {
            return Err(GraphError::InvalidPosition(position));
        }
        let id = VertexId((self.graph.vertex_count() + self.temps.len()) as u32);
        self.temps.push(Some(TempVertex {
            position,
            edges: Vec::new(),
        }));
        tracing::trace!(vertex = id.0, x = position.x, y = position.y, "temporary vertex added");
        Ok(id)
    }

    /// Link a temporary to every visible vertex, permanent or temporary.
    ///
    /// Re-connecting an already connected temporary replaces its edges. Returns the number of
    /// edges created.
    pub fn connect_temporary(&mut self, id: VertexId) -> Result<usize> {
        let slot = self.slot(id)?;
        self.disconnect(id, slot);

        let position = self.temp_position(slot).ok_or(GraphError::UnknownVertex(id))?;
        let base = self.graph.vertex_count();
        let mut edges = Vec::new();

        for (idx, vertex) in self.graph.vertices().iter().enumerate() {
            if self.graph.is_visible(position, vertex.position) {
                let to = VertexId(idx as u32);
                let weight = position.distance(vertex.position);
                edges.push(Edge { to, weight });
                insert_sorted(
                    self.back_edges.entry(to).or_default(),
                    Edge { to: id, weight },
                );
            }
        }

        for other_slot in 0..self.temps.len() {
            if other_slot == slot {
                continue;
            }
            let Some(other) = self.temps[other_slot].as_mut() else {
                continue;
            };
            if !self.graph.is_visible(position, other.position) {
                continue;
            }
            let weight = position.distance(other.position);
            edges.push(Edge {
                to: VertexId((base + other_slot) as u32),
                weight,
            });
            insert_sorted(&mut other.edges, Edge { to: id, weight });
        }

        let count = edges.len();
        if let Some(temp) = self.temps[slot].as_mut() {
            temp.edges = edges;
        }
        tracing::trace!(vertex = id.0, edges = count, "temporary vertex connected");
        Ok(count)
    }

    /// Remove a temporary and every edge touching it.
    pub fn remove_temporary(&mut self, id: VertexId) -> Result<()> {
        let slot = self.slot(id)?;
        self.disconnect(id, slot);
        self.temps[slot] = None;
        tracing::trace!(vertex = id.0, "temporary vertex removed");
        Ok(())
    }

    /// Number of live temporaries.
    pub fn temporary_count(&self) -> usize {
        self.temps.iter().flatten().count()
    }

    fn slot(&self, id: VertexId) -> Result<usize> {
        let slot = id
            .index()
            .checked_sub(self.graph.vertex_count())
            .ok_or(GraphError::UnknownVertex(id))?;
        match self.temps.get(slot) {
            Some(Some(_)) => Ok(slot),
            _ => Err(GraphError::UnknownVertex(id)),
        }
    }

    fn temp_position(&self, slot: usize) -> Option<Point> {
        self.temps.get(slot)?.as_ref().map(|t| t.position)
    }

    fn disconnect(&mut self, id: VertexId, slot: usize) {
        let Some(temp) = self.temps[slot].as_mut() else {
            return;
        };
        let edges = std::mem::take(&mut temp.edges);
        let base = self.graph.vertex_count();

        for edge in edges {
            if edge.to.index() < base {
                if let Some(list) = self.back_edges.get_mut(&edge.to) {
                    list.retain(|e| e.to != id);
                    if list.is_empty() {
                        self.back_edges.remove(&edge.to);
                    }
                }
            } else if let Some(Some(other)) = self.temps.get_mut(edge.to.index() - base) {
                other.edges.retain(|e| e.to != id);
            }
        }
    }
}

fn insert_sorted(list: &mut Vec<Edge>, edge: Edge) {
    let at = list.partition_point(|e| e.to < edge.to);
    list.insert(at, edge);
}

impl NavGraph for QueryScope<'_> {
    fn vertex_bound(&self) -> usize {
        self.graph.vertex_count() + self.temps.len()
    }

    fn contains(&self, vertex: VertexId) -> bool {
        self.graph.contains(vertex) || self.slot(vertex).is_ok()
    }

    fn position(&self, vertex: VertexId) -> Option<Point> {
        if let Some(p) = self.graph.position(vertex) {
            return Some(p);
        }
        let slot = self.slot(vertex).ok()?;
        self.temp_position(slot)
    }

    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = Edge> + '_ {
        let base = self.graph.vertex_count();
        let (permanent, extra): (&[Edge], &[Edge]) = if vertex.index() < base {
            (
                self.graph.edges(vertex),
                self.back_edges
                    .get(&vertex)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]),
            )
        } else {
            let temp = self.temps.get(vertex.index() - base).and_then(Option::as_ref);
            (&[], temp.map(|t| t.edges.as_slice()).unwrap_or(&[]))
        };
        // Temporary ids are all greater than permanent ones, so chaining keeps id order.
        permanent.iter().copied().chain(extra.iter().copied())
    }
}

impl Drop for QueryScope<'_> {
    fn drop(&mut self) {
        let live = self.temporary_count();
        if live > 0 {
            tracing::trace!(temporaries = live, "query scope dropped");
        }
    }
}
