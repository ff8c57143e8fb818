use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{
    assert_vertex,
    collections::{
        indexed_min_heap::{HeapEntry, IndexedMinHeap},
        search_data::SearchData,
    },
};
use crate::graphs::{Distance, Graph, Vertex, Weight, WeightedEdge};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MstError {
    #[error("graph is not connected: {unreached} vertices are unreachable from the root, {reached} are reachable")]
    NotConnected { reached: u32, unreached: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumSpanningTree {
    pub total_weight: Distance,
    /// Tree edges as `parent -> child`, in the order the children were
    /// finalized.
    pub edges: Vec<WeightedEdge>,
}

/// Prim's algorithm from `root`. The graph is expected to hold every
/// undirected edge in both directions.
///
/// Returns [`MstError::NotConnected`] instead of a partial tree if some vertex
/// cannot be reached from `root`.
///
/// # Panics
///
/// Panics if `root` is not a vertex of `graph`.
pub fn prim(graph: &dyn Graph, root: Vertex) -> Result<MinimumSpanningTree, MstError> {
    assert_vertex(graph, root, "root");

    let mut data = SearchData::new(graph.number_of_vertices());
    let mut queue = IndexedMinHeap::with_capacity(graph.number_of_vertices() as usize);

    data.set_frontier(root, 0);
    queue.push(root, 0);

    let mut total_weight: Distance = 0;
    let mut edges = Vec::new();

    while let Some(HeapEntry {
        vertex: tail,
        distance: connecting_weight,
    }) = queue.pop()
    {
        data.finalize(tail);
        total_weight += connecting_weight;

        if let Some(parent) = data.get_predecessor(tail) {
            // Connecting weights are copied from single edges and fit a Weight.
            edges.push(WeightedEdge::new(parent, tail, connecting_weight as Weight));
        }

        for edge in graph.edges(tail) {
            // Each vertex is queued at most once, so an improvement goes
            // through decrease_key instead of a second push.
            if data.improves(edge.head, edge.weight as Distance) {
                data.set_frontier(edge.head, edge.weight as Distance);
                data.set_predecessor(edge.head, tail);
                queue.decrease_key(edge.head, edge.weight as Distance);
            }
        }
    }

    let reached = data.number_of_finalized() as u32;
    let unreached = graph.number_of_vertices() - reached;
    debug!(root, reached, unreached, total_weight, "prim finished");

    if unreached > 0 {
        return Err(MstError::NotConnected { reached, unreached });
    }

    Ok(MinimumSpanningTree {
        total_weight,
        edges,
    })
}

/// Total weight of a minimum spanning tree rooted at `root`.
pub fn prim_total_weight(graph: &dyn Graph, root: Vertex) -> Result<Distance, MstError> {
    prim(graph, root).map(|tree| tree.total_weight)
}
