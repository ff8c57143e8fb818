use rayon::prelude::*;
use tracing::{debug, trace};

use super::{
    assert_vertex,
    collections::{
        indexed_min_heap::{HeapEntry, IndexedMinHeap},
        search_data::SearchData,
    },
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::graphs::{Distance, Graph, Vertex};

/// Runs Dijkstra's algorithm from `source`. Stops as soon as `target` is
/// finalized, or explores everything reachable if there is no target.
///
/// `data` and `queue` have to be empty; call `clear` on both before reusing
/// them for another search.
pub fn dijkstra_search(
    graph: &dyn Graph,
    data: &mut SearchData,
    queue: &mut IndexedMinHeap,
    source: Vertex,
    target: Option<Vertex>,
) {
    data.set_frontier(source, 0);
    queue.push(source, 0);

    let mut expanded = 0u32;
    while let Some(HeapEntry {
        vertex: tail,
        distance: distance_tail,
    }) = queue.pop()
    {
        if data.is_stale(tail, distance_tail) {
            continue;
        }
        data.finalize(tail);

        if Some(tail) == target {
            break;
        }
        expanded += 1;

        for edge in graph.edges(tail) {
            let alternative_distance_head = distance_tail + edge.weight as Distance;
            if data.improves(edge.head, alternative_distance_head) {
                trace!(tail, head = edge.head, distance = alternative_distance_head, "relax");
                data.set_frontier(edge.head, alternative_distance_head);
                data.set_predecessor(edge.head, tail);
                queue.decrease_key(edge.head, alternative_distance_head);
            }
        }
    }

    debug!(source, ?target, expanded, "dijkstra search finished");
}

/// Shortest distance from `source` to `target`, or `None` if `target` is
/// unreachable.
///
/// # Panics
///
/// Panics if `source` or `target` is not a vertex of `graph`.
pub fn dijkstra_one_to_one(graph: &dyn Graph, source: Vertex, target: Vertex) -> Option<Distance> {
    assert_vertex(graph, source, "source");
    assert_vertex(graph, target, "target");

    let mut data = SearchData::new(graph.number_of_vertices());
    let mut queue = IndexedMinHeap::with_capacity(graph.number_of_vertices() as usize);
    dijkstra_search(graph, &mut data, &mut queue, source, Some(target));

    data.get_finalized_distance(target)
}

/// Like [`dijkstra_one_to_one`], but also returns the vertices of a shortest
/// path.
pub fn dijkstra_one_to_one_path(graph: &dyn Graph, source: Vertex, target: Vertex) -> Option<Path> {
    assert_vertex(graph, source, "source");
    assert_vertex(graph, target, "target");

    let mut data = SearchData::new(graph.number_of_vertices());
    let mut queue = IndexedMinHeap::with_capacity(graph.number_of_vertices() as usize);
    dijkstra_search(graph, &mut data, &mut queue, source, Some(target));

    data.get_path(target)
}

/// Distances from `source` to every vertex, `None` for unreachable ones.
pub fn dijkstra_one_to_all(graph: &dyn Graph, source: Vertex) -> Vec<Option<Distance>> {
    assert_vertex(graph, source, "source");

    let mut data = SearchData::new(graph.number_of_vertices());
    let mut queue = IndexedMinHeap::with_capacity(graph.number_of_vertices() as usize);
    dijkstra_search(graph, &mut data, &mut queue, source, None);

    graph
        .vertices()
        .map(|vertex| data.get_finalized_distance(vertex))
        .collect()
}

/// Answers independent requests in parallel. Every request gets its own queue
/// and search data, the graph is shared read only.
pub fn shortest_path_distances_par(
    graph: &dyn Graph,
    requests: &[ShortestPathRequest],
) -> Vec<Option<Distance>> {
    requests
        .par_iter()
        .map(|request| dijkstra_one_to_one(graph, request.source, request.target))
        .collect()
}

pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        dijkstra_one_to_one_path(self.graph, source, target)
    }

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance> {
        dijkstra_one_to_one(self.graph, source, target)
    }
}
