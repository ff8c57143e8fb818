use crate::graphs::{Distance, Graph, Vertex};

pub mod collections;
pub mod dijkstra;
pub mod path;
pub mod prim;

use path::Path;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path>;

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance>;
}

/// Panics unless `vertex` is a vertex of `graph`. Out of range vertices are a
/// caller bug, not a search result.
pub(crate) fn assert_vertex(graph: &dyn Graph, vertex: Vertex, role: &str) {
    assert!(
        vertex < graph.number_of_vertices(),
        "{} {} out of range 0..{}",
        role,
        vertex,
        graph.number_of_vertices()
    );
}
