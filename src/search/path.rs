use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// A path through the graph and the sum of its edge weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

impl ShortestPathRequest {
    pub fn new(source: Vertex, target: Vertex) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }
}

/// A shortest path request together with its expected answer. `None` means the
/// target is unreachable from the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}
