use std::io::Read;

use indicatif::ProgressIterator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utility::{get_progressbar, InputError, Tokens};

pub mod adjacency_list_graph;

use adjacency_list_graph::AdjacencyListGraph;

pub type Vertex = u32;
pub type Weight = u32;
/// Sum of edge weights. Wide enough that no simple path or spanning tree over
/// `u32` weights can overflow it.
pub type Distance = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn vertices(&self) -> std::ops::Range<Vertex> {
        0..self.number_of_vertices()
    }

    /// Outgoing edges of `tail` in insertion order.
    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    /// Lightest weight of all parallel edges `tail -> head`, if there is one.
    fn get_weight(&self, edge: &Edge) -> Option<Weight> {
        self.edges(edge.tail)
            .filter(|other| other.head == edge.head)
            .map(|other| other.weight)
            .min()
    }

    /// Sums the weights along `vertices`, or `None` if two consecutive
    /// vertices are not connected.
    fn get_path_distance(&self, vertices: &[Vertex]) -> Option<Distance> {
        vertices.windows(2).try_fold(0, |distance, pair| {
            let weight = self.get_weight(&Edge {
                tail: pair[0],
                head: pair[1],
            })?;
            Some(distance + weight as Distance)
        })
    }
}

/// How edges read from text are inserted into the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeDirection {
    Directed,
    /// Every edge is inserted in both directions.
    Undirected,
}

/// Parses a graph in the `n m` header followed by `m` lines of
/// `from to weight` format.
pub fn parse_graph(input: &str, direction: EdgeDirection) -> Result<AdjacencyListGraph, InputError> {
    let mut tokens = Tokens::new(input);

    let number_of_vertices: u32 = tokens.next_value("number of vertices")?;
    let number_of_edges: u64 = tokens.next_value("number of edges")?;

    let mut graph = AdjacencyListGraph::new(number_of_vertices);

    for _ in (0..number_of_edges).progress_with(get_progressbar("Reading edges", number_of_edges)) {
        let tail: Vertex = tokens.next_value("tail")?;
        let head: Vertex = tokens.next_value("head")?;
        let weight: Weight = tokens.next_value("weight")?;

        if tail >= number_of_vertices || head >= number_of_vertices {
            return Err(InputError::VertexOutOfRange {
                tail,
                head,
                number_of_vertices,
            });
        }

        let edge = WeightedEdge::new(tail, head, weight);
        match direction {
            EdgeDirection::Directed => graph.add_edge(&edge),
            EdgeDirection::Undirected => graph.add_undirected_edge(&edge),
        }
    }

    debug!(
        number_of_vertices,
        number_of_edges,
        ?direction,
        "read graph"
    );

    Ok(graph)
}

pub fn read_graph<R: Read>(mut reader: R, direction: EdgeDirection) -> Result<AdjacencyListGraph, InputError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_graph(&input, direction)
}
