use serde::{Deserialize, Serialize};

use super::{Graph, TaillessEdge, Vertex, WeightedEdge};

/// Adjacency list graph. Outgoing edges keep their insertion order, parallel
/// edges and self loops are stored as given.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AdjacencyListGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl AdjacencyListGraph {
    pub fn new(number_of_vertices: u32) -> AdjacencyListGraph {
        AdjacencyListGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> AdjacencyListGraph {
        let mut graph = AdjacencyListGraph::new(number_of_vertices);
        edges.iter().for_each(|edge| graph.add_edge(edge));
        graph
    }

    /// Builds a graph where every edge is inserted in both directions.
    pub fn from_undirected_edges(
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> AdjacencyListGraph {
        let mut graph = AdjacencyListGraph::new(number_of_vertices);
        edges.iter().for_each(|edge| graph.add_undirected_edge(edge));
        graph
    }

    /// Appends the directed edge `tail -> head`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, edge: &WeightedEdge) {
        let number_of_vertices = self.edges.len();
        assert!(
            (edge.head as usize) < number_of_vertices,
            "head {} out of range 0..{}",
            edge.head,
            number_of_vertices
        );

        let edges_sharing_tail = self
            .edges
            .get_mut(edge.tail as usize)
            .unwrap_or_else(|| panic!("tail {} out of range 0..{}", edge.tail, number_of_vertices));
        edges_sharing_tail.push(edge.remove_tail());
    }

    pub fn add_undirected_edge(&mut self, edge: &WeightedEdge) {
        self.add_edge(edge);
        self.add_edge(&edge.reversed());
    }
}

impl Graph for AdjacencyListGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }
}
