use crate::{
    graphs::{Distance, Vertex},
    search::path::Path,
};

/// Status of a vertex during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexState {
    /// Not reached yet.
    Unseen,
    /// In the queue with its best tentative distance.
    Frontier(Distance),
    /// Popped from the queue. The distance will not change anymore.
    Finalized(Distance),
}

/// Per vertex states and predecessors of one search.
pub struct SearchData {
    states: Vec<VertexState>,
    predecessors: Vec<Option<Vertex>>,
}

impl SearchData {
    pub fn new(number_of_vertices: u32) -> SearchData {
        SearchData {
            states: vec![VertexState::Unseen; number_of_vertices as usize],
            predecessors: vec![None; number_of_vertices as usize],
        }
    }

    /// Clears all stored data, preparing for a new search.
    pub fn clear(&mut self) {
        self.states.fill(VertexState::Unseen);
        self.predecessors.fill(None);
    }

    pub fn state(&self, vertex: Vertex) -> VertexState {
        self.states[vertex as usize]
    }

    pub fn set_frontier(&mut self, vertex: Vertex, distance: Distance) {
        self.states[vertex as usize] = VertexState::Frontier(distance);
    }

    /// Turns a frontier vertex into a finalized one and returns its distance.
    ///
    /// # Panics
    ///
    /// Panics if the vertex was never reached.
    pub fn finalize(&mut self, vertex: Vertex) -> Distance {
        let state = &mut self.states[vertex as usize];
        let distance = match *state {
            VertexState::Frontier(distance) | VertexState::Finalized(distance) => distance,
            VertexState::Unseen => panic!("vertex {} finalized before it was reached", vertex),
        };
        *state = VertexState::Finalized(distance);
        distance
    }

    /// Whether `distance` is an improvement for `vertex`. Finalized vertices
    /// never improve, unseen vertices always do.
    pub fn improves(&self, vertex: Vertex, distance: Distance) -> bool {
        match self.state(vertex) {
            VertexState::Unseen => true,
            VertexState::Frontier(current) => distance < current,
            VertexState::Finalized(_) => false,
        }
    }

    /// Whether a popped queue entry is outdated, i.e. the vertex is already
    /// finalized or a smaller distance has been recorded since.
    pub fn is_stale(&self, vertex: Vertex, distance: Distance) -> bool {
        match self.state(vertex) {
            VertexState::Frontier(current) => distance > current,
            VertexState::Unseen | VertexState::Finalized(_) => true,
        }
    }

    pub fn get_finalized_distance(&self, vertex: Vertex) -> Option<Distance> {
        match self.state(vertex) {
            VertexState::Finalized(distance) => Some(distance),
            _ => None,
        }
    }

    pub fn number_of_finalized(&self) -> usize {
        self.states
            .iter()
            .filter(|state| matches!(state, VertexState::Finalized(_)))
            .count()
    }

    pub fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors[vertex as usize]
    }

    pub fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = Some(predecessor);
    }

    /// Constructs the path to a finalized target by following predecessors
    /// back to the source. Returns `None` if the target is not finalized.
    pub fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = self.get_finalized_distance(target)?;

        let mut vertices = vec![target];
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
