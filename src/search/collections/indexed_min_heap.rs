use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapEntry {
    pub vertex: Vertex,
    pub distance: Distance,
}

impl HeapEntry {
    // Equal distances are ordered by vertex, which makes pop order
    // deterministic.
    fn key(&self) -> (Distance, Vertex) {
        (self.distance, self.vertex)
    }
}

/// Binary min-heap over `(vertex, distance)` entries with a position index,
/// giving O(log n) push, pop and decrease key and O(1) membership checks.
///
/// Every vertex is contained at most once. `positions[v]` is the slot of `v`
/// in `entries`, or `None` if `v` is not in the heap.
#[derive(Clone, Debug, Default)]
pub struct IndexedMinHeap {
    entries: Vec<HeapEntry>,
    positions: Vec<Option<usize>>,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

impl IndexedMinHeap {
    /// Creates an empty heap for the vertices `0..number_of_vertices`.
    pub fn with_capacity(number_of_vertices: usize) -> IndexedMinHeap {
        IndexedMinHeap {
            entries: Vec::with_capacity(number_of_vertices),
            positions: vec![None; number_of_vertices],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.position(vertex).is_some()
    }

    /// Distance currently recorded for `vertex`, if it is in the heap.
    pub fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        self.position(vertex)
            .map(|index| self.entries[index].distance)
    }

    pub fn peek(&self) -> Option<HeapEntry> {
        self.entries.first().copied()
    }

    /// Inserts a vertex that is not yet in the heap.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is out of range or already contained.
    pub fn push(&mut self, vertex: Vertex, distance: Distance) {
        assert!(
            self.position(vertex).is_none(),
            "vertex {} is already in the heap",
            vertex
        );

        let index = self.entries.len();
        self.entries.push(HeapEntry { vertex, distance });
        self.positions[vertex as usize] = Some(index);
        self.sift_up(index);
    }

    /// Removes and returns the entry with the smallest distance.
    pub fn pop(&mut self) -> Option<HeapEntry> {
        if self.entries.is_empty() {
            return None;
        }

        let root = self.entries.swap_remove(0);
        self.positions[root.vertex as usize] = None;

        if let Some(new_root) = self.entries.first() {
            self.positions[new_root.vertex as usize] = Some(0);
            self.sift_down(0);
        }

        Some(root)
    }

    /// Lowers the distance of `vertex` to `distance`, inserting it if absent.
    /// Does nothing if `distance` is not strictly smaller than the recorded one.
    pub fn decrease_key(&mut self, vertex: Vertex, distance: Distance) {
        match self.position(vertex) {
            None => self.push(vertex, distance),
            Some(index) => {
                if distance < self.entries[index].distance {
                    self.entries[index].distance = distance;
                    self.sift_up(index);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.positions[entry.vertex as usize] = None;
        }
    }

    fn position(&self, vertex: Vertex) -> Option<usize> {
        *self.positions.get(vertex as usize).unwrap_or_else(|| {
            panic!(
                "vertex {} out of range 0..{}",
                vertex,
                self.positions.len()
            )
        })
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].vertex as usize] = Some(a);
        self.positions[self.entries[b].vertex as usize] = Some(b);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.entries[index].key() >= self.entries[parent].key() {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let mut smallest = index;
            for child in [left(index), right(index)] {
                if child < len && self.entries[child].key() < self.entries[smallest].key() {
                    smallest = child;
                }
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}
