use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Handle to a cell in a [`GridMap`](crate::GridMap)'s node arena.
///
/// Parent links are stored as handles, never as references, so the
/// back-pointer tree built during a search owns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Search state for one grid cell.
///
/// Coordinates are in world units (cell `(i, j)` sits at `i * cell_size, j * cell_size`).
/// Two nodes are equal when their coordinates match; cost fields are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Node {
    pub x: u32,
    pub y: u32,
    /// Accumulated cost from the start
    pub g: u32,
    /// Heuristic estimate to the goal
    pub h: u32,
    /// g + h
    pub f: u32,
    /// Predecessor on the discovered path
    pub parent: Option<NodeId>,
}

impl Node {
    /// A bare query node at (x, y) with zeroed costs
    pub fn new(x: u32, y: u32) -> Self {
        Node {
            x,
            y,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
        }
    }

    /// Reset working state ahead of a new search
    pub fn reset(&mut self, base_step_cost: u32) {
        self.g = base_step_cost;
        self.h = 0;
        self.f = 0;
        self.parent = None;
    }

    pub fn calculate_f(&mut self) {
        self.f = self.g.saturating_add(self.h);
    }

    pub fn coords(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn same_position(&self, other: &Node) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.same_position(other)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}
