use crate::node::{Node, NodeId};
use crate::search::{AStar, SearchSettings};
use crate::SearchError;
use std::collections::HashSet;

/// Static description of the search space.
///
/// `width` and `height` are cell counts; every coordinate passed in or out is
/// in world units, a multiple of `cell_size`. The blocked set is only changed
/// between searches, and searches never write to the map.
#[derive(Debug, Clone)]
pub struct GridMap {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub diagonal: bool,
    blocked: HashSet<(u32, u32)>,
    /// One node per cell in row-major order
    cells: Vec<Node>,
    /// Incremented whenever the blocked set gains a coordinate
    revision: u64,
}

impl GridMap {
    /// Create a map with every cell free.
    ///
    /// The far cell's coordinates, `(width - 1) * cell_size` and
    /// `(height - 1) * cell_size`, must fit in a `u32`; see [`dimensions_fit`](Self::dimensions_fit).
    pub fn new(width: u32, height: u32, diagonal: bool, cell_size: u32) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Node::new(x * cell_size, y * cell_size));
            }
        }

        GridMap {
            width,
            height,
            cell_size,
            diagonal,
            blocked: HashSet::new(),
            cells,
            revision: 0,
        }
    }

    /// Create a map with specific blocked coordinates
    pub fn with_blocked(
        width: u32,
        height: u32,
        diagonal: bool,
        cell_size: u32,
        blocked: &[(u32, u32)],
    ) -> Self {
        let mut map = Self::new(width, height, diagonal, cell_size);
        for &(x, y) in blocked {
            map.add_blocked(x, y);
        }
        map
    }

    /// Whether every cell of a `width` x `height` map has representable world coordinates
    pub fn dimensions_fit(width: u32, height: u32, cell_size: u32) -> bool {
        let extent = |cells: u32| cells.saturating_sub(1).checked_mul(cell_size).is_some();
        extent(width) && extent(height)
    }

    /// Mark a world coordinate as permanently closed. Adding it twice is a no-op.
    pub fn add_blocked(&mut self, x: u32, y: u32) {
        if self.blocked.insert((x, y)) {
            self.revision += 1;
        }
    }

    pub fn is_blocked(&self, x: u32, y: u32) -> bool {
        self.blocked.contains(&(x, y))
    }

    /// Blocked coordinates in no particular order
    pub fn blocked_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.blocked.iter().copied()
    }

    /// Whether (x, y) is a cell position on this map
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.id_of(x, y).is_some()
    }

    /// Convert world coordinates to a node handle.
    /// Returns None off the map or between cell positions.
    pub fn id_of(&self, x: u32, y: u32) -> Option<NodeId> {
        if self.cell_size == 0 || x % self.cell_size != 0 || y % self.cell_size != 0 {
            return None;
        }
        let (col, row) = (x / self.cell_size, y / self.cell_size);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(NodeId((col + row * self.width) as usize))
    }

    /// Convert a node handle back to world coordinates
    pub fn coords_of(&self, id: NodeId) -> (u32, u32) {
        self.cells[id.0].coords()
    }

    pub fn cells(&self) -> &[Node] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Current revision number
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Validate that (x, y) may be used as a query endpoint
    pub(crate) fn check_endpoint(&self, x: u32, y: u32) -> Result<NodeId, SearchError> {
        if self.cell_size == 0 {
            return Err(SearchError::ZeroCellSize);
        }
        if x % self.cell_size != 0 || y % self.cell_size != 0 {
            return Err(SearchError::Misaligned {
                x,
                y,
                cell_size: self.cell_size,
            });
        }
        self.id_of(x, y).ok_or(SearchError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
        })
    }

    /// Run a search with default cost settings
    pub fn find_path(&self, start: Node, goal: Node) -> Result<Vec<Node>, SearchError> {
        AStar::new(self).find_path(start, goal)
    }

    /// Run a search with explicit cost settings
    pub fn find_path_with(
        &self,
        settings: SearchSettings,
        start: Node,
        goal: Node,
    ) -> Result<Vec<Node>, SearchError> {
        AStar::with_settings(self, settings).find_path(start, goal)
    }
}
