use crate::grid::GridMap;
use crate::heuristic::estimate;
use crate::node::{Node, NodeId};
use crate::SearchError;
use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub const DEFAULT_BASE_STEP_COST: u32 = 4;
pub const DEFAULT_DIAGONAL_PENALTY: u32 = 6;

/// Orthogonal offsets in cells: north, south, east, west
static ORTHOGONAL: [(i64, i64); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

/// Diagonal offsets in cells: north-west, north-east, south-east, south-west
static DIAGONAL: [(i64, i64); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// Movement costs and limits for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Cost of one orthogonal step
    pub base_step_cost: u32,
    /// Added on top of `base_step_cost` for a diagonal step
    pub diagonal_penalty: u32,
    /// Expand at most this many nodes; popping the goal is always allowed
    pub max_iterations: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_step_cost: DEFAULT_BASE_STEP_COST,
            diagonal_penalty: DEFAULT_DIAGONAL_PENALTY,
            max_iterations: None,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from the frontier to the closed set
    pub expanded: usize,
    /// Nodes inserted into the frontier, start included
    pub discovered: usize,
}

/// A frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    h: u32,
    /// Insertion order
    seq: u64,
    id: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .f
            .cmp(&self.f)
            // Tie-breakers: closer to the goal first, then first inserted
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Working state scoped to a single `find_path` call.
///
/// Holds its own copy of the node arena so the map is only ever read.
struct SearchContext {
    nodes: Vec<Node>,
    open: Vec<bool>,
    closed: Vec<bool>,
    frontier: BinaryHeap<OpenEntry>,
    next_seq: u64,
    stats: SearchStats,
}

impl SearchContext {
    fn new(map: &GridMap, settings: &SearchSettings) -> Self {
        let mut nodes = map.cells().to_vec();
        for node in &mut nodes {
            node.reset(settings.base_step_cost);
        }

        let mut closed = vec![false; nodes.len()];
        for (x, y) in map.blocked_cells() {
            if let Some(id) = map.id_of(x, y) {
                closed[id.0] = true;
            }
        }

        SearchContext {
            open: vec![false; nodes.len()],
            closed,
            nodes,
            frontier: BinaryHeap::new(),
            next_seq: 0,
            stats: SearchStats::default(),
        }
    }

    fn push_open(&mut self, id: NodeId) {
        let node = &self.nodes[id.0];
        self.frontier.push(OpenEntry {
            f: node.f,
            h: node.h,
            seq: self.next_seq,
            id,
        });
        self.next_seq += 1;
        self.open[id.0] = true;
        self.stats.discovered += 1;
    }

    fn pop_open(&mut self) -> Option<NodeId> {
        let entry = self.frontier.pop()?;
        self.open[entry.id.0] = false;
        self.closed[entry.id.0] = true;
        self.stats.expanded += 1;
        Some(entry.id)
    }

    fn is_known(&self, id: NodeId) -> bool {
        self.open[id.0] || self.closed[id.0]
    }
}

/// A* search over a [`GridMap`].
///
/// Nodes keep the cost and parent they were first discovered with; a node
/// already in the frontier or the closed set is never re-costed. Frontier ties
/// on `f` go to the lower `h`, then to the earlier insertion.
pub struct AStar<'a> {
    map: &'a GridMap,
    settings: SearchSettings,
}

impl<'a> AStar<'a> {
    pub fn new(map: &'a GridMap) -> Self {
        Self::with_settings(map, SearchSettings::default())
    }

    pub fn with_settings(map: &'a GridMap, settings: SearchSettings) -> Self {
        AStar { map, settings }
    }

    /// Find a path from `start` to `goal`.
    ///
    /// The path runs goal first, start last. An empty path means the goal is
    /// blocked or cannot be reached.
    pub fn find_path(&self, start: Node, goal: Node) -> Result<Vec<Node>, SearchError> {
        self.find_path_with_stats(start, goal).map(|(path, _)| path)
    }

    /// Same as [`find_path`](Self::find_path), also returning search counters
    pub fn find_path_with_stats(
        &self,
        start: Node,
        goal: Node,
    ) -> Result<(Vec<Node>, SearchStats), SearchError> {
        let start_id = self.map.check_endpoint(start.x, start.y)?;
        let goal_id = self.map.check_endpoint(goal.x, goal.y)?;

        debug!(
            "[find_path] ({},{}) -> ({},{}), diagonal={}",
            start.x, start.y, goal.x, goal.y, self.map.diagonal
        );

        let mut ctx = SearchContext::new(self.map, &self.settings);

        if ctx.closed[goal_id.0] {
            debug!("[find_path] Goal ({},{}) is blocked - no path", goal.x, goal.y);
            return Ok((Vec::new(), ctx.stats));
        }

        {
            let origin = &mut ctx.nodes[start_id.0];
            let h = estimate(origin, &goal, self.map.cell_size);
            origin.g = 0;
            origin.h = h;
            origin.calculate_f();
        }
        ctx.push_open(start_id);

        let mut found = false;
        while let Some(current) = ctx.pop_open() {
            if current == goal_id {
                found = true;
                break;
            }

            // Reaching the goal never counts against the cap
            if let Some(limit) = self.settings.max_iterations {
                if ctx.stats.expanded > limit {
                    warn!("[find_path] Giving up after {} expansions", limit);
                    return Err(SearchError::IterationLimit { limit });
                }
            }

            self.expand(&mut ctx, current, &goal);
        }

        if !found {
            debug!(
                "[find_path] No path after {} expansions",
                ctx.stats.expanded
            );
            return Ok((Vec::new(), ctx.stats));
        }

        let path = reconstruct(&ctx.nodes, goal_id, start_id);
        debug!(
            "[find_path] Found path: {} nodes, {} expansions",
            path.len(),
            ctx.stats.expanded
        );
        Ok((path, ctx.stats))
    }

    /// Discover every unseen neighbor of `current`
    fn expand(&self, ctx: &mut SearchContext, current: NodeId, goal: &Node) {
        let parent_g = ctx.nodes[current.0].g;
        trace!(
            "[expand] {:?} at {:?} g={} f={}",
            current,
            ctx.nodes[current.0].coords(),
            parent_g,
            ctx.nodes[current.0].f
        );

        let diagonal: &[(i64, i64)] = if self.map.diagonal { &DIAGONAL } else { &[] };
        let offsets = ORTHOGONAL
            .iter()
            .map(|offset| (offset, 0))
            .chain(diagonal.iter().map(|offset| (offset, self.settings.diagonal_penalty)));

        for (&(dx, dy), penalty) in offsets {
            let Some(neighbor) = self.neighbor_of(current, dx, dy) else {
                continue;
            };
            if ctx.is_known(neighbor) {
                continue;
            }

            let node = &mut ctx.nodes[neighbor.0];
            node.g = self
                .settings
                .base_step_cost
                .saturating_add(penalty)
                .saturating_add(parent_g);
            let h = estimate(node, goal, self.map.cell_size);
            node.h = h;
            node.calculate_f();
            node.parent = Some(current);
            ctx.push_open(neighbor);
        }
    }

    /// The cell `(dx, dy)` cells away from `id`, if it is on the map
    fn neighbor_of(&self, id: NodeId, dx: i64, dy: i64) -> Option<NodeId> {
        let width = self.map.width as i64;
        let col = (id.0 as i64) % width + dx;
        let row = (id.0 as i64) / width + dy;
        if col < 0 || row < 0 || col >= width || row >= self.map.height as i64 {
            return None;
        }
        Some(NodeId((col + row * width) as usize))
    }
}

/// Walk parent links from the goal back to the start, goal first
fn reconstruct(nodes: &[Node], goal: NodeId, start: NodeId) -> Vec<Node> {
    let mut path = Vec::new();
    let mut id = goal;
    loop {
        let node = nodes[id.0];
        path.push(node);
        if id == start {
            break;
        }
        match node.parent {
            Some(parent) => id = parent,
            None => break,
        }
    }
    path
}
