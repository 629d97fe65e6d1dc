use crate::error::ConfigError;
use crate::grid::GridMap;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A solved query, ready to be written out as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathExport {
    /// Map revision the path was solved against
    pub grid_revision: u64,
    pub cell_size: u32,
    pub start: [u32; 2],
    pub goal: [u32; 2],
    pub found: bool,
    /// Accumulated cost at the goal, if a path was found
    pub cost: Option<u32>,
    /// Waypoints in goal-to-start order
    pub waypoints: Vec<[u32; 2]>,
}

impl PathExport {
    /// Build an export from a `find_path` result
    pub fn from_path(map: &GridMap, start: &Node, goal: &Node, path: &[Node]) -> Self {
        PathExport {
            grid_revision: map.revision(),
            cell_size: map.cell_size,
            start: [start.x, start.y],
            goal: [goal.x, goal.y],
            found: !path.is_empty(),
            cost: path.first().map(|node| node.g),
            waypoints: path.iter().map(|node| [node.x, node.y]).collect(),
        }
    }

    /// Waypoints in travel order (start first)
    pub fn travel_order(&self) -> Vec<[u32; 2]> {
        self.waypoints.iter().rev().copied().collect()
    }

    /// Save to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let export: PathExport = serde_json::from_str(&json)?;
        Ok(export)
    }
}

/// Format path for display
pub fn format_path(path: &[Node]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, node) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&format!("({},{})", node.x, node.y));
    }
    result
}
