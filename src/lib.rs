pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod search;

pub use error::{ConfigError, SearchError};
pub use export::{format_path, PathExport};
pub use grid::GridMap;
pub use heuristic::estimate;
pub use node::{Node, NodeId};
pub use search::{AStar, SearchSettings, SearchStats};
