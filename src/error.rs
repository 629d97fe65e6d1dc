use thiserror::Error;

/// Errors raised by a path query.
///
/// An unreachable goal is not an error: `find_path` returns an empty path for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("({x},{y}) is outside the {width}x{height} map (cell size {cell_size})")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("({x},{y}) is not aligned to cell size {cell_size}")]
    Misaligned { x: u32, y: u32, cell_size: u32 },

    #[error("Map has a cell size of zero")]
    ZeroCellSize,

    #[error("Search gave up after {limit} expansions")]
    IterationLimit { limit: usize },
}

/// Errors raised while loading configuration or reading/writing path exports.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML Parsing Error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
