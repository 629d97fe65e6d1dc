use crate::error::ConfigError;
use crate::grid::GridMap;
use crate::node::Node;
use crate::search::{SearchSettings, DEFAULT_BASE_STEP_COST, DEFAULT_DIAGONAL_PENALTY};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default = "default_diagonal")]
    pub diagonal: bool,
    /// Blocked world coordinates as [x, y] pairs
    #[serde(default = "default_blocked")]
    pub blocked: Vec<[u32; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_base_step_cost")]
    pub base_step_cost: u32,
    #[serde(default = "default_diagonal_penalty")]
    pub diagonal_penalty: u32,
    #[serde(default)]
    pub max_iterations: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_start")]
    pub start: [u32; 2],
    #[serde(default = "default_goal")]
    pub goal: [u32; 2],
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Write the solved path as JSON here when set
    #[serde(default)]
    pub export_path: Option<String>,
}

// Default values
fn default_width() -> u32 { 10 }
fn default_height() -> u32 { 4 }
fn default_cell_size() -> u32 { 32 }
fn default_diagonal() -> bool { true }
fn default_blocked() -> Vec<[u32; 2]> {
    vec![[64, 96], [64, 64], [128, 96], [128, 64], [128, 32]]
}
fn default_base_step_cost() -> u32 { DEFAULT_BASE_STEP_COST }
fn default_diagonal_penalty() -> u32 { DEFAULT_DIAGONAL_PENALTY }
fn default_start() -> [u32; 2] { [192, 96] }
fn default_goal() -> [u32; 2] { [0, 32] }
fn default_level() -> String { "info".to_string() }

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cell_size: default_cell_size(),
            diagonal: default_diagonal(),
            blocked: default_blocked(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_step_cost: default_base_step_cost(),
            diagonal_penalty: default_diagonal_penalty(),
            max_iterations: None,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            goal: default_goal(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            export_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            search: SearchConfig::default(),
            query: QueryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from file, or use defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(ConfigError::Io(_)) => {
                info!("No {} found, using default configuration", path.display());
                Config::default()
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                warn!("Using default configuration");
                Config::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.map.cell_size == 0 {
            return Err(ConfigError::Invalid("map.cell_size must be at least 1".to_string()));
        }
        if self.map.width == 0 || self.map.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "map must have at least one cell, got {}x{}",
                self.map.width, self.map.height
            )));
        }
        if !GridMap::dimensions_fit(self.map.width, self.map.height, self.map.cell_size) {
            return Err(ConfigError::Invalid(format!(
                "a {}x{} map with cell size {} has coordinates beyond {}",
                self.map.width,
                self.map.height,
                self.map.cell_size,
                u32::MAX
            )));
        }
        Ok(())
    }

    /// Build the map described by the `[map]` section
    pub fn build_map(&self) -> GridMap {
        let mut map = GridMap::new(
            self.map.width,
            self.map.height,
            self.map.diagonal,
            self.map.cell_size,
        );
        for &[x, y] in &self.map.blocked {
            map.add_blocked(x, y);
        }
        map
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            base_step_cost: self.search.base_step_cost,
            diagonal_penalty: self.search.diagonal_penalty,
            max_iterations: self.search.max_iterations,
        }
    }

    pub fn start(&self) -> Node {
        let [x, y] = self.query.start;
        Node::new(x, y)
    }

    pub fn goal(&self) -> Node {
        let [x, y] = self.query.goal;
        Node::new(x, y)
    }
}
