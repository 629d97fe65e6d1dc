//! Runs one path query described by a TOML config and prints the result.
//!
//! Usage: gridpath [config.toml]

use env_logger::Env;
use gridpath::config::Config;
use gridpath::{AStar, PathExport};
use log::{error, info};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or("config.toml");

    // Logging level comes from the config, so peek at it before the logger exists
    let level = Config::load(config_path)
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| "info".to_string());
    env_logger::init_from_env(Env::default().default_filter_or(level));

    let config = Config::load_or_default(config_path);
    let map = config.build_map();
    let start = config.start();
    let goal = config.goal();

    info!(
        "Map {}x{} (cell size {}, diagonal={}), {} blocked cells",
        map.width,
        map.height,
        map.cell_size,
        map.diagonal,
        map.blocked_cells().count()
    );

    let engine = AStar::with_settings(&map, config.search_settings());
    let (path, stats) = match engine.find_path_with_stats(start, goal) {
        Ok(result) => result,
        Err(e) => {
            error!("Search failed: {}", e);
            process::exit(1);
        }
    };

    info!("Expanded {} nodes, discovered {}", stats.expanded, stats.discovered);

    println!("{}", path.len());
    for node in &path {
        println!("{},{}", node.x, node.y);
    }

    if let Some(export_path) = &config.logging.export_path {
        let export = PathExport::from_path(&map, &start, &goal, &path);
        match export.save_to_file(export_path) {
            Ok(()) => info!("Wrote path to {}", export_path),
            Err(e) => {
                error!("Failed to write {}: {}", export_path, e);
                process::exit(1);
            }
        }
    }
}
