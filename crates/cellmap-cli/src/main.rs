//! Command-line demo that prints a generated cave map to stdout.
//!
//! Run with `cargo run -p cellmap-cli` for the default 50x25 map.
//! Run with `cargo run -p cellmap-cli -- --seed 42 --width 80` for a reproducible, wider map.

use std::process::ExitCode;

use cellmap_config::{CliArgs, Config};
use cellmap_gen::{MapGenerator, render_map};
use clap::Parser;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut config = Config::default();
    config.apply_cli_overrides(&args);

    cellmap_log::init_logging(Some(&config));

    let map_config = match config.map_config() {
        Ok(map_config) => map_config,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    let generator = match config.map.seed {
        Some(seed) => {
            info!(seed, "Generating seeded map");
            MapGenerator::from_seed(map_config, seed)
        }
        None => MapGenerator::from_entropy(map_config),
    };

    print!("{}", render_map(generator.map(), config.glyphs()));
    ExitCode::SUCCESS
}
