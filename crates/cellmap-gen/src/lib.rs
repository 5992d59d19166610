//! Cave-like 2D map generation with a probabilistic cellular automaton.
//!
//! A grid is seeded with random noise, then smoothed: filled cells with at
//! least four filled neighbors survive, and empty cells with at least five
//! may fill with a per-cell random chance. Positions outside the grid count
//! as filled, which walls off the edges.
//!
//! ```
//! use cellmap_gen::{MapConfig, MapGenerator};
//!
//! let config = MapConfig::new(50, 25, 0.45, 5, false).unwrap();
//! let generator = MapGenerator::from_seed(config, 42);
//! assert_eq!(generator.map().len(), 50 * 25);
//! print!("{}", generator.map());
//! ```

mod config;
mod error;
mod generator;
mod grid;
mod render;

pub use config::{MapConfig, RANDOMIZED_FILL_PROBABILITY};
pub use error::MapError;
pub use generator::{BIRTH_THRESHOLD, MapGenerator, SURVIVAL_THRESHOLD, smooth_into};
pub use grid::Grid;
pub use render::{Glyphs, render_map};
