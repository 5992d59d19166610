//! Runtime configuration for the cellmap generator.
//!
//! Settings start from defaults that reproduce the classic 50x25 demo map and
//! can be overridden from the command line via clap. Nothing is read from or
//! written to disk.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugSettings, MapSettings, RenderSettings};
pub use error::ConfigError;
