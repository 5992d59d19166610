//! Configuration error types.

use cellmap_gen::MapError;

/// Errors that can occur when turning settings into a generator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The map settings were rejected by the generator.
    #[error("invalid map settings: {0}")]
    InvalidMap(#[from] MapError),
}
