//! Configuration structs with defaults matching the demo map.

use cellmap_gen::{Glyphs, MapConfig};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Map generation settings.
    pub map: MapSettings,
    /// Text rendering settings.
    pub render: RenderSettings,
    /// Debug/development settings.
    pub debug: DebugSettings,
}

/// Map generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Map width in cells.
    pub width: usize,
    /// Map height in cells.
    pub height: usize,
    /// Initial probability of a cell being filled.
    pub fill_probability: f64,
    /// Number of smoothing passes.
    pub iterations: u32,
    /// Use a 50% fill chance instead of `fill_probability`.
    pub randomize_initial_map: bool,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

/// Text rendering settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Glyph printed for filled cells.
    pub filled_glyph: char,
    /// Glyph printed for empty cells.
    pub empty_glyph: char,
}

/// Debug/development settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugSettings {
    /// Log level filter (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: 50,
            height: 25,
            fill_probability: 0.45,
            iterations: 5,
            randomize_initial_map: true,
            seed: None,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        Self {
            filled_glyph: glyphs.filled,
            empty_glyph: glyphs.empty,
        }
    }
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Conversions ---

impl Config {
    /// Validate the map settings and build a generator configuration.
    pub fn map_config(&self) -> Result<MapConfig, ConfigError> {
        let map = &self.map;
        let config = MapConfig::new(
            map.width,
            map.height,
            map.fill_probability,
            map.iterations,
            map.randomize_initial_map,
        )?;
        log::debug!(
            "Map config {}x{}, {} iterations",
            config.width(),
            config.height(),
            config.iterations()
        );
        Ok(config)
    }

    /// Glyphs for the text renderer.
    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            filled: self.render.filled_glyph,
            empty: self.render.empty_glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellmap_gen::MapError;

    #[test]
    fn test_defaults_match_demo() {
        let config = Config::default();
        assert_eq!(config.map.width, 50);
        assert_eq!(config.map.height, 25);
        assert_eq!(config.map.fill_probability, 0.45);
        assert_eq!(config.map.iterations, 5);
        assert!(config.map.randomize_initial_map);
        assert_eq!(config.map.seed, None);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_default_map_config_is_valid() {
        let map_config = Config::default().map_config().unwrap();
        assert_eq!(map_config.width(), 50);
        assert_eq!(map_config.effective_fill_probability(), 0.5);
    }

    #[test]
    fn test_invalid_map_settings_rejected() {
        let mut config = Config::default();
        config.map.width = 0;
        let err = config.map_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMap(MapError::ZeroWidth)));
        assert_eq!(
            err.to_string(),
            "invalid map settings: map width must be greater than zero"
        );
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        let mut config = Config::default();
        config.map.fill_probability = 1.5;
        assert!(matches!(
            config.map_config(),
            Err(ConfigError::InvalidMap(MapError::FillProbabilityOutOfRange(_)))
        ));
    }

    #[test]
    fn test_oversized_map_rejected() {
        let mut config = Config::default();
        config.map.width = usize::MAX / 2 + 1;
        config.map.height = 2;
        assert!(matches!(
            config.map_config(),
            Err(ConfigError::InvalidMap(MapError::TooManyCells { .. }))
        ));
    }

    #[test]
    fn test_glyphs_follow_render_settings() {
        let mut config = Config::default();
        assert_eq!(config.glyphs(), Glyphs::default());
        config.render.filled_glyph = '@';
        config.render.empty_glyph = ' ';
        assert_eq!(
            config.glyphs(),
            Glyphs {
                filled: '@',
                empty: ' '
            }
        );
    }
}
