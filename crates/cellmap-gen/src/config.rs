//! Validated generation parameters.

use crate::error::MapError;

/// Probability used for every cell when the initial map is fully randomized.
pub const RANDOMIZED_FILL_PROBABILITY: f64 = 0.5;

/// Parameters for a single map generation run.
///
/// Only constructible through [`MapConfig::new`], so every instance holds
/// non-zero dimensions whose cell count fits in one allocation and a fill
/// probability within `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    width: usize,
    height: usize,
    fill_probability: f64,
    iterations: u32,
    randomize_initial_map: bool,
}

impl MapConfig {
    /// Validate and build a configuration.
    ///
    /// `fill_probability` is checked even when `randomize_initial_map` is set,
    /// so a config never carries a meaningless value.
    pub fn new(
        width: usize,
        height: usize,
        fill_probability: f64,
        iterations: u32,
        randomize_initial_map: bool,
    ) -> Result<Self, MapError> {
        if width == 0 {
            return Err(MapError::ZeroWidth);
        }
        if height == 0 {
            return Err(MapError::ZeroHeight);
        }
        // A single `Vec` cannot hold more than `isize::MAX` bytes.
        if width
            .checked_mul(height)
            .is_none_or(|cells| cells > isize::MAX as usize)
        {
            return Err(MapError::TooManyCells { width, height });
        }
        if !(0.0..=1.0).contains(&fill_probability) {
            return Err(MapError::FillProbabilityOutOfRange(fill_probability));
        }

        Ok(Self {
            width,
            height,
            fill_probability,
            iterations,
            randomize_initial_map,
        })
    }

    /// Map width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Configured fill probability (ignored when the initial map is randomized).
    pub fn fill_probability(&self) -> f64 {
        self.fill_probability
    }

    /// Number of smoothing passes run at construction.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether the initial map ignores `fill_probability` and uses a coin flip.
    pub fn randomize_initial_map(&self) -> bool {
        self.randomize_initial_map
    }

    /// The per-cell probability actually used to seed the initial grid.
    pub fn effective_fill_probability(&self) -> f64 {
        if self.randomize_initial_map {
            RANDOMIZED_FILL_PROBABILITY
        } else {
            self.fill_probability
        }
    }
}
