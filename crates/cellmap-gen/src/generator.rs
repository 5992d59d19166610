//! Cellular-automata map generation.
//!
//! A map starts as random noise and is smoothed a fixed number of times.
//! Each pass reads one grid and writes the other, then the two swap, so no
//! cell ever sees a neighbor's already-updated value.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::MapConfig;
use crate::grid::Grid;

/// Neighbor count at which a filled cell stays filled.
pub const SURVIVAL_THRESHOLD: u8 = 4;

/// Neighbor count at which an empty cell may become filled.
pub const BIRTH_THRESHOLD: u8 = 5;

/// Range of the per-cell random factor that gates births.
const RANDOM_FACTOR_MIN: f64 = 0.2;
const RANDOM_FACTOR_MAX: f64 = 0.8;

/// Run one smoothing pass from `src` into `dst`.
///
/// Cells are visited column by column (x outer, y inner). A random factor in
/// `[0.2, 0.8)` is drawn for every cell, even filled ones where it goes
/// unused, so a seeded RNG is consumed in the same order regardless of the
/// grid's contents. An empty cell with at least five alive neighbors then
/// fills if a second draw in `[0, 1)` falls below that factor.
///
/// # Panics
/// Panics if `src` and `dst` differ in dimensions.
pub fn smooth_into<R: Rng>(src: &Grid, dst: &mut Grid, rng: &mut R) {
    assert_eq!(
        (src.width(), src.height()),
        (dst.width(), dst.height()),
        "smoothing buffers must have identical dimensions"
    );

    for x in 0..src.width() {
        for y in 0..src.height() {
            let neighbors = src.alive_neighbors(x, y);
            let random_factor = rng.random_range(RANDOM_FACTOR_MIN..RANDOM_FACTOR_MAX);

            let next = if src.is_filled(x, y) {
                neighbors >= SURVIVAL_THRESHOLD
            } else {
                neighbors >= BIRTH_THRESHOLD && rng.random::<f64>() < random_factor
            };
            dst.set(x, y, next);
        }
    }
}

/// Generates a map from a [`MapConfig`] using an owned random source.
///
/// All work happens in the constructor; afterwards the finished grid is
/// available through [`MapGenerator::map`].
pub struct MapGenerator<R = ChaCha8Rng> {
    config: MapConfig,
    current: Grid,
    scratch: Grid,
    rng: R,
}

impl<R> fmt::Debug for MapGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapGenerator")
            .field("config", &self.config)
            .field("map", &self.current)
            .finish_non_exhaustive()
    }
}

impl MapGenerator<ChaCha8Rng> {
    /// Generate a map with a ChaCha8 RNG seeded from `seed`.
    ///
    /// The same seed and config always produce the same grid.
    pub fn from_seed(config: MapConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generate a map with a ChaCha8 RNG seeded from the operating system.
    pub fn from_entropy(config: MapConfig) -> Self {
        Self::new(config, ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> MapGenerator<R> {
    /// Build the initial grid and run every configured smoothing pass.
    pub fn new(config: MapConfig, rng: R) -> Self {
        let width = config.width();
        let height = config.height();
        let probability = config.effective_fill_probability();

        debug!(
            width,
            height,
            probability,
            iterations = config.iterations(),
            randomized = config.randomize_initial_map(),
            "Generating cellular automata map"
        );

        let mut generator = Self {
            current: Grid::new(width, height),
            scratch: Grid::new(width, height),
            config,
            rng,
        };
        generator.initialize(probability);

        for _ in 0..generator.config.iterations() {
            generator.step();
        }

        debug!(
            filled = generator.current.filled_count(),
            ratio = generator.current.fill_ratio(),
            "Map generation complete"
        );
        generator
    }

    /// Run one more smoothing pass on the current grid.
    pub fn step(&mut self) {
        smooth_into(&self.current, &mut self.scratch, &mut self.rng);
        std::mem::swap(&mut self.current, &mut self.scratch);
        trace!(filled = self.current.filled_count(), "Smoothing pass done");
    }

    /// The generated map.
    pub fn map(&self) -> &Grid {
        &self.current
    }

    /// Consume the generator and return the generated map.
    pub fn into_map(self) -> Grid {
        self.current
    }

    /// The configuration this map was generated from.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    fn initialize(&mut self, probability: f64) {
        for x in 0..self.current.width() {
            for y in 0..self.current.height() {
                let filled = self.rng.random::<f64>() < probability;
                self.current.set(x, y, filled);
            }
        }
    }
}
