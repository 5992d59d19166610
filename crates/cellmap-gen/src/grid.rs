//! Fixed-size 2D boolean cell grid.

use std::fmt;

/// Moore neighborhood offsets, excluding the center cell.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `width × height` grid of filled (`true`) and empty (`false`) cells.
///
/// Stored row-major. Dimensions are fixed for the lifetime of the grid.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create an all-filled grid.
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![true; width * height],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index(x, y)]
    }

    /// Set the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.cells[idx] = filled;
    }

    /// Count filled Moore neighbors of `(x, y)`.
    ///
    /// Positions outside the grid always count as filled, which pulls
    /// border cells toward becoming walls. Returns a value in `0..=8`.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in MOORE_OFFSETS {
            let alive = match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                (Some(nx), Some(ny)) if nx < self.width && ny < self.height => {
                    self.cells[self.index(nx, ny)]
                }
                _ => true,
            };
            if alive {
                count += 1;
            }
        }
        count
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fraction of cells that are filled, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.filled_count() as f64 / self.cells.len() as f64
    }

    /// Iterate over rows from `y = 0` to `y = height - 1`.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `max(1)` keeps `chunks_exact` from panicking on a zero-width grid.
        self.cells.chunks_exact(self.width.max(1))
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({}x{})\n{self}", self.width, self.height)
    }
}
