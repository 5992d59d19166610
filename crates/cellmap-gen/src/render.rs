//! Plain-text rendering of a finished map.

use std::fmt;

use crate::grid::Grid;

/// Characters used when rendering a map as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// Glyph for a filled cell.
    pub filled: char,
    /// Glyph for an empty cell.
    pub empty: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            filled: '#',
            empty: '.',
        }
    }
}

/// Render `grid` as one line per row, top row first.
///
/// No separators between columns; every row, including the last, ends in `\n`.
pub fn render_map(grid: &Grid, glyphs: Glyphs) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(
            row.iter()
                .map(|&filled| if filled { glyphs.filled } else { glyphs.empty }),
        );
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_map(self, Glyphs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let mut grid = Grid::new(4, 2);
        grid.set(0, 0, true);
        grid.set(3, 1, true);
        assert_eq!(render_map(&grid, Glyphs::default()), "#...\n...#\n");
    }

    #[test]
    fn test_render_custom_glyphs() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, true);
        let glyphs = Glyphs {
            filled: '█',
            empty: ' ',
        };
        assert_eq!(render_map(&grid, glyphs), " █\n  \n");
    }

    #[test]
    fn test_render_line_and_column_counts() {
        let grid = Grid::filled(50, 25);
        let text = render_map(&grid, Glyphs::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines.iter().all(|l| l.len() == 50 && l.chars().all(|c| c == '#')));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_display_uses_default_glyphs() {
        let mut grid = Grid::new(3, 1);
        grid.set(1, 0, true);
        assert_eq!(grid.to_string(), ".#.\n");
    }
}
