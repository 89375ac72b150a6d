//! Mirrored-grid identicon pattern.
//!
//! A 7x7 grid where only the left four columns are drawn from the sequence;
//! the right three mirror them around the centre column.

use crate::types::Colour;

use super::{PatternSynthesizer, SeededSequence};

/// Cells per grid edge.
pub const GRID_SIZE: usize = 7;

/// Stored columns: `ceil(GRID_SIZE / 2)`.
pub const GRID_HALF: usize = GRID_SIZE.div_ceil(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixelize {
    primary: Colour,
    foreign: Colour,
    grid: [[bool; GRID_HALF]; GRID_SIZE],
}

impl Pixelize {
    /// Build the grid by drawing cells row by row from `sequence`.
    pub fn new(primary: Colour, foreign: Colour, mut sequence: SeededSequence) -> Self {
        let mut grid = [[false; GRID_HALF]; GRID_SIZE];
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = sequence.next().unwrap_or_default() > 0.5;
            }
        }

        Self {
            primary,
            foreign,
            grid,
        }
    }

    /// Whether the mirrored grid cell at `(grid_x, grid_y)` is filled.
    ///
    /// Coordinates past the edge are clamped to the last cell.
    pub fn cell(&self, grid_x: usize, grid_y: usize) -> bool {
        let grid_x = grid_x.min(GRID_SIZE - 1);
        let grid_y = grid_y.min(GRID_SIZE - 1);
        let column = if grid_x >= GRID_HALF {
            GRID_SIZE - 1 - grid_x
        } else {
            grid_x
        };
        self.grid[grid_y][column]
    }
}

impl PatternSynthesizer for Pixelize {
    fn colour_at(&self, x: u32, y: u32, size: u32) -> Colour {
        let cell_size = f64::from(size) / GRID_SIZE as f64;
        let grid_x = (f64::from(x) / cell_size).floor() as usize;
        let grid_y = (f64::from(y) / cell_size).floor() as usize;

        if self.cell(grid_x, grid_y) {
            self.primary
        } else {
            self.foreign
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixelize(seed: &str) -> Pixelize {
        Pixelize::new(Colour::BLACK, Colour::WHITE, SeededSequence::from_seed(seed))
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(GRID_HALF, 4);
    }

    #[test]
    fn test_grid_mirrors_horizontally() {
        let p = pixelize("mirror");
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                assert_eq!(p.cell(x, y), p.cell(GRID_SIZE - 1 - x, y), "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_grid_follows_sequence() {
        let p = pixelize("abc");
        let draws: Vec<bool> = SeededSequence::from_seed("abc")
            .take(GRID_SIZE * GRID_HALF)
            .map(|v| v > 0.5)
            .collect();

        for y in 0..GRID_SIZE {
            for x in 0..GRID_HALF {
                assert_eq!(p.cell(x, y), draws[y * GRID_HALF + x]);
            }
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        assert_eq!(pixelize("abc"), pixelize("abc"));
    }

    #[test]
    fn test_pixel_symmetry_at_multiple_of_seven() {
        let p = pixelize("sym");
        let size = 70;
        for y in 0..size {
            for x in 0..size {
                assert_eq!(p.colour_at(x, y, size), p.colour_at(size - 1 - x, y, size));
            }
        }
    }

    #[test]
    fn test_pixels_map_to_cells() {
        let p = pixelize("cells");
        // 14px: each cell is exactly 2x2.
        for gy in 0..GRID_SIZE {
            for gx in 0..GRID_SIZE {
                let expected = if p.cell(gx, gy) { Colour::BLACK } else { Colour::WHITE };
                let (x, y) = (gx as u32 * 2 + 1, gy as u32 * 2);
                assert_eq!(p.colour_at(x, y, 14), expected);
            }
        }
    }

    #[test]
    fn test_only_two_colours() {
        let p = pixelize("two");
        for y in 0..16 {
            for x in 0..16 {
                let c = p.colour_at(x, y, 16);
                assert!(c == Colour::BLACK || c == Colour::WHITE);
            }
        }
    }
}
