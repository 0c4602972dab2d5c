use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::grid::Grid;

/// How neighbor lookups behave at the edges of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Opposite edges are adjacent, the grid is a torus.
    #[default]
    Toroidal,
    /// Cells beyond the edge are permanently dead.
    Finite,
}

impl Boundary {
    /// Count the number of alive neighbors for a cell, in `0..=8`.
    pub fn alive_neighbors(self, grid: &Grid, row: usize, col: usize) -> usize {
        let mut count = 0;

        for dr in [-1, 0, 1].iter() {
            for dc in [-1, 0, 1].iter() {
                if *dr == 0 && *dc == 0 {
                    // Skip the current cell
                    continue;
                }

                if let Some((neighbor_row, neighbor_col)) = self.resolve(grid, row, col, *dr, *dc) {
                    if grid.cells[neighbor_row][neighbor_col].is_alive() {
                        count += 1;
                    }
                }
            }
        }

        count
    }

    /// Maps a neighbor offset to grid coordinates, `None` when it falls off a finite grid.
    fn resolve(self, grid: &Grid, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let height = grid.height() as isize;
        let width = grid.width() as isize;
        let neighbor_row = row as isize + dr;
        let neighbor_col = col as isize + dc;

        match self {
            Boundary::Toroidal => Some((
                neighbor_row.rem_euclid(height) as usize,
                neighbor_col.rem_euclid(width) as usize,
            )),
            Boundary::Finite => {
                if (0..height).contains(&neighbor_row) && (0..width).contains(&neighbor_col) {
                    Some((neighbor_row as usize, neighbor_col as usize))
                } else {
                    None
                }
            }
        }
    }
}

impl FromStr for Boundary {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toroidal" | "torus" | "wrap" => Ok(Boundary::Toroidal),
            "finite" | "bounded" => Ok(Boundary::Finite),
            _ => Err(ConfigError::UnknownBoundary(s.to_string())),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Toroidal => f.write_str("toroidal"),
            Boundary::Finite => f.write_str("finite"),
        }
    }
}
