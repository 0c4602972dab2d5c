use crate::error::ConfigError;
use crate::grid::Grid;

/// Live cells given as `(row, col)` offsets from an anchor cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<(isize, isize)>,
}

impl Pattern {
    pub fn new(cells: impl Into<Vec<(isize, isize)>>) -> Self {
        Pattern { cells: cells.into() }
    }

    /// ```text
    /// . X .
    /// . . X
    /// X X X
    /// ```
    /// Travels one cell down and one cell right every four generations.
    pub fn glider() -> Self {
        Pattern::new([(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)])
    }

    pub fn cells(&self) -> &[(isize, isize)] {
        &self.cells
    }

    /// Absolute coordinates of every cell around `anchor`, or the first one that misses the grid.
    pub(crate) fn place(&self, grid: &Grid, anchor: (usize, usize)) -> Result<Vec<(usize, usize)>, ConfigError> {
        let (height, width) = (grid.height(), grid.width());

        self.cells
            .iter()
            .map(|&(dr, dc)| {
                let row = anchor.0 as isize + dr;
                let col = anchor.1 as isize + dc;
                if (0..height as isize).contains(&row) && (0..width as isize).contains(&col) {
                    Ok((row as usize, col as usize))
                } else {
                    Err(ConfigError::PatternOutOfBounds { row, col, width, height })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_around_center() {
        let grid = Grid::new(25, 25);
        let cells = Pattern::glider().place(&grid, (12, 12)).unwrap();
        assert_eq!(cells, vec![(11, 12), (12, 13), (13, 11), (13, 12), (13, 13)]);
    }

    #[test]
    fn glider_fits_smallest_grid() {
        let grid = Grid::new(3, 3);
        assert!(Pattern::glider().place(&grid, (1, 1)).is_ok());
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            Pattern::glider().place(&grid, (0, 1)),
            Err(ConfigError::PatternOutOfBounds {
                row: -1,
                col: 1,
                width: 3,
                height: 3
            })
        );
        assert_eq!(
            Pattern::new([(0, 3)]).place(&grid, (0, 0)),
            Err(ConfigError::PatternOutOfBounds {
                row: 0,
                col: 3,
                width: 3,
                height: 3
            })
        );
    }
}
