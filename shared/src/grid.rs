use crate::error::ConfigError;
use crate::grid::CellState::{Alive, Dead};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// Fixed-size matrix of cells, indexed by `(row, col)`.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Grid {
    pub(crate) cells: Vec<Vec<CellState>>,
    width: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![vec![Dead; width]; height],
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// # Panics
    ///
    /// If `row` or `col` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    /// # Panics
    ///
    /// If `row` or `col` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// Rows in top-to-bottom order, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_alive()).count())
            .sum()
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Dead);
        }
    }

    /// Fills every cell independently, alive with probability `fill_rate`.
    /// The same `seed` always yields the same grid.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(ConfigError::FillRate(fill_rate));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = if rng.random_bool(fill_rate) { Alive } else { Dead };
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(7, 4);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.population(), 0);
        assert!(grid.rows().all(|row| row.len() == 7));
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 1, Alive);
        assert_eq!(grid.get(2, 1), Alive);
        assert_eq!(grid.get(1, 2), Dead);
        assert_eq!(grid.population(), 1);

        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn rows_are_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 0, Alive);
        let rows: Vec<&[CellState]> = grid.rows().collect();
        assert_eq!(rows, vec![&[Dead, Dead, Dead][..], &[Alive, Dead, Dead][..]]);
    }

    #[test]
    fn randomize_is_deterministic_with_seed() {
        let mut a = Grid::new(16, 16);
        let mut b = Grid::new(16, 16);
        a.randomize(Some(42), 0.5).unwrap();
        b.randomize(Some(42), 0.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn randomize_extremes() {
        let mut grid = Grid::new(8, 5);
        grid.randomize(None, 1.0).unwrap();
        assert_eq!(grid.population(), 40);
        grid.randomize(None, 0.0).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_rejects_bad_fill_rate() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, Alive);
        assert_eq!(grid.randomize(Some(1), 1.5), Err(ConfigError::FillRate(1.5)));
        assert_eq!(grid.get(0, 0), Alive);
    }
}
