use crate::boundary::Boundary;
use crate::error::ConfigError;
use crate::grid::CellState::{Alive, Dead};
use crate::grid::Grid;
use crate::pattern::Pattern;

/// Game of Life engine with two alternating buffers.
///
/// `current` always holds a settled generation. `next` is scratch space that is
/// fully overwritten by [`Simulation::advance`] before the buffers are swapped.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    boundary: Boundary,
    generation: u64,
}

impl Simulation {
    pub fn new(width: usize, height: usize, boundary: Boundary) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        Ok(Self::from_grid(Grid::new(width, height), boundary))
    }

    /// Starts from an existing generation.
    pub fn from_grid(grid: Grid, boundary: Boundary) -> Self {
        let next = Grid::new(grid.width(), grid.height());
        Simulation {
            current: grid,
            next,
            boundary,
            generation: 0,
        }
    }

    /// Places `pattern` around the center cell `(height / 2, width / 2)`.
    pub fn seed(&mut self, pattern: &Pattern) -> Result<(), ConfigError> {
        let center = (self.current.height() / 2, self.current.width() / 2);
        self.seed_at(pattern, center)
    }

    /// Marks every cell of `pattern` alive around `anchor`. The grid is left
    /// untouched if any cell would land outside it.
    pub fn seed_at(&mut self, pattern: &Pattern, anchor: (usize, usize)) -> Result<(), ConfigError> {
        let cells = pattern.place(&self.current, anchor)?;
        for &(row, col) in &cells {
            self.current.set(row, col, Alive);
        }
        log::debug!("seeded {} cells around {:?}", cells.len(), anchor);
        Ok(())
    }

    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), ConfigError> {
        self.current.randomize(seed, fill_rate)?;
        log::debug!(
            "randomized grid with fill rate {fill_rate}, population {}",
            self.current.population()
        );
        Ok(())
    }

    pub fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        self.boundary.alive_neighbors(&self.current, row, col)
    }

    /// Advance the grid by one step (Game of Life logic).
    ///
    /// Every cell is computed from the current generation only, then the buffers
    /// are swapped. Returns `false` when the new generation equals the old one.
    pub fn advance(&mut self) -> bool {
        let current = &self.current;
        let boundary = self.boundary;

        for (row, next_row) in self.next.cells.iter_mut().enumerate() {
            for (col, next_cell) in next_row.iter_mut().enumerate() {
                let alive_neighbors = boundary.alive_neighbors(current, row, col);

                // Apply Game of Life rules
                *next_cell = match (current.cells[row][col], alive_neighbors) {
                    (Alive, 2..=3) => Alive, // Survives
                    (Dead, 3) => Alive,      // Becomes alive
                    _ => Dead,               // Dies or remains dead
                };
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.current.population()
        );

        let changed = self.current != self.next;
        if !changed {
            log::debug!("grid settled at generation {}", self.generation);
        }
        changed
    }

    /// Read-only view of the current generation.
    pub fn snapshot(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }
}
