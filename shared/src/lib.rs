/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*/

pub mod boundary;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod simulation;

pub use boundary::Boundary;
pub use error::ConfigError;
pub use grid::{CellState, Grid};
pub use pattern::Pattern;
pub use simulation::Simulation;
