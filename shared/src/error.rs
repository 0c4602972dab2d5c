use thiserror::Error;

/// Rejected setup of a grid or simulation. Nothing is mutated when one of these is returned.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("pattern cell ({row}, {col}) lies outside the {width}x{height} grid")]
    PatternOutOfBounds {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },
    #[error("fill rate {0} must be between 0.0 and 1.0")]
    FillRate(f64),
    #[error("unknown boundary policy `{0}`, expected `toroidal` or `finite`")]
    UnknownBoundary(String),
}
