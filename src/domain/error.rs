use thiserror::Error;

/// Errors raised by the simulation core.
/// A rejected call never mutates the grid.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SimulationError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("neighbor count {0} is outside 0..=8")]
    InvalidNeighborCount(u8),
    #[error("invalid rule notation: {0}")]
    InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
