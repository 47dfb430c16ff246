use thiserror::Error;

/// Errors raised while building a [MazeGrid](crate::maze_grid::MazeGrid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Mazes must be square with an odd side of at least [MIN_SIZE](crate::MIN_SIZE).
    #[error("invalid maze size {size}: must be odd and at least {min}", min = crate::MIN_SIZE)]
    InvalidSize { size: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell {found:?} at ({x}, {y})")]
    UnknownCell { x: usize, y: usize, found: char },
    #[error("unknown direction {found:?}")]
    UnknownDirection { found: String },
}
