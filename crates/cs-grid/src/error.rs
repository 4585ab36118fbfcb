//! Grid construction error type.

use thiserror::Error;

/// Errors produced by `cs-grid`.  Only construction can fail; searches
/// report "nothing found" through `Option`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("board has no columns or no rows")]
    EmptyBoard,

    #[error("ragged board: column {column} has {got} cells, expected {expected}")]
    Ragged {
        column:   usize,
        expected: usize,
        got:      usize,
    },
}

pub type GridResult<T> = Result<T, GridError>;
