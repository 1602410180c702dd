//! Errors raised when a board is built from caller-supplied data.

use thiserror::Error;

/// Reasons a board could not be constructed.
///
/// The move and spawn operations never fail; only the constructors validate
/// their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a board needs at least one row")]
    EmptyBoard,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) holds {value}, which is not a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
}
