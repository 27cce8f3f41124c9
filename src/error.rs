use thiserror::Error;

use crate::board::Square;

/// The one boundary-crossing failure mode the core reports: malformed
/// caller input. Internal invariant violations (corrupt board state,
/// missing king) remain panics, since they are programmer errors, not
/// recoverable faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("square out of bounds: row {row}, col {col}")]
    SquareOutOfBounds { row: i32, col: i32 },

    #[error("no piece at {0}")]
    EmptySource(Square),

    #[error("{0} holds the opponent's piece, not the side to move's")]
    WrongSidePiece(Square),

    #[error("{from} to {to} is not a legal move")]
    IllegalMove { from: Square, to: Square },
}

pub type EngineResult<T> = Result<T, EngineError>;
