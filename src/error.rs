use thiserror::Error;

use crate::WIDTH;

/// Contract violations reported by the checked entry points of the engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid move, column {0} out of range. Columns must be between 0 and {max}", max = WIDTH - 1)]
    ColumnOutOfRange(usize),

    #[error("Invalid move, column {0} full")]
    ColumnFull(usize),

    #[error("Invalid position, game is over")]
    DecidedBoard,

    #[error("could not parse '{0}' as a valid move")]
    InvalidMoveChar(char),

    #[error("invalid move order {0:?}, every column must appear exactly once")]
    InvalidMoveOrder([usize; WIDTH]),
}
