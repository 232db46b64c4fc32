//! Error types for the King Catch core.
//!
//! Every variant is caller misuse or a rejected configuration. Running out of
//! legal moves is not an error: it is reported as [`crate::MoveChoice::NoMoveAvailable`].

use thiserror::Error;

use crate::types::{Coord, Move, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KingError {
    /// Board smaller than 2x2 or larger than 1024x1024
    #[error("Invalid board size {rows}x{cols} (each dimension must be between 2 and 1024)")]
    InvalidBoard { rows: i32, cols: i32 },

    /// Search depth must be positive
    #[error("Invalid search depth {0} (must be at least 1)")]
    InvalidDepth(u8),

    /// WIN/LOSS sentinel does not dominate the mobility differential
    #[error("Win score {0} must exceed the maximum mobility differential")]
    SentinelTooSmall(i32),

    #[error("Coordinate {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("Both kings placed on {0}")]
    KingsOverlap(Coord),

    #[error("Illegal move {0}")]
    IllegalMove(Move),

    #[error("It is {expected}'s turn, got a move for {got}")]
    WrongSide { expected: Side, got: Side },

    /// More undos than applied moves
    #[error("Undo called with no move to take back")]
    UndoUnderflow,

    #[error("Opponent king position is hidden in this snapshot")]
    OpponentHidden,

    #[error("Agent is already thinking")]
    AgentBusy,

    #[error("No move request is pending")]
    AgentIdle,

    #[error("Agent worker stopped without replying")]
    AgentDisconnected,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl From<std::io::Error> for KingError {
    fn from(e: std::io::Error) -> Self {
        KingError::Io(e.to_string())
    }
}

/// Result type alias for King Catch operations
pub type KingResult<T> = Result<T, KingError>;
