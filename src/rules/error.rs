//! Rejection reasons for game setup and player actions.
//!
//! Every error here is recoverable: the game is left exactly as it was
//! before the rejected call.

use thiserror::Error;

use crate::core::position::Position;

/// Why a move's geometry was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum InvalidMoveReason {
    /// Start or end is off the board.
    #[error("position is off the board")]
    OutOfBounds,
    /// The stack at the start is not topped by the mover's piece.
    #[error("stack is not topped by the mover's piece")]
    NotOwnStack,
    /// Start and end differ on both axes.
    #[error("pieces must move horizontally or vertically")]
    Diagonal,
    /// Distance travelled is not the number of pieces moved.
    #[error("distance must equal the number of pieces moved")]
    DistanceMismatch,
}

/// A rejected stack move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("not this player's turn")]
    InvalidTurn,

    #[error("invalid number of pieces")]
    InvalidCount,

    #[error("invalid move: {0}")]
    InvalidMove(InvalidMoveReason),
}

/// A rejected reserve placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is already over")]
    GameOver,

    #[error("no such player")]
    UnknownPlayer,

    #[error("no pieces in reserve")]
    NoReserve,

    #[error("invalid position")]
    InvalidPosition,

    #[error("not this player's turn")]
    InvalidTurn,
}

/// Either kind of rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// A read of an off-board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position {0} is off the board")]
    OffBoard(Position),
}

/// Players that cannot share a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("both players are named {0:?}")]
    DuplicateName(String),

    #[error("both players use marker {0:?}")]
    DuplicateMarker(String),

    #[error("player {0:?} has an empty marker")]
    EmptyMarker(String),
}
