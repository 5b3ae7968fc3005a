//! Rules engine trait, outcomes, and errors.
//!
//! The engine trait defines how callers drive a game:
//! - apply a player's action
//! - ask whether the game is over
//!
//! Errors are typed per action kind so callers can tell a wrong-turn
//! attempt from a malformed move.

pub mod engine;
pub mod error;

pub use engine::{ActionOutcome, GameStatus, MoveOutcome, PlaceOutcome, RulesEngine};
pub use error::{
    ActionError, InvalidMoveReason, MoveError, PlaceError, PositionError, SetupError,
};
