//! Actions a player can take and the record kept of them.
//!
//! Focus has two kinds of turn:
//! - move part of a stack in a straight line
//! - bring a reserve piece back onto the board
//!
//! ```
//! use focus_engine::core::{Action, Position};
//!
//! let step = Action::movement((0, 0), (0, 1), 1);
//! let drop = Action::place_reserve((3, 3));
//!
//! assert_eq!(step.target(), Position::new(0, 1));
//! assert!(drop.is_reserve_placement());
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top `count` pieces of the stack at `from` exactly `count`
    /// cells in a straight line to `to`.
    Move {
        from: Position,
        to: Position,
        count: usize,
    },
    /// Place one reserve piece at `to`.
    PlaceReserve { to: Position },
}

impl Action {
    #[must_use]
    pub fn movement(from: impl Into<Position>, to: impl Into<Position>, count: usize) -> Self {
        Action::Move {
            from: from.into(),
            to: to.into(),
            count,
        }
    }

    #[must_use]
    pub fn place_reserve(to: impl Into<Position>) -> Self {
        Action::PlaceReserve { to: to.into() }
    }

    /// The cell the action lands on.
    #[must_use]
    pub fn target(&self) -> Position {
        match self {
            Action::Move { to, .. } | Action::PlaceReserve { to } => *to,
        }
    }

    #[must_use]
    pub fn is_reserve_placement(&self) -> bool {
        matches!(self, Action::PlaceReserve { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, to, count } => write!(f, "move {} {} -> {}", count, from, to),
            Action::PlaceReserve { to } => write!(f, "reserve -> {}", to),
        }
    }
}

/// A successful action, as kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number the action was taken on.
    pub turn: u32,
}
