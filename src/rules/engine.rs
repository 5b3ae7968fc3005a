//! Rules engine trait and action outcomes.
//!
//! `RulesEngine` is the seam generic drivers (replays, adapters) talk to:
//! - apply a named player's action
//! - check whether the game is over
//!
//! The concrete Focus rules live in [`crate::games::FocusGame`].

use serde::{Deserialize, Serialize};

use super::error::ActionError;
use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;

/// Where the game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(PlayerId),
}

impl GameStatus {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

/// Result of an accepted stack move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was made and the turn passed.
    Moved,
    /// The move won the game for this player.
    Won(PlayerId),
}

/// Result of an accepted reserve placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceOutcome {
    Placed,
}

/// Result of an accepted action of either kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved(MoveOutcome),
    Placed(PlaceOutcome),
}

impl ActionOutcome {
    /// The winner, if this action ended the game.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            ActionOutcome::Moved(MoveOutcome::Won(player)) => Some(player),
            _ => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` must either fully apply the action or leave the game
///   untouched
/// - `is_terminal` returns `None` while the game continues
pub trait RulesEngine {
    /// The rule parameters in effect.
    fn config(&self) -> &GameConfig;

    /// Apply `action` on behalf of the player called `player_name`.
    fn apply_action(&mut self, player_name: &str, action: &Action)
        -> Result<ActionOutcome, ActionError>;

    /// The winner, once there is one.
    fn is_terminal(&self) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Apply a sequence of actions, stopping at the first rejection.
    ///
    /// Returns how many actions were applied along with the first error.
    fn apply_all<'a, I>(&mut self, actions: I) -> Result<usize, (usize, ActionError)>
    where
        I: IntoIterator<Item = (&'a str, Action)>,
    {
        let mut applied = 0;
        for (name, action) in actions {
            self.apply_action(name, &action).map_err(|e| (applied, e))?;
            applied += 1;
        }
        Ok(applied)
    }
}
