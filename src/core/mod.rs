//! Core types: positions, players, board, actions, configuration.
//!
//! These are rule-free building blocks. The game in [`crate::games`] is the
//! only thing that mutates them.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod position;

pub use action::{Action, ActionRecord};
pub use board::{Board, BoardDisplay, Cell, Stack};
pub use config::{GameConfig, OpeningLayout};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use position::{Position, BOARD_SIZE, CELL_COUNT};
