//! # focus-engine
//!
//! Rules engine for Focus (also sold as Domination), a two-player stacking
//! game on a 6×6 board.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, networking, persistence, or AI. Callers
//!    supply player names and move requests and read back outcomes and board
//!    state.
//!
//! 2. **No Partial Moves**: Every action is validated in full before anything
//!    changes. A rejected action leaves the game exactly as it was.
//!
//! 3. **Single Owner**: Mutation needs `&mut FocusGame`. The board is only
//!    ever handed out read-only.
//!
//! ## Example
//!
//! ```
//! use focus_engine::{FocusGame, MoveOutcome, PlaceError};
//!
//! let mut game = FocusGame::new(("PlayerA", "R"), ("PlayerB", "G")).unwrap();
//!
//! assert_eq!(game.move_piece("PlayerA", (0, 0), (0, 1), 1), Ok(MoveOutcome::Moved));
//! assert_eq!(game.markers_at((0, 1)).unwrap(), vec!["R", "R"]);
//! assert!(game.stack_at((0, 0)).unwrap().is_empty());
//! assert_eq!(game.place_reserve("PlayerA", (0, 0)), Err(PlaceError::NoReserve));
//! ```
//!
//! ## Modules
//!
//! - `core`: Positions, players, board and stacks, actions, configuration
//! - `rules`: RulesEngine trait, outcomes, and errors
//! - `games`: The Focus game itself

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, Cell, GameConfig, OpeningLayout, Player, PlayerId, PlayerMap,
    Position, Stack, BOARD_SIZE, CELL_COUNT,
};

pub use crate::rules::{
    ActionError, ActionOutcome, GameStatus, InvalidMoveReason, MoveError, MoveOutcome,
    PlaceError, PlaceOutcome, PositionError, RulesEngine, SetupError,
};

pub use crate::games::{FocusGame, FocusGameBuilder};
