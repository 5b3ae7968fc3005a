//! Focus, also sold as Domination.
//!
//! Two players share a 6×6 board that starts with one piece on every cell:
//! - On your turn, move part of a stack you control (your piece on top)
//!   exactly as many cells as pieces moved, in a straight line
//! - Stacks taller than five lose pieces from the bottom: your own go to your
//!   reserve, your opponent's are captured
//! - Instead of moving, you may drop a reserve piece on any cell
//! - Six captures wins

mod game;

pub use game::{FocusGame, FocusGameBuilder};
