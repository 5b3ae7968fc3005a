//! Board coordinates.
//!
//! Positions are `(col, row)` pairs. They are signed so that callers can hand
//! in whatever coordinates they received; anything outside `[0, BOARD_SIZE)`
//! on either axis is off-board and rejected by the game before it touches the
//! board.

use serde::{Deserialize, Serialize};

/// Number of cells along each side of the board.
pub const BOARD_SIZE: usize = 6;

/// Total number of cells (and pieces at the start of a game).
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A `(col, row)` coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    /// Create a position. No bounds checking is done here.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Check whether both coordinates are within the board.
    #[must_use]
    pub fn is_on_board(self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.col) && (0..size).contains(&self.row)
    }

    /// Flat cell index, or `None` when off-board.
    ///
    /// Cells are stored line by line: all rows of column 0, then column 1, etc.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.col as usize * BOARD_SIZE + self.row as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self::new((index / BOARD_SIZE) as i32, (index % BOARD_SIZE) as i32)
    }

    /// Iterate over every on-board position in storage order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::from_index)
    }

    /// Straight-line distance to `other`, or `None` if the two positions
    /// differ on both axes (a diagonal or off-line step).
    ///
    /// Staying in place is a straight line of length 0.
    #[must_use]
    pub fn orthogonal_distance(self, other: Position) -> Option<u32> {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        match (dc, dr) {
            (0, d) | (d, 0) => Some(d),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
