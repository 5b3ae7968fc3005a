//! The 6×6 board of piece stacks.
//!
//! Each cell is either [`Cell::Empty`] or a [`Stack`] of pieces, bottom first.
//! Pieces are stored by owner (`PlayerId`), never by marker text, so a marker
//! can never be confused with an empty cell.
//!
//! The board itself has no rules: it does not validate moves, count
//! captures, or know whose turn it is. Mutation is crate-private; outside
//! code gets read-only access.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::OpeningLayout;
use super::player::{PlayerId, PlayerMap};
use super::position::{Position, BOARD_SIZE, CELL_COUNT};

/// An ordered pile of pieces. Index 0 is the bottom.
///
/// Inline capacity covers the tallest transient stack (two full stacks
/// merged before overflow is resolved).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    pieces: SmallVec<[PlayerId; 10]>,
}

impl Stack {
    /// A single-piece stack.
    #[must_use]
    pub fn single(owner: PlayerId) -> Self {
        let mut pieces = SmallVec::new();
        pieces.push(owner);
        Self { pieces }
    }

    /// Build a stack from pieces listed bottom first.
    #[must_use]
    pub fn from_pieces(pieces: &[PlayerId]) -> Self {
        Self {
            pieces: SmallVec::from_slice(pieces),
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The piece on top, which controls the stack.
    #[must_use]
    pub fn top(&self) -> Option<PlayerId> {
        self.pieces.last().copied()
    }

    /// Pieces bottom first.
    #[must_use]
    pub fn pieces(&self) -> &[PlayerId] {
        &self.pieces
    }

    /// Detach the top `count` pieces, keeping their order.
    pub(crate) fn split_off_top(&mut self, count: usize) -> Stack {
        let at = self.pieces.len().saturating_sub(count);
        Self {
            pieces: self.pieces.drain(at..).collect(),
        }
    }

    /// Put `other` on top of this stack, keeping its order.
    pub(crate) fn extend(&mut self, other: Stack) {
        self.pieces.extend(other.pieces);
    }

    /// Remove pieces from the bottom until at most `max` remain.
    ///
    /// Returns the removed pieces, bottom first.
    pub(crate) fn trim_bottom(&mut self, max: usize) -> SmallVec<[PlayerId; 10]> {
        let excess = self.pieces.len().saturating_sub(max);
        self.pieces.drain(..excess).collect()
    }
}

/// One board position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No pieces.
    #[default]
    Empty,
    /// A non-empty stack.
    Stack(Stack),
}

impl Cell {
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Stack(stack) => stack.height(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub fn top(&self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Stack(stack) => stack.top(),
        }
    }

    /// Pieces bottom first; empty for an empty cell.
    #[must_use]
    pub fn pieces(&self) -> &[PlayerId] {
        match self {
            Cell::Empty => &[],
            Cell::Stack(stack) => stack.pieces(),
        }
    }

    /// Remove the top `count` pieces. The cell becomes `Empty` if nothing is
    /// left.
    pub(crate) fn take_top(&mut self, count: usize) -> Stack {
        let Cell::Stack(stack) = self else {
            return Stack::default();
        };
        let taken = stack.split_off_top(count);
        if stack.is_empty() {
            *self = Cell::Empty;
        }
        taken
    }

    /// Put `pieces` on top of whatever is here.
    pub(crate) fn put(&mut self, pieces: Stack) {
        if pieces.is_empty() {
            return;
        }
        match self {
            Cell::Empty => *self = Cell::Stack(pieces),
            Cell::Stack(stack) => stack.extend(pieces),
        }
    }

    /// Trim to `max` pieces from the bottom. See [`Stack::trim_bottom`].
    /// The cell becomes `Empty` if nothing is left.
    pub(crate) fn trim_bottom(&mut self, max: usize) -> SmallVec<[PlayerId; 10]> {
        let Cell::Stack(stack) = self else {
            return SmallVec::new();
        };
        let removed = stack.trim_bottom(max);
        if stack.is_empty() {
            *self = Cell::Empty;
        }
        removed
    }
}

/// The 6×6 grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the opening position laid out.
    #[must_use]
    pub fn new(opening: OpeningLayout) -> Self {
        let mut board = Self::empty();
        board.fill_board(opening);
        board
    }

    /// Create a board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: vec![Cell::Empty; CELL_COUNT],
        }
    }

    /// Deal one piece onto every cell.
    ///
    /// Lines are walked in order and each line is dealt in pairs of cells,
    /// two for the first player then two for the second.
    pub(crate) fn fill_board(&mut self, opening: OpeningLayout) {
        let mut first = true;

        for col in 0..BOARD_SIZE {
            if opening == OpeningLayout::RowReset {
                first = true;
            }
            for row in (0..BOARD_SIZE).step_by(2) {
                let owner = if first {
                    PlayerId::FIRST
                } else {
                    PlayerId::SECOND
                };
                for r in row..row + 2 {
                    let index = col * BOARD_SIZE + r;
                    self.cells[index] = Cell::Stack(Stack::single(owner));
                }
                first = !first;
            }
        }
    }

    /// The cell at `pos`, or `None` when off-board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        pos.index().map(|i| &self.cells[i])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        pos.index().map(move |i| &mut self.cells[i])
    }

    /// Move the top `count` pieces from `from` onto `to`, keeping their
    /// order. Off-board positions are ignored.
    pub(crate) fn transfer(&mut self, from: Position, to: Position, count: usize) {
        let (Some(from), Some(to)) = (from.index(), to.index()) else {
            return;
        };
        let moved = self.cells[from].take_top(count);
        self.cells[to].put(moved);
    }

    /// Iterate over `(position, cell)` pairs in storage order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Position::from_index(i), cell))
    }

    /// Pieces on the board, per owner.
    #[must_use]
    pub fn pieces_by_owner(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(0);
        for piece in self.cells.iter().flat_map(Cell::pieces) {
            counts[*piece] += 1;
        }
        counts
    }

    /// Total pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().map(Cell::height).sum()
    }

    /// A text view of the board using `markers` for each seat.
    #[must_use]
    pub fn display_with<'a>(&'a self, markers: &'a PlayerMap<&'a str>) -> BoardDisplay<'a> {
        BoardDisplay {
            board: self,
            markers,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(OpeningLayout::default())
    }
}

/// Plain-text dump of a board, one board line per text line.
///
/// Each cell shows its stack bottom first, `[]` for empty.
pub struct BoardDisplay<'a> {
    board: &'a Board,
    markers: &'a PlayerMap<&'a str>,
}

impl std::fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.board.cells.chunks(BOARD_SIZE) {
            let rendered: Vec<String> = line
                .iter()
                .map(|cell| {
                    let markers: Vec<&str> =
                        cell.pieces().iter().map(|p| self.markers[*p]).collect();
                    format!("[{}]", markers.join(","))
                })
                .collect();
            writeln!(f, "{}", rendered.join(" "))?;
        }
        Ok(())
    }
}
