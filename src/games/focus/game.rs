//! Focus game implementation.

use im::Vector;
use log::{debug, trace};

use crate::core::{
    Action, ActionRecord, Board, Cell, GameConfig, OpeningLayout, Player, PlayerId, PlayerMap,
    Position, Stack,
};
use crate::rules::{
    ActionError, ActionOutcome, GameStatus, InvalidMoveReason, MoveError, MoveOutcome,
    PlaceError, PlaceOutcome, PositionError, RulesEngine, SetupError,
};

/// A game of Focus in progress.
///
/// Owns the board and both players. All mutation goes through
/// [`FocusGame::move_piece`] and [`FocusGame::place_reserve`]; every rejected
/// call leaves the game untouched.
#[derive(Clone, Debug)]
pub struct FocusGame {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    /// Successful actions so far. Even turns belong to the first player.
    turn: u32,
    status: GameStatus,
    history: Vector<ActionRecord>,
}

/// Builder for creating a FocusGame.
pub struct FocusGameBuilder {
    first: (String, String),
    second: (String, String),
    config: GameConfig,
}

impl Default for FocusGameBuilder {
    fn default() -> Self {
        Self {
            first: ("PlayerA".to_string(), "R".to_string()),
            second: ("PlayerB".to_string(), "G".to_string()),
            config: GameConfig::default(),
        }
    }
}

impl FocusGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The player who moves on even turns.
    pub fn first_player(mut self, name: impl Into<String>, marker: impl Into<String>) -> Self {
        self.first = (name.into(), marker.into());
        self
    }

    /// The player who moves on odd turns.
    pub fn second_player(mut self, name: impl Into<String>, marker: impl Into<String>) -> Self {
        self.second = (name.into(), marker.into());
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_stack_height(mut self, height: usize) -> Self {
        self.config = self.config.with_max_stack_height(height);
        self
    }

    pub fn captures_to_win(mut self, captures: u32) -> Self {
        self.config = self.config.with_captures_to_win(captures);
        self
    }

    pub fn reserve_requires_turn(mut self, required: bool) -> Self {
        self.config = self.config.with_reserve_requires_turn(required);
        self
    }

    pub fn opening(mut self, opening: OpeningLayout) -> Self {
        self.config = self.config.with_opening(opening);
        self
    }

    /// Validate the players and lay out the opening position.
    pub fn build(mut self) -> Result<FocusGame, SetupError> {
        self.config.max_stack_height = self.config.max_stack_height.max(1);

        let (first_name, first_marker) = self.first;
        let (second_name, second_marker) = self.second;

        if first_name == second_name {
            return Err(SetupError::DuplicateName(first_name));
        }
        if first_marker.is_empty() {
            return Err(SetupError::EmptyMarker(first_name));
        }
        if second_marker.is_empty() {
            return Err(SetupError::EmptyMarker(second_name));
        }
        if first_marker == second_marker {
            return Err(SetupError::DuplicateMarker(first_marker));
        }

        let players = PlayerMap::from_pair(
            Player::new(first_name, first_marker),
            Player::new(second_name, second_marker),
        );
        let board = Board::new(self.config.opening);

        debug!(
            "new game: {} ({}) vs {} ({}), {:?}",
            players[PlayerId::FIRST].name(),
            players[PlayerId::FIRST].marker(),
            players[PlayerId::SECOND].name(),
            players[PlayerId::SECOND].marker(),
            self.config
        );

        Ok(FocusGame {
            config: self.config,
            board,
            players,
            turn: 0,
            status: GameStatus::InProgress,
            history: Vector::new(),
        })
    }
}

impl FocusGame {
    /// Start a standard game. Each player is a `(name, marker)` pair; the
    /// first moves on even turns.
    pub fn new(first: (&str, &str), second: (&str, &str)) -> Result<Self, SetupError> {
        FocusGameBuilder::new()
            .first_player(first.0, first.1)
            .second_player(second.0, second.1)
            .build()
    }

    // === Actions ===

    /// Move the top `count` pieces of the stack at `start` to `end`.
    ///
    /// The mover must be the active player, must control the stack at
    /// `start`, and must move exactly `count` cells in a straight line.
    pub fn move_piece(
        &mut self,
        name: &str,
        start: impl Into<Position>,
        end: impl Into<Position>,
        count: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let (start, end) = (start.into(), end.into());

        let mover = match self.validate_move(name, start, end, count) {
            Ok(mover) => mover,
            Err(err) => {
                debug!("{} move {} -> {} x{} rejected: {}", name, start, end, count, err);
                return Err(err);
            }
        };

        self.board.transfer(start, end, count);
        self.record(mover, Action::Move { from: start, to: end, count });
        debug!("{} moved {} piece(s) {} -> {}", name, count, start, end);

        if self.players[mover].captured() >= self.config.captures_to_win {
            self.status = GameStatus::Won(mover);
            debug!("{} wins with {} captured", name, self.players[mover].captured());
            return Ok(MoveOutcome::Won(mover));
        }

        self.resolve_overflow(mover, end);
        self.turn += 1;
        Ok(MoveOutcome::Moved)
    }

    /// Put one of `name`'s reserve pieces on top of the stack at `pos`.
    ///
    /// Any cell on the board is a legal target, empty or not.
    pub fn place_reserve(
        &mut self,
        name: &str,
        pos: impl Into<Position>,
    ) -> Result<PlaceOutcome, PlaceError> {
        let pos = pos.into();

        let placer = match self.validate_placement(name, pos) {
            Ok(placer) => placer,
            Err(err) => {
                debug!("{} reserve -> {} rejected: {}", name, pos, err);
                return Err(err);
            }
        };

        if let Some(cell) = self.board.cell_mut(pos) {
            cell.put(Stack::single(placer));
        }
        self.resolve_overflow(placer, pos);
        self.players[placer].decrement_reserve();
        self.record(placer, Action::PlaceReserve { to: pos });
        self.turn += 1;

        debug!(
            "{} placed a reserve piece at {} ({} left)",
            name,
            pos,
            self.players[placer].reserve()
        );
        Ok(PlaceOutcome::Placed)
    }

    fn validate_move(
        &self,
        name: &str,
        start: Position,
        end: Position,
        count: usize,
    ) -> Result<PlayerId, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.active_player_id();
        if self.players[mover].name() != name {
            return Err(MoveError::InvalidTurn);
        }

        let source = self
            .board
            .cell(start)
            .ok_or(MoveError::InvalidMove(InvalidMoveReason::OutOfBounds))?;
        if count == 0 || count > source.height() {
            return Err(MoveError::InvalidCount);
        }

        if !end.is_on_board() {
            return Err(MoveError::InvalidMove(InvalidMoveReason::OutOfBounds));
        }
        if source.top() != Some(mover) {
            return Err(MoveError::InvalidMove(InvalidMoveReason::NotOwnStack));
        }
        match start.orthogonal_distance(end) {
            None => Err(MoveError::InvalidMove(InvalidMoveReason::Diagonal)),
            Some(distance) if distance as usize != count => {
                Err(MoveError::InvalidMove(InvalidMoveReason::DistanceMismatch))
            }
            Some(_) => Ok(mover),
        }
    }

    fn validate_placement(&self, name: &str, pos: Position) -> Result<PlayerId, PlaceError> {
        if self.status.is_over() {
            return Err(PlaceError::GameOver);
        }

        let placer = self.player_id(name).ok_or(PlaceError::UnknownPlayer)?;
        if self.players[placer].reserve() == 0 {
            return Err(PlaceError::NoReserve);
        }
        if !pos.is_on_board() {
            return Err(PlaceError::InvalidPosition);
        }
        if self.config.reserve_requires_turn && placer != self.active_player_id() {
            return Err(PlaceError::InvalidTurn);
        }
        Ok(placer)
    }

    /// Trim the stack at `pos` down to the height limit from the bottom.
    ///
    /// Every removed piece is credited to `actor`: their own pieces go to
    /// reserve, the opponent's count as captured.
    fn resolve_overflow(&mut self, actor: PlayerId, pos: Position) {
        let max = self.config.max_stack_height;
        let Some(cell) = self.board.cell_mut(pos) else {
            return;
        };
        let removed = cell.trim_bottom(max);
        if removed.is_empty() {
            return;
        }

        let player = &mut self.players[actor];
        for piece in &removed {
            if *piece == actor {
                player.increment_reserve();
            } else {
                player.increment_captured();
            }
        }
        trace!(
            "overflow at {}: {} piece(s) removed, {} now has {} captured / {} reserve",
            pos,
            removed.len(),
            player.name(),
            player.captured(),
            player.reserve()
        );
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        self.history.push_back(ActionRecord {
            player,
            action,
            turn: self.turn,
        });
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.status.winner().map(|id| &self.players[id])
    }

    /// Seat of the player who acts on the current turn.
    #[must_use]
    pub fn active_player_id(&self) -> PlayerId {
        PlayerId::for_turn(self.turn)
    }

    /// The player who acts on the current turn.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_player_id()]
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players.find(|p| p.name() == name)
    }

    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.player_id(name).map(|id| &self.players[id])
    }

    /// The stack at `pos`.
    pub fn stack_at(&self, pos: impl Into<Position>) -> Result<&Cell, PositionError> {
        let pos = pos.into();
        self.board.cell(pos).ok_or(PositionError::OffBoard(pos))
    }

    /// Marker text of the stack at `pos`, bottom first. Empty for an empty
    /// cell.
    pub fn markers_at(&self, pos: impl Into<Position>) -> Result<Vec<&str>, PositionError> {
        let cell = self.stack_at(pos)?;
        Ok(cell
            .pieces()
            .iter()
            .map(|p| self.players[*p].marker())
            .collect())
    }

    /// Reserve pieces held by `name`, or `None` for an unknown player.
    #[must_use]
    pub fn reserve_count(&self, name: &str) -> Option<u32> {
        self.player_by_name(name).map(Player::reserve)
    }

    /// Pieces captured by `name`, or `None` for an unknown player.
    #[must_use]
    pub fn captured_count(&self, name: &str) -> Option<u32> {
        self.player_by_name(name).map(Player::captured)
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An owned copy of the board.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Successful actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Pieces on the board plus every player's reserve and captured pieces.
    ///
    /// Pieces only ever change place, so this stays at the starting count.
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        let off_board: u32 = self
            .players
            .iter()
            .map(|(_, p)| p.reserve() + p.captured())
            .sum();
        self.board.piece_count() + off_board as usize
    }

    fn markers(&self) -> PlayerMap<&str> {
        PlayerMap::new(|id| self.players[id].marker())
    }
}

impl std::fmt::Display for FocusGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let markers = self.markers();
        write!(f, "{}", self.board.display_with(&markers))
    }
}

impl RulesEngine for FocusGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn apply_action(
        &mut self,
        player_name: &str,
        action: &Action,
    ) -> Result<ActionOutcome, ActionError> {
        match *action {
            Action::Move { from, to, count } => Ok(ActionOutcome::Moved(
                self.move_piece(player_name, from, to, count)?,
            )),
            Action::PlaceReserve { to } => Ok(ActionOutcome::Placed(
                self.place_reserve(player_name, to)?,
            )),
        }
    }

    fn is_terminal(&self) -> Option<PlayerId> {
        self.status.winner()
    }
}
