//! Rules integration tests.
//!
//! These drive the engine only through its public API: the reference opening,
//! turn order, rejected actions, and a complete game played to a win.

use focus_engine::{
    Action, ActionError, Cell, FocusGame, FocusGameBuilder, GameStatus, MoveError, MoveOutcome,
    OpeningLayout, PlaceError, PlaceOutcome, PlayerId, Position, RulesEngine, BOARD_SIZE,
};

fn new_game() -> FocusGame {
    FocusGame::new(("A", "R"), ("B", "G")).unwrap()
}

// =============================================================================
// Opening Position
// =============================================================================

/// Every cell starts with exactly one piece and the first two cells of each
/// line belong to the first player.
#[test]
fn test_opening_position() {
    let game = new_game();

    for pos in Position::all() {
        assert_eq!(game.stack_at(pos).unwrap().height(), 1, "cell {}", pos);
    }
    for col in 0..BOARD_SIZE as i32 {
        assert_eq!(game.markers_at((col, 0)).unwrap(), game.markers_at((col, 1)).unwrap());
    }
    assert_eq!(game.markers_at((0, 0)).unwrap(), vec!["R"]);
    assert_eq!(game.markers_at((0, 2)).unwrap(), vec!["G"]);
    assert_eq!(game.markers_at((0, 4)).unwrap(), vec!["R"]);
    assert_eq!(game.total_pieces(), 36);
}

/// The row-reset layout starts every line with the first player.
#[test]
fn test_row_reset_opening() {
    let game = FocusGameBuilder::new()
        .first_player("A", "R")
        .second_player("B", "G")
        .opening(OpeningLayout::RowReset)
        .build()
        .unwrap();

    for col in 0..BOARD_SIZE as i32 {
        let line: Vec<_> = (0..BOARD_SIZE as i32)
            .map(|row| game.markers_at((col, row)).unwrap()[0])
            .collect();
        assert_eq!(line, vec!["R", "R", "G", "G", "R", "R"]);
    }
}

// =============================================================================
// Reference Session
// =============================================================================

/// The first move of the reference session, then a reserve attempt with an
/// empty reserve.
#[test]
fn test_reference_session() {
    let mut game = FocusGame::new(("PlayerA", "R"), ("PlayerB", "G")).unwrap();

    assert_eq!(
        game.move_piece("PlayerA", (0, 0), (0, 1), 1),
        Ok(MoveOutcome::Moved)
    );
    assert_eq!(game.markers_at((0, 1)).unwrap(), vec!["R", "R"]);
    assert_eq!(game.stack_at((0, 0)).unwrap(), &Cell::Empty);
    assert_eq!(game.captured_count("PlayerA"), Some(0));
    assert_eq!(game.turn(), 1);

    assert_eq!(
        game.place_reserve("PlayerA", (0, 0)),
        Err(PlaceError::NoReserve)
    );
    assert_eq!(game.reserve_count("PlayerA"), Some(0));
    assert_eq!(game.turn(), 1);
}

/// The second player cannot open the game.
#[test]
fn test_second_player_cannot_open() {
    let mut game = new_game();
    let board = game.board_snapshot();

    assert_eq!(
        game.move_piece("B", (0, 2), (0, 1), 1),
        Err(MoveError::InvalidTurn)
    );
    assert_eq!(game.board(), &board);
    assert_eq!(game.turn(), 0);
    assert_eq!(game.active_player().name(), "A");
}

/// Turns alternate strictly.
#[test]
fn test_turns_alternate() {
    let mut game = new_game();

    assert!(game.move_piece("A", (0, 0), (0, 1), 1).is_ok());
    assert_eq!(
        game.move_piece("A", (0, 4), (0, 5), 1),
        Err(MoveError::InvalidTurn)
    );
    assert!(game.move_piece("B", (0, 2), (0, 3), 1).is_ok());
    assert_eq!(game.active_player_id(), PlayerId::FIRST);
    assert_eq!(game.turn(), 2);
}

/// Out-of-range reads are errors, not panics.
#[test]
fn test_off_board_queries() {
    let game = new_game();
    assert!(game.stack_at((6, 0)).is_err());
    assert!(game.markers_at((0, -1)).is_err());
    assert_eq!(game.captured_count("nobody"), None);
}

// =============================================================================
// Complete Game
// =============================================================================

/// A full game won by the first player on the 21st action.
///
/// Covers multi-piece moves, overflow onto empty-bottomed stacks, a reserve
/// placement that itself overflows, and the win being declared on the
/// winner's next move after reaching six captures.
#[test]
fn test_game_to_completion() {
    let mut game = new_game();
    let play = |game: &mut FocusGame, name: &str, from: (i32, i32), to: (i32, i32), n: usize| {
        game.move_piece(name, from, to, n)
    };

    play(&mut game, "A", (2, 5), (1, 5), 1).unwrap();
    play(&mut game, "B", (1, 4), (1, 5), 1).unwrap();
    play(&mut game, "A", (0, 5), (1, 5), 1).unwrap();
    assert_eq!(game.markers_at((1, 5)).unwrap(), vec!["G", "R", "G", "R"]);

    play(&mut game, "B", (5, 4), (5, 5), 1).unwrap();
    play(&mut game, "A", (1, 5), (5, 5), 4).unwrap();
    assert_eq!(game.markers_at((5, 5)).unwrap(), vec!["G", "G", "R", "G", "R"]);
    assert!(game.stack_at((1, 5)).unwrap().is_empty());
    assert_eq!(game.captured_count("A"), Some(1));

    play(&mut game, "B", (1, 1), (0, 1), 1).unwrap();
    play(&mut game, "A", (5, 5), (5, 0), 5).unwrap();
    assert_eq!(game.captured_count("A"), Some(2));

    play(&mut game, "B", (0, 1), (1, 1), 1).unwrap();
    assert_eq!(game.markers_at((0, 1)).unwrap(), vec!["R"]);

    play(&mut game, "A", (4, 0), (5, 0), 1).unwrap();
    play(&mut game, "B", (1, 0), (0, 0), 1).unwrap();
    play(&mut game, "A", (5, 0), (0, 0), 5).unwrap();
    // Seven pieces: the bottom R goes to reserve, the G above it is captured.
    assert_eq!(game.markers_at((0, 0)).unwrap(), vec!["G", "R", "G", "R", "R"]);
    assert_eq!(game.captured_count("A"), Some(4));
    assert_eq!(game.reserve_count("A"), Some(1));

    play(&mut game, "B", (4, 2), (4, 1), 1).unwrap();
    assert_eq!(game.place_reserve("A", (0, 0)), Ok(PlaceOutcome::Placed));
    assert_eq!(game.markers_at((0, 0)).unwrap(), vec!["R", "G", "R", "R", "R"]);
    assert_eq!(game.captured_count("A"), Some(5));
    assert_eq!(game.reserve_count("A"), Some(0));

    play(&mut game, "B", (4, 1), (4, 2), 1).unwrap();
    play(&mut game, "A", (4, 4), (5, 4), 1).unwrap();
    play(&mut game, "B", (2, 3), (2, 4), 1).unwrap();
    play(&mut game, "A", (2, 0), (3, 0), 1).unwrap();
    play(&mut game, "B", (3, 1), (3, 0), 1).unwrap();
    assert_eq!(
        play(&mut game, "A", (0, 0), (3, 0), 3),
        Ok(MoveOutcome::Moved)
    );
    assert_eq!(game.captured_count("A"), Some(6));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), 19);

    play(&mut game, "B", (1, 1), (0, 1), 1).unwrap();
    assert_eq!(
        play(&mut game, "A", (4, 1), (3, 1), 1),
        Ok(MoveOutcome::Won(PlayerId::FIRST))
    );

    assert_eq!(game.status(), GameStatus::Won(PlayerId::FIRST));
    assert_eq!(game.winner().map(|p| p.name()), Some("A"));
    assert_eq!(game.turn(), 20);
    assert_eq!(game.history().len(), 21);
    assert_eq!(game.total_pieces(), 36);
    assert_eq!(
        game.move_piece("B", (0, 1), (0, 0), 1),
        Err(MoveError::GameOver)
    );
}

// =============================================================================
// Rules Engine Seam
// =============================================================================

/// Actions can be replayed through the engine trait.
#[test]
fn test_replay_through_engine() {
    let mut game = new_game();
    let script = [
        ("A", Action::movement((0, 0), (0, 1), 1)),
        ("B", Action::movement((0, 2), (0, 1), 1)),
        ("A", Action::movement((0, 4), (0, 2), 2)),
    ];

    // The last one fails: (0, 4) only holds one piece.
    let result = game.apply_all(script);
    assert_eq!(result, Err((2, ActionError::Move(MoveError::InvalidCount))));
    assert_eq!(game.markers_at((0, 1)).unwrap(), vec!["R", "R", "G"]);

    let recorded: Vec<_> = game.history().iter().map(|r| r.action).collect();
    assert_eq!(recorded, vec![script[0].1, script[1].1]);
    assert_eq!(game.is_terminal(), None);
}

/// Short games for house rules: a lower capture target ends things quickly.
#[test]
fn test_custom_capture_target() {
    let mut game = FocusGameBuilder::new()
        .first_player("A", "R")
        .second_player("B", "G")
        .max_stack_height(2)
        .captures_to_win(1)
        .build()
        .unwrap();

    game.move_piece("A", (0, 1), (0, 2), 1).unwrap();
    assert_eq!(game.markers_at((0, 2)).unwrap(), vec!["G", "R"]);

    game.move_piece("B", (0, 3), (0, 4), 1).unwrap();
    game.move_piece("A", (0, 2), (0, 4), 2).unwrap();
    // [R, G] + [G, R] trimmed to two: R to reserve, G captured.
    assert_eq!(game.markers_at((0, 4)).unwrap(), vec!["G", "R"]);
    assert_eq!(game.captured_count("A"), Some(1));
    assert_eq!(game.reserve_count("A"), Some(1));

    game.move_piece("B", (1, 0), (0, 0), 1).unwrap();
    assert_eq!(
        game.move_piece("A", (0, 4), (0, 5), 1),
        Ok(MoveOutcome::Won(PlayerId::FIRST))
    );
}
