//! Play the opening of a Focus game and print what the engine reports.
//!
//! Set `RUST_LOG=debug` (or `trace` for overflow detail) to see the engine's
//! own log lines.

use focus_engine::{FocusGame, RulesEngine, SetupError};
use log::info;

fn main() -> Result<(), SetupError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut game = FocusGame::new(("PlayerA", "R"), ("PlayerB", "G"))?;
    info!("starting position:\n{}", game);

    match game.move_piece("PlayerA", (0, 0), (0, 1), 1) {
        Ok(outcome) => println!("move: {:?}", outcome),
        Err(err) => println!("move rejected: {}", err),
    }

    if let Ok(markers) = game.markers_at((0, 1)) {
        println!("pieces at (0, 1): {:?}", markers);
    }
    println!("PlayerA captured: {:?}", game.captured_count("PlayerA"));

    match game.place_reserve("PlayerA", (0, 0)) {
        Ok(outcome) => println!("reserve: {:?}", outcome),
        Err(err) => println!("reserve rejected: {}", err),
    }
    println!("PlayerA reserve: {:?}", game.reserve_count("PlayerA"));

    print!("{}", game);
    info!(
        "turn {}, {} to move, winner: {:?}",
        game.turn(),
        game.active_player().name(),
        game.is_terminal()
    );

    Ok(())
}
