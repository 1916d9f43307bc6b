//! Deal and play one three-player round, then print the status.
//!
//! The seed is drawn once at startup and printed with the report, so any
//! round can be replayed. Set `RUST_LOG=debug` to trace the night.

use one_night::core::{GameRng, STANDARD_PLAYERS};
use one_night::game::Game;
use one_night::report::RoundReport;

fn main() {
    env_logger::init();

    let mut rng = GameRng::from_entropy();
    log::info!("seed {}", rng.seed());

    let mut game = match Game::standard(STANDARD_PLAYERS, &mut rng) {
        Ok(game) => game,
        Err(err) => fail(err),
    };
    if let Err(err) = game.play(&mut rng) {
        fail(err);
    }

    print!("{}", RoundReport::from_game(&game).with_seed(rng.seed()));
}

fn fail(err: impl Into<Box<dyn std::error::Error>>) -> ! {
    let err: Box<dyn std::error::Error> = err.into();
    log::error!("{}", err);
    eprintln!("error: {}", err);
    std::process::exit(1);
}

