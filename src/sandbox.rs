use std::env;

use anyhow::Context;
use log::info;
use quad_chess::utils::text_board;
use quad_chess::{Game, GameConfig, Notification};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Plays random sandbox moves and prints the board.
///
/// Usage: `sandbox [moves] [seed]`, run with `RUST_LOG=info` to see the log.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let moves: usize = match args.get(1) {
        Some(value) => value.parse().context("moves must be a number")?,
        None => 20,
    };
    let seed: u64 = match args.get(2) {
        Some(value) => value.parse().context("seed must be a number")?,
        None => rand::random(),
    };

    let mut game = Game::new(GameConfig::default())?;
    let mut captures = 0usize;
    game.subscribe(move |notification| {
        if let Notification::PieceCaptured { piece, .. } = notification {
            captures += 1;
            info!("Capture #{captures}: piece {piece} removed");
        }
    });

    let mut rng = StdRng::seed_from_u64(seed);
    info!("Playing {moves} random moves with seed {seed}");
    for _ in 0..moves {
        let Some(record) = game.make_random_move(&mut rng)? else {
            break;
        };
        println!(
            "{} {} {} -> {}",
            game.config().player_name(record.player),
            record.kind,
            record.from,
            record.to
        );
    }
    game.board().check_invariants()?;
    print!("{}", text_board(&game));
    Ok(())
}
