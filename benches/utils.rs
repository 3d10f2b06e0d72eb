use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quad_chess::{Game, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_game(mut game: Game, max_steps: usize, seed: u64) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..max_steps {
        match game.make_random_move(&mut rng) {
            Ok(Some(_)) => (),
            _ => break,
        }
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("new game", |b| {
        b.iter(|| Game::new(black_box(GameConfig::default())))
    });
    c.bench_function("reset board", |b| {
        let mut game = Game::new(GameConfig::default()).expect("Default config is valid");
        b.iter(|| game.reset_board())
    });
    c.bench_function("random game 100", |b| {
        b.iter(|| {
            let game = Game::new(GameConfig::default()).expect("Default config is valid");
            random_game(game, black_box(100), 42)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
