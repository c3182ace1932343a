use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_2048::core::{Board, Direction, GameConfig, GameRng};
use rust_2048::game::Game;
use rust_2048::rules::{add_random_tile, slide};

fn mixed_board() -> Board {
    Board::from_rows([
        [2, 2, 4, 8],
        [0, 4, 4, 0],
        [16, 0, 16, 32],
        [2, 2, 2, 2],
    ])
}

fn bench_slide(c: &mut Criterion) {
    let board = mixed_board();
    c.bench_function("slide_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(slide(black_box(&board), dir));
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let board = mixed_board();
    let mut rng = GameRng::new(1);
    c.bench_function("add_random_tile", |b| {
        b.iter(|| black_box(add_random_tile(black_box(&board), &mut rng)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_to_game_over", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::new().with_seed(7)).unwrap();
            while let Some(&dir) = game.legal_moves().first() {
                game.make_move(dir).unwrap();
            }
            black_box(game.score())
        })
    });
}

criterion_group!(benches, bench_slide, bench_spawn, bench_full_game);
criterion_main!(benches);
