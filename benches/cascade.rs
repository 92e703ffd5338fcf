//! Cascade resolution benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chain_reaction::board::{Board, Position};
use chain_reaction::bot::{Heuristic, MovePolicy};
use chain_reaction::core::{GameRng, Player, CELL_CAPACITY};
use chain_reaction::reaction::ChainReaction;

/// Every cell one short of capacity, Red everywhere except one Blue corner.
fn saturated_board() -> Board {
    let mut board = Board::new();
    for pos in Position::all() {
        board.set(pos, CELL_CAPACITY - 1, Some(Player::Red));
    }
    board.set(Position::new(4, 4), CELL_CAPACITY - 1, Some(Player::Blue));
    board
}

fn bench_full_cascade(c: &mut Criterion) {
    let template = saturated_board();

    c.bench_function("resolve_saturated_board", |b| {
        b.iter(|| {
            let mut board = template.clone();
            board.add_unit(Position::new(2, 2), Player::Red);
            black_box(ChainReaction::resolve(&mut board))
        })
    });
}

fn bench_bot_choice(c: &mut Criterion) {
    let board = saturated_board();
    let bot = Heuristic::default();
    let mut rng = GameRng::new(42);

    c.bench_function("heuristic_choose_move", |b| {
        b.iter(|| black_box(bot.choose_move(&board, Player::Red, &mut rng)))
    });
}

criterion_group!(benches, bench_full_cascade, bench_bot_choice);
criterion_main!(benches);
