use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};

use engine::{Board, GameResult, Mark, minimax, minimax_alpha_beta};

fn mid_game_board() -> Board {
    let mut board = Board::new();
    let moves = [(4, Mark::X), (0, Mark::O), (8, Mark::X), (2, Mark::O)];
    for (square, mark) in moves {
        board.make_move(square, mark).unwrap();
    }
    board
}

fn bench_minimax_empty_board() {
    let mut board = Board::new();
    let depth = board.available_moves().len() as i32;
    minimax(&mut board, depth, true, Mark::X);
}

fn bench_alpha_beta_empty_board() {
    let mut board = Board::new();
    let depth = board.available_moves().len() as i32;
    minimax_alpha_beta(&mut board, depth, i32::MIN, i32::MAX, true, Mark::X);
}

fn bench_alpha_beta_mid_game() {
    let mut board = mid_game_board();
    let depth = board.available_moves().len() as i32;
    minimax_alpha_beta(&mut board, depth, i32::MIN, i32::MAX, true, Mark::X);
}

fn bench_self_play_full_game() {
    let mut board = Board::new();
    let mut mover = Mark::X;

    while board.result() == GameResult::InProgress {
        let depth = board.available_moves().len() as i32;
        let outcome = minimax_alpha_beta(&mut board, depth, i32::MIN, i32::MAX, true, mover);
        let Some(square) = outcome.position else {
            break;
        };
        board.make_move(square, mover).unwrap();
        mover = match mover {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    group.sampling_mode(SamplingMode::Flat).sample_size(20);

    group.bench_function("minimax_empty", |b| b.iter(bench_minimax_empty_board));
    group.bench_function("alpha_beta_empty", |b| b.iter(bench_alpha_beta_empty_board));
    group.bench_function("alpha_beta_mid_game", |b| b.iter(bench_alpha_beta_mid_game));
    group.bench_function("self_play_full_game", |b| b.iter(bench_self_play_full_game));

    group.finish();
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
