use std::thread;
use std::time::Duration;

use engine::{Board, BotStrategy, GameResult, Mark, calculate_move, log};

use crate::game_mode::{GameMode, Seat};
use crate::input;
use crate::render;

const ENGINE_MOVE_DELAY: Duration = Duration::from_millis(750);

pub fn run_game(mode: GameMode) {
    let (seat_x, seat_o) = mode.seats();
    let mut board = Board::new();
    let mut rng = rand::rng();

    println!("\nSquares are numbered 1-9:");
    render::print_reference_grid();

    let mut mover = Mark::X;
    let mut first_move = true;

    loop {
        let seat = match mover {
            Mark::O => seat_o,
            _ => seat_x,
        };

        let square = match seat {
            Seat::Human => human_move(&board, mover),
            Seat::Engine => {
                // The opening move on an empty board is played at random;
                // every move after that runs the pruned search.
                let strategy = if first_move {
                    BotStrategy::Random
                } else {
                    BotStrategy::AlphaBeta
                };
                let Some(square) = calculate_move(strategy, &mut board, mover, &mut rng) else {
                    break;
                };
                println!("\nEngine ({}) chooses square {}", mover.as_char(), square + 1);
                log!(
                    "engine move: mark={} square={} strategy={:?}",
                    mover.as_char(),
                    square + 1,
                    strategy
                );
                if mode == GameMode::EngineVsEngine {
                    thread::sleep(ENGINE_MOVE_DELAY);
                }
                square
            }
        };

        if let Err(e) = board.make_move(square, mover) {
            println!("\n{}. Try again.", e);
            continue;
        }
        first_move = false;

        render::print_board(&board);

        match board.result() {
            GameResult::Win(mark) => {
                println!("\n{} wins!", mark.as_char());
                log!("game over: {} wins", mark.as_char());
                break;
            }
            GameResult::Draw => {
                println!("\nIt's a draw!");
                log!("game over: draw");
                break;
            }
            GameResult::InProgress => {}
        }

        mover = match mover {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }
}

fn human_move(board: &Board, mover: Mark) -> usize {
    loop {
        let line = input::prompt(&format!("\n{}'s turn. Input move (1-9): ", mover.as_char()));
        let square = match line.trim().parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => n - 1,
            _ => {
                println!("\nInvalid square. Try again.");
                continue;
            }
        };

        if board.available_moves().contains(&square) {
            return square;
        }
        println!("\nInvalid square. Try again.");
    }
}
