use rand::Rng;

use crate::board::Board;
use crate::search::{minimax, minimax_alpha_beta};
use crate::types::Mark;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotStrategy {
    Random,
    Minimax,
    AlphaBeta,
}

/// Picks a square for `mark` under the given strategy. Returns `None` only
/// when the board has no legal moves left. The search strategies run with a
/// full depth budget and leave the board unchanged.
pub fn calculate_move(
    strategy: BotStrategy,
    board: &mut Board,
    mark: Mark,
    rng: &mut impl Rng,
) -> Option<usize> {
    match strategy {
        BotStrategy::Random => calculate_random_move(board, rng),
        BotStrategy::Minimax => {
            let depth = board.available_moves().len() as i32;
            minimax(board, depth, true, mark).position
        }
        BotStrategy::AlphaBeta => {
            let depth = board.available_moves().len() as i32;
            minimax_alpha_beta(board, depth, i32::MIN, i32::MAX, true, mark).position
        }
    }
}

fn calculate_random_move(board: &Board, rng: &mut impl Rng) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Empty as E, O, X};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_strategy_returns_available_square() {
        let mut board = Board::from_marks([X, E, E, O, E, E, X, E, E]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let square = calculate_move(BotStrategy::Random, &mut board, O, &mut rng).unwrap();
            assert!(board.available_moves().contains(&square));
        }
    }

    #[test]
    fn test_strategies_return_none_on_full_board() {
        let mut board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        let mut rng = StdRng::seed_from_u64(7);

        for strategy in [BotStrategy::Random, BotStrategy::Minimax, BotStrategy::AlphaBeta] {
            assert_eq!(calculate_move(strategy, &mut board, X, &mut rng), None);
        }
    }

    #[test]
    fn test_alpha_beta_strategy_takes_winning_square() {
        let mut board = Board::from_marks([X, X, E, E, O, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(7);

        let square = calculate_move(BotStrategy::AlphaBeta, &mut board, X, &mut rng);
        assert_eq!(square, Some(2));
    }
}
