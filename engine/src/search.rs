use crate::board::Board;
use crate::types::{GameResult, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub position: Option<usize>,
    pub score: i32,
}

/// Exhaustive minimax over the remaining game tree. `depth` is the remaining
/// ply budget; terminal scores are weighted by it so faster wins (and slower
/// losses) score better. The board is restored before returning.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, ai_mark: Mark) -> SearchOutcome {
    if let Some(outcome) = terminal_outcome(board, depth, ai_mark) {
        return outcome;
    }

    let mover = if maximizing {
        ai_mark
    } else {
        ai_mark.opponent().unwrap()
    };

    let mut best = SearchOutcome {
        position: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
    };

    for square in board.available_moves() {
        board
            .make_move(square, mover)
            .expect("available move is legal");
        let score = minimax(board, depth - 1, !maximizing, ai_mark).score;
        board.undo_move(square);

        // Strict comparison: the first move reaching the best score wins ties.
        if maximizing {
            if score > best.score {
                best = SearchOutcome {
                    position: Some(square),
                    score,
                };
            }
        } else if score < best.score {
            best = SearchOutcome {
                position: Some(square),
                score,
            };
        }
    }

    best
}

/// Same contract as [`minimax`], with alpha-beta pruning. Returns the same
/// score from any position; under score ties the chosen move may differ,
/// since pruned siblings are never examined.
pub fn minimax_alpha_beta(
    board: &mut Board,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai_mark: Mark,
) -> SearchOutcome {
    if let Some(outcome) = terminal_outcome(board, depth, ai_mark) {
        return outcome;
    }

    let mover = if maximizing {
        ai_mark
    } else {
        ai_mark.opponent().unwrap()
    };

    let mut best = SearchOutcome {
        position: None,
        score: if maximizing { i32::MIN } else { i32::MAX },
    };

    for square in board.available_moves() {
        board
            .make_move(square, mover)
            .expect("available move is legal");
        let score = minimax_alpha_beta(board, depth - 1, alpha, beta, !maximizing, ai_mark).score;
        board.undo_move(square);

        if maximizing {
            if score > best.score {
                best = SearchOutcome {
                    position: Some(square),
                    score,
                };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = SearchOutcome {
                    position: Some(square),
                    score,
                };
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

fn terminal_outcome(board: &Board, depth: i32, ai_mark: Mark) -> Option<SearchOutcome> {
    match board.result() {
        GameResult::Win(mark) if mark == ai_mark => Some(SearchOutcome {
            position: None,
            score: depth + 1,
        }),
        GameResult::Win(_) => Some(SearchOutcome {
            position: None,
            score: -(depth + 1),
        }),
        GameResult::InProgress | GameResult::Draw => {
            if board.has_empty_squares() {
                None
            } else {
                Some(SearchOutcome {
                    position: None,
                    score: 0,
                })
            }
        }
    }
}
