mod board;
mod bot;
mod search;
mod types;

pub mod logger;

pub use board::{Board, IllegalMoveError, SQUARE_COUNT};
pub use bot::{BotStrategy, calculate_move};
pub use search::{SearchOutcome, minimax, minimax_alpha_beta};
pub use types::{GameResult, Mark};
