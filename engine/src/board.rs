use std::error::Error;
use std::fmt;

use crate::types::{GameResult, Mark};

pub const SQUARE_COUNT: usize = 9;

const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMoveError {
    pub square: usize,
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.square >= SQUARE_COUNT {
            write!(f, "Square {} is out of bounds", self.square)
        } else {
            write!(f, "Square {} is already marked", self.square)
        }
    }
}

impl Error for IllegalMoveError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Mark; SQUARE_COUNT],
    result: GameResult,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: [Mark::Empty; SQUARE_COUNT],
            result: GameResult::InProgress,
        }
    }

    #[cfg(test)]
    pub fn from_marks(marks: [Mark; SQUARE_COUNT]) -> Self {
        let mut board = Self {
            squares: marks,
            result: GameResult::InProgress,
        };
        board.result = board.compute_result();
        board
    }

    /// Empty squares in ascending index order. Search tie-breaks depend on
    /// this ordering, so it must stay deterministic.
    pub fn available_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(square, _)| square)
            .collect()
    }

    pub fn has_empty_squares(&self) -> bool {
        self.squares.contains(&Mark::Empty)
    }

    pub fn squares(&self) -> [Mark; SQUARE_COUNT] {
        self.squares
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn make_move(&mut self, square: usize, mark: Mark) -> Result<(), IllegalMoveError> {
        if square >= SQUARE_COUNT || self.squares[square] != Mark::Empty {
            return Err(IllegalMoveError { square });
        }

        self.squares[square] = mark;
        self.result = self.compute_result();
        Ok(())
    }

    /// Reverts a simulated move. Must pair LIFO with `make_move`; the cached
    /// result is recomputed so it is never stale across the undo boundary.
    pub fn undo_move(&mut self, square: usize) {
        self.squares[square] = Mark::Empty;
        self.result = self.compute_result();
    }

    fn compute_result(&self) -> GameResult {
        for line in WINNING_LINES {
            let mark = self.squares[line[0]];
            if mark != Mark::Empty
                && mark == self.squares[line[1]]
                && mark == self.squares[line[2]]
            {
                return GameResult::Win(mark);
            }
        }

        if self.has_empty_squares() {
            GameResult::InProgress
        } else {
            GameResult::Draw
        }
    }
}
