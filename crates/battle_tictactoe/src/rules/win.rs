//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the mark filling all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == Square::Occupied(mark)
                    && board.get(c) == Square::Occupied(mark) =>
            {
                Some(mark)
            }
            _ => None,
        }
    }

    /// Returns the empty square that would complete this line for `mark`.
    ///
    /// Requires exactly two squares holding `mark` and the third empty.
    pub fn completion(&self, board: &Board, mark: Mark) -> Option<Position> {
        let held = self
            .0
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        if held != 2 {
            return None;
        }
        self.0.iter().copied().find(|pos| board.is_empty(*pos))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Winning combinations in scan order: rows, columns, diagonals.
///
/// Every scan (win detection, win-now, block) walks this array front to
/// back and stops at the first match.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a completed line on the board.
///
/// Returns the owner and the first completed line in scan order,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, *line)))
}
