//! Terminal-state detection.

use super::draw::is_full;
use super::win::{winning_line, Line};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one square is empty.
    InProgress,
    /// The human completed `Line`.
    HumanWin(Line),
    /// The computer completed `Line`.
    ComputerWin(Line),
    /// The board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns true for every outcome except [`Outcome::InProgress`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::HumanWin(_) => Some(Mark::Human),
            Outcome::ComputerWin(_) => Some(Mark::Computer),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::HumanWin(line) | Outcome::ComputerWin(line) => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::HumanWin(line) => write!(f, "Human wins on {}", line),
            Outcome::ComputerWin(line) => write!(f, "Computer wins on {}", line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// A completed line takes precedence over a full board, and the first
/// completed line in scan order is reported. Any board is accepted, even
/// one that alternating play could not produce.
#[instrument(level = "trace")]
pub fn detect_outcome(board: &Board) -> Outcome {
    match winning_line(board) {
        Some((Mark::Human, line)) => Outcome::HumanWin(line),
        Some((Mark::Computer, line)) => Outcome::ComputerWin(line),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(detect_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let board: Board = "XOX OXO XOX".parse().unwrap();
        let outcome = detect_outcome(&board);
        assert_eq!(outcome.winner(), Some(Mark::Human));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(detect_outcome(&board), Outcome::Draw);
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
