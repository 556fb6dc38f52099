//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::{detect_outcome, Outcome};
use crate::error::EngineError;
use crate::invariants::{BoardInvariants, InvariantSet};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Who owns a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (always moves first).
    Human,
    /// The computer opponent.
    Computer,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }

    /// The turn during which this mark is placed.
    pub fn turn(self) -> Turn {
        match self {
            Mark::Human => Turn::HumanTurn,
            Mark::Computer => Turn::ComputerTurn,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::empty_on(self)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Human marks render as `X`, computer marks as `O`, and empty squares
    /// as their 1-based key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(Mark::Human) => "X".to_string(),
                    Square::Occupied(Mark::Computer) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a board literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The literal did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// A character was not one of `X`, `O`, `.` or `-`.
    #[display("Unexpected square character {:?}", _0)]
    BadSquare(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X` (human), `O` (computer) and `.`/`-` (empty), ignoring
    /// whitespace and `|` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Mark::Human)),
                'O' | 'o' => Ok(Square::Occupied(Mark::Computer)),
                '.' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::BadSquare(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Whose move the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Waiting for the human.
    HumanTurn,
    /// Waiting for the computer.
    ComputerTurn,
}

impl Turn {
    /// Returns the turn that follows this one.
    pub fn next(self) -> Self {
        match self {
            Turn::HumanTurn => Turn::ComputerTurn,
            Turn::ComputerTurn => Turn::HumanTurn,
        }
    }

    /// The mark placed during this turn.
    pub fn mark(self) -> Mark {
        match self {
            Turn::HumanTurn => Mark::Human,
            Turn::ComputerTurn => Mark::Computer,
        }
    }
}

/// Complete game state.
///
/// The outcome is never stored: [`GameState::outcome`] recomputes it from
/// the board on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Whose move is next.
    turn: Turn,
}

impl GameState {
    /// Creates a fresh game: empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::HumanTurn,
        }
    }

    /// Builds a state from an existing board and turn.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the pair could not arise from alternating
    /// play starting with the human.
    #[instrument]
    pub fn from_parts(board: Board, turn: Turn) -> Result<Self, EngineError> {
        let state = Self { board, turn };
        BoardInvariants::check_all(&state).map_err(|violations| {
            EngineError::from_violations("Inconsistent game state", &violations)
        })?;
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose move is next.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Derives the outcome from the current board.
    pub fn outcome(&self) -> Outcome {
        detect_outcome(&self.board)
    }

    /// Returns true once the game has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Places the mark of the side to move and passes the turn
    /// (unchecked - the engine validates first).
    pub(crate) fn apply_move(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.turn.mark()));
        self.turn = self.turn.next();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
