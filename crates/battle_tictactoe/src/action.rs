//! Results of move requests.
//!
//! An illegal click is ordinary UI traffic, not a failure, so the engine
//! reports it as [`MoveResult::Ignored`] instead of an error.

use super::{GameState, Position, Turn};

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveResult {
    /// The move was legal; carries the new state.
    Applied(GameState),
    /// The move was rejected and the state is unchanged.
    Ignored(Ignored),
}

impl MoveResult {
    /// Returns the new state if the move was applied.
    pub fn state(&self) -> Option<GameState> {
        match self {
            MoveResult::Applied(state) => Some(*state),
            MoveResult::Ignored(_) => None,
        }
    }

    /// Returns true if the move was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveResult::Applied(_))
    }
}

/// Why a move request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Ignored {
    /// The cell index is not in 0..=8.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(usize),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The game is waiting for the other side.
    #[display("Not your turn ({:?} expected)", _0)]
    NotYourTurn(Turn),

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The starting state was already inconsistent, so the result would be
    /// too. Only reachable for states that bypassed [`GameState::from_parts`].
    #[display("Move would leave the game in an inconsistent state")]
    BrokenInvariant,
}
