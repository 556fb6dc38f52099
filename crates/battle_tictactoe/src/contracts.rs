//! Contract-based validation for moves.
//!
//! Contracts pair preconditions, which decide whether a request is
//! ignored, with postconditions, which verify the engine kept its
//! invariants: {P} move {Q}.

use super::action::Ignored;
use super::error::EngineError;
use super::invariants::{BoardInvariants, InvariantSet};
use super::{GameState, Position, Square, Turn};
use tracing::instrument;

/// A contract defines preconditions and postconditions for a move.
pub trait Contract<A> {
    /// What a passing precondition hands to the move.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &GameState, action: &A) -> Result<Self::Checked, Ignored>;

    /// Checks postconditions after applying the action.
    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index must be on the board.
pub struct CellInRange;

impl CellInRange {
    #[instrument]
    pub fn check(index: usize) -> Result<Position, Ignored> {
        Position::from_index(index).ok_or(Ignored::OutOfRange(index))
    }
}

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Ignored> {
        if state.is_over() {
            Err(Ignored::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be `turn`'s move.
pub struct TurnIs;

impl TurnIs {
    #[instrument(skip(state))]
    pub fn check(state: &GameState, turn: Turn) -> Result<(), Ignored> {
        if state.turn() == turn {
            Ok(())
        } else {
            Err(Ignored::NotYourTurn(state.turn()))
        }
    }
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    #[instrument(skip(state))]
    pub fn check(state: &GameState, pos: Position) -> Result<(), Ignored> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Ignored::Occupied(pos))
        }
    }
}

/// Postcondition: exactly one square changed, from empty to the mover's mark.
fn single_placement(before: &GameState, after: &GameState) -> Result<(), EngineError> {
    let changed: Vec<(Square, Square)> = before
        .board()
        .squares()
        .iter()
        .zip(after.board().squares())
        .filter(|(b, a)| b != a)
        .map(|(b, a)| (*b, *a))
        .collect();

    match changed.as_slice() {
        [(Square::Empty, Square::Occupied(mark))] if *mark == before.turn().mark() => Ok(()),
        _ => Err(EngineError::new(format!(
            "Postcondition failed: expected one new {:?} mark, saw changes {:?}",
            before.turn().mark(),
            changed
        ))),
    }
}

fn invariants_hold(after: &GameState) -> Result<(), EngineError> {
    BoardInvariants::check_all(after)
        .map_err(|violations| EngineError::from_violations("Postcondition failed", &violations))
}

// ─────────────────────────────────────────────────────────────
//  Move Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a human move at a raw cell index.
///
/// Preconditions, in order:
/// - Index is in 0..=8
/// - Game is in progress
/// - It is the human's turn
/// - Square is empty
pub struct HumanMoveContract;

impl Contract<usize> for HumanMoveContract {
    type Checked = Position;

    fn pre(state: &GameState, index: &usize) -> Result<Position, Ignored> {
        let pos = CellInRange::check(*index)?;
        GameNotOver::check(state)?;
        TurnIs::check(state, Turn::HumanTurn)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(pos)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        single_placement(before, after)?;
        invariants_hold(after)
    }
}

/// Contract for a computer move.
///
/// Preconditions, in order:
/// - Game is in progress
/// - It is the computer's turn
pub struct ComputerMoveContract;

impl Contract<()> for ComputerMoveContract {
    type Checked = ();

    fn pre(state: &GameState, _action: &()) -> Result<(), Ignored> {
        GameNotOver::check(state)?;
        TurnIs::check(state, Turn::ComputerTurn)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        single_placement(before, after)?;
        invariants_hold(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert_eq!(HumanMoveContract::pre(&state, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_out_of_range() {
        let state = GameState::new();
        assert_eq!(HumanMoveContract::pre(&state, &9), Err(Ignored::OutOfRange(9)));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let state = GameState::from_parts(board, Turn::ComputerTurn).unwrap();
        assert_eq!(
            HumanMoveContract::pre(&state, &5),
            Err(Ignored::NotYourTurn(Turn::ComputerTurn))
        );
        assert_eq!(ComputerMoveContract::pre(&state, &()), Ok(()));
    }

    #[test]
    fn test_game_over_checked_before_turn() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let state = GameState::from_parts(board, Turn::ComputerTurn).unwrap();
        assert_eq!(HumanMoveContract::pre(&state, &8), Err(Ignored::GameOver));
        assert_eq!(ComputerMoveContract::pre(&state, &()), Err(Ignored::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before;
        after.apply_move(Position::Center);
        assert!(HumanMoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut board = *before.board();
        board.set(Position::TopLeft, Square::Occupied(Mark::Computer));
        let after = serde_json::from_value::<GameState>(serde_json::json!({
            "board": board,
            "turn": Turn::ComputerTurn,
        }))
        .unwrap();
        assert!(HumanMoveContract::post(&before, &after).is_err());
    }
}
