//! Turn parity invariant: the turn follows from the mark counts.

use super::Invariant;
use crate::{GameState, Mark, Turn};

/// Invariant: it is the human's turn exactly when both sides have placed
/// the same number of marks.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let even = state.board().count(Mark::Human) == state.board().count(Mark::Computer);
        match state.turn() {
            Turn::HumanTurn => even,
            Turn::ComputerTurn => !even,
        }
    }

    fn description() -> &'static str {
        "Turn matches mark counts (human moves on equal counts)"
    }
}
