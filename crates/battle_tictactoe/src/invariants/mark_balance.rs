//! Mark balance invariant: the human is never behind, never two ahead.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: human marks minus computer marks is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let human = state.board().count(Mark::Human);
        let computer = state.board().count(Mark::Computer);
        human == computer || human == computer + 1
    }

    fn description() -> &'static str {
        "Human marks lead computer marks by 0 or 1"
    }
}
