//! Single winner invariant: at most one side can own a completed line.

use super::Invariant;
use crate::{GameState, Mark, LINES};

/// Invariant: completed lines never belong to both marks at once.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let owners: Vec<Mark> = LINES
            .iter()
            .filter_map(|line| line.owner(state.board()))
            .collect();
        !(owners.contains(&Mark::Human) && owners.contains(&Mark::Computer))
    }

    fn description() -> &'static str {
        "At most one side has three in a row"
    }
}
