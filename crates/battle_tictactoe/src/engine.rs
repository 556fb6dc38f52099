//! Move application: the engine's state machine.
//!
//! States are `{HumanTurn, ComputerTurn} × {InProgress, Terminal}`. The
//! only transitions are [`apply_human_move`] and [`apply_computer_move`],
//! and the only way out of a terminal state is [`new_game`].

use super::action::{Ignored, MoveResult};
use super::ai::{choose_computer_move, MediumPolicy};
use super::contracts::{ComputerMoveContract, Contract, HumanMoveContract};
use super::error::EngineError;
use super::rng::RandomSource;
use super::GameState;
use tracing::{debug, error, info, instrument};

/// Creates a fresh game: empty board, human to move, in progress.
#[instrument]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Applies a human move at `index` (0-8, row-major).
///
/// Requests that break a precondition (off-board index, game over, not the
/// human's turn, occupied square) come back as [`MoveResult::Ignored`] and
/// leave the state untouched. So does a move on a state that was already
/// inconsistent, reported as [`Ignored::BrokenInvariant`].
#[instrument(skip(state), fields(turn = ?state.turn()))]
pub fn apply_human_move(state: &GameState, index: usize) -> MoveResult {
    let pos = match HumanMoveContract::pre(state, &index) {
        Ok(pos) => pos,
        Err(reason) => {
            debug!(%reason, "Human move ignored");
            return MoveResult::Ignored(reason);
        }
    };

    let mut next = *state;
    next.apply_move(pos);

    if let Err(e) = HumanMoveContract::post(state, &next) {
        error!(error = %e, "Human move broke an invariant");
        return MoveResult::Ignored(Ignored::BrokenInvariant);
    }

    info!(position = %pos, outcome = %next.outcome(), "Human moved");
    MoveResult::Applied(next)
}

/// Lets the computer pick and play a square.
///
/// Returns [`MoveResult::Ignored`] when the game is over or it is not the
/// computer's turn.
///
/// # Errors
///
/// Returns [`EngineError`] if the board has no empty square while the game
/// claims to be in progress, or if the move would break an invariant. Both
/// indicate a caller bug rather than a game condition.
#[instrument(skip(state, policy, rng), fields(turn = ?state.turn()))]
pub fn apply_computer_move<R: RandomSource + ?Sized>(
    state: &GameState,
    policy: &MediumPolicy,
    rng: &mut R,
) -> Result<MoveResult, EngineError> {
    if let Err(reason) = ComputerMoveContract::pre(state, &()) {
        debug!(%reason, "Computer move ignored");
        return Ok(MoveResult::Ignored(reason));
    }

    let pos = choose_computer_move(state.board(), policy, rng)
        .ok_or_else(|| EngineError::new("Computer asked to move on a full board"))?;

    let mut next = *state;
    next.apply_move(pos);
    ComputerMoveContract::post(state, &next)?;

    info!(position = %pos, outcome = %next.outcome(), "Computer moved");
    Ok(MoveResult::Applied(next))
}
