//! Medium-difficulty move selection.
//!
//! Each turn the computer first decides whether to play smart. In smart
//! mode it takes an immediate win, otherwise blocks the human's immediate
//! win, otherwise takes the center. Anything left over, and every turn in
//! random mode, is a uniform pick among the empty squares. The random mode
//! is how the opponent makes mistakes.

use crate::rng::RandomSource;
use crate::{Board, Mark, Position, LINES};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which branch the policy took for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Win, block, center, then random.
    Smart,
    /// Uniform pick among empty squares.
    Random,
}

/// Error returned for a smart-mode probability outside 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
#[display("Smart probability must be within 0.0..=1.0, got {}", _0)]
pub struct InvalidProbability(pub f64);

impl std::error::Error for InvalidProbability {}

/// The medium-difficulty policy.
///
/// Only [`MediumPolicy::new`] builds one, so the probability is always
/// within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MediumPolicy {
    smart_probability: f64,
}

impl MediumPolicy {
    /// Chance of playing smart on any given move.
    pub const DEFAULT_SMART_PROBABILITY: f64 = 0.7;

    /// Creates a policy that plays smart with the given probability.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidProbability`] unless `smart_probability` is a
    /// number within 0.0..=1.0.
    pub fn new(smart_probability: f64) -> Result<Self, InvalidProbability> {
        if (0.0..=1.0).contains(&smart_probability) {
            Ok(Self { smart_probability })
        } else {
            Err(InvalidProbability(smart_probability))
        }
    }

    /// Chance of playing smart on any given move.
    pub fn smart_probability(&self) -> f64 {
        self.smart_probability
    }

    /// Draws the mode for one move.
    pub fn roll_mode<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Mode {
        if rng.roll(self.smart_probability) {
            Mode::Smart
        } else {
            Mode::Random
        }
    }
}

impl Default for MediumPolicy {
    fn default() -> Self {
        Self {
            smart_probability: Self::DEFAULT_SMART_PROBABILITY,
        }
    }
}

/// Picks the computer's next square.
///
/// The mode is drawn before anything else, then smart mode tries
/// [`smart_move`] and everything else falls back to a uniform pick.
/// Returns `None` only when the board is full.
#[instrument(skip(board, policy, rng))]
pub fn choose_computer_move<R: RandomSource + ?Sized>(
    board: &Board,
    policy: &MediumPolicy,
    rng: &mut R,
) -> Option<Position> {
    let mode = policy.roll_mode(rng);
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    if mode == Mode::Smart
        && let Some(pos) = smart_move(board)
    {
        debug!(?mode, position = %pos, "Computer chose deliberately");
        return Some(pos);
    }

    let pos = empty[rng.pick_index(empty.len())];
    debug!(?mode, position = %pos, "Computer chose at random");
    Some(pos)
}

/// The smart-mode choice: win now, else block, else center.
///
/// Returns `None` when none of the three applies.
pub fn smart_move(board: &Board) -> Option<Position> {
    completing_square(board, Mark::Computer)
        .or_else(|| completing_square(board, Mark::Human))
        .or_else(|| board.is_empty(Position::Center).then_some(Position::Center))
}

/// First empty square, in line scan order, that gives `mark` three in a row.
pub fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| line.completion(board, mark))
}
