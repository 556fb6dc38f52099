//! Battle tic-tac-toe engine.
//!
//! Pure game-resolution logic for a single human playing against a
//! medium-difficulty computer opponent.
//!
//! # Architecture
//!
//! - **Types**: board, marks, turn and the [`GameState`] value
//! - **Rules**: the eight winning [`Line`]s and [`detect_outcome`]
//! - **Engine**: [`new_game`], [`apply_human_move`], [`apply_computer_move`]
//! - **AI**: the [`MediumPolicy`] heuristic behind [`choose_computer_move`]
//! - **Randomness**: the injectable [`RandomSource`] and seedable [`GameRng`]
//!
//! The engine keeps no state of its own. Every operation takes a
//! [`GameState`] by reference and hands back a new value, so the same
//! functions can drive any number of independent games.
//!
//! # Example
//!
//! ```
//! use battle_tictactoe::{
//!     apply_computer_move, apply_human_move, new_game, GameRng, MediumPolicy, MoveResult, Turn,
//! };
//!
//! let state = new_game();
//! let MoveResult::Applied(state) = apply_human_move(&state, 4) else {
//!     panic!("opening move is always legal");
//! };
//! assert_eq!(state.turn(), Turn::ComputerTurn);
//!
//! let mut rng = GameRng::new(7);
//! let result = apply_computer_move(&state, &MediumPolicy::default(), &mut rng).unwrap();
//! assert_eq!(result.state().map(|s| s.turn()), Some(Turn::HumanTurn));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod contracts;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod rng;
mod types;

pub use action::{Ignored, MoveResult};
pub use ai::{choose_computer_move, completing_square, smart_move, InvalidProbability, MediumPolicy, Mode};
pub use contracts::{ComputerMoveContract, Contract, HumanMoveContract};
pub use engine::{apply_computer_move, apply_human_move, new_game};
pub use error::EngineError;
pub use position::Position;
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use rules::{detect_outcome, Line, Outcome, LINES};
pub use types::{Board, BoardParseError, GameState, Mark, Square, Turn};
