//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine, the AI and the invariants can share them.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{detect_outcome, Outcome};
pub use win::{winning_line, Line, LINES};
