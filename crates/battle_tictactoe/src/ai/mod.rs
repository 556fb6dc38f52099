//! Computer opponent.

mod medium;

pub use medium::{choose_computer_move, completing_square, smart_move, InvalidProbability, MediumPolicy, Mode};
