//! Localized status messages.
//!
//! The engine knows nothing about text. The status line is derived from
//! the game state each frame and rendered in the configured language.

use battle_tictactoe::{GameState, Outcome, Turn};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Language for on-screen text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// मराठी
    #[default]
    Marathi,
    /// English
    English,
}

/// Which status message to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKey {
    /// First game of the session, human to move.
    Welcome,
    /// A fresh board after a restart.
    Restarted,
    /// Human to move in a game already under way.
    YourMove,
    /// Waiting for the computer.
    Thinking,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// Full board, no line.
    Draw,
}

impl StatusKey {
    /// Derives the status for `state`.
    ///
    /// `restarted` tells an empty board after a restart apart from the
    /// first game of the session.
    #[instrument(level = "trace", skip(state))]
    pub fn for_game(state: &GameState, restarted: bool) -> Self {
        match state.outcome() {
            Outcome::HumanWin(_) => StatusKey::HumanWon,
            Outcome::ComputerWin(_) => StatusKey::ComputerWon,
            Outcome::Draw => StatusKey::Draw,
            Outcome::InProgress => match state.turn() {
                Turn::ComputerTurn => StatusKey::Thinking,
                Turn::HumanTurn if state.board().empty_positions().len() < 9 => {
                    StatusKey::YourMove
                }
                Turn::HumanTurn if restarted => StatusKey::Restarted,
                Turn::HumanTurn => StatusKey::Welcome,
            },
        }
    }
}

impl Locale {
    /// Status line text.
    pub fn message(self, key: StatusKey) -> &'static str {
        match (self, key) {
            (Locale::Marathi, StatusKey::Welcome) => "तुमची वेळ आहे, खेळा! 🎭",
            (Locale::Marathi, StatusKey::Restarted) => "चला, पुन्हा सुरुवात करूया! 🎭",
            (Locale::Marathi, StatusKey::YourMove) => "तुमची चाल खेळा! 🎭",
            (Locale::Marathi, StatusKey::Thinking) => "तात्या विंचू विचार करतोय...",
            (Locale::Marathi, StatusKey::HumanWon) => "🔥 कडक! तुम्ही जिंकलात! 🏆",
            (Locale::Marathi, StatusKey::ComputerWon) => "💀 ओम फट स्वाहा! तुम्ही हारलात! 👹",
            (Locale::Marathi, StatusKey::Draw) => "🤝 सामना बरोबरीत! पुन्हा खेळा?",
            (Locale::English, StatusKey::Welcome) => "Your turn, go ahead!",
            (Locale::English, StatusKey::Restarted) => "Let's start again!",
            (Locale::English, StatusKey::YourMove) => "Your move!",
            (Locale::English, StatusKey::Thinking) => "Tatya Vinchu is thinking...",
            (Locale::English, StatusKey::HumanWon) => "Brilliant! You won!",
            (Locale::English, StatusKey::ComputerWon) => "Om Phat Swaha! You lost!",
            (Locale::English, StatusKey::Draw) => "It's a draw! Play again?",
        }
    }

    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            Locale::Marathi => "कॉमेडी बॅटल",
            Locale::English => "Comedy Battle",
        }
    }

    /// Key help line.
    pub fn help(self) -> &'static str {
        match self {
            Locale::Marathi => "1-9 / बाण + Enter / माउस: चाल | R: नवीन गेम | Q: बाहेर",
            Locale::English => "1-9 / arrows + Enter / mouse: move | R: new game | Q: quit",
        }
    }
}
