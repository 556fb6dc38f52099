//! Comedy Battle - tic-tac-toe against Tatya Vinchu in the terminal.
//!
//! This crate is the front end around [`battle_tictactoe`]: it owns the
//! single [`battle_tictactoe::GameState`] of a session, renders it with
//! ratatui, and schedules the computer's reply behind a cancellable
//! "thinking" delay.
//!
//! # Architecture
//!
//! - **CLI**: `play` and `config` subcommands
//! - **Config**: TOML file with per-field defaults, overridable from the CLI
//! - **Status**: localized status messages (Marathi and English)
//! - **TUI**: app state, input mapping, rendering, thinking timer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod status;
pub mod tui;

pub use config::{ConfigError, GameConfig, Marks, Overrides};
pub use status::{Locale, StatusKey};
pub use tui::{run_tui, App, AppEvent, ThinkRequest, ThinkingTimer};
