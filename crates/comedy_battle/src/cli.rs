//! Command-line interface for comedy_battle.

use crate::status::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Comedy Battle - tic-tac-toe against a medium-difficulty computer
#[derive(Parser, Debug)]
#[command(name = "comedy_battle")]
#[command(about = "Terminal tic-tac-toe against Tatya Vinchu", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to the TOML config file (defaults are used if it is missing)
        #[arg(short, long, default_value = "comedy_battle.toml")]
        config: PathBuf,

        /// Seed for the computer's random choices (replays a session)
        #[arg(long)]
        seed: Option<u64>,

        /// Thinking delay before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Language for status messages
        #[arg(long, value_enum)]
        locale: Option<Locale>,

        /// Chance (0.0-1.0) that the computer plays smart on a move
        #[arg(long)]
        smart_probability: Option<f64>,
    },

    /// Print the default configuration as TOML
    Config,
}
