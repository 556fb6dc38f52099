//! Comedy Battle - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use comedy_battle::cli::{Cli, Command};
use comedy_battle::{run_tui, GameConfig, Overrides};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
            locale,
            smart_probability,
        } => {
            let overrides = Overrides::new(seed, delay_ms, locale, smart_probability);
            let config = GameConfig::load_or_default(&config)?.with_overrides(&overrides)?;
            run_tui(config).await
        }
        Command::Config => {
            print!("{}", GameConfig::default().to_toml()?);
            Ok(())
        }
    }
}
