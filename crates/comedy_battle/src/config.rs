//! Game configuration loaded from TOML.

use crate::status::Locale;
use battle_tictactoe::MediumPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Chance (0.0-1.0) that the computer plays smart on a move.
    #[serde(default = "default_smart_probability")]
    smart_probability: f64,

    /// Language for status messages.
    #[serde(default)]
    locale: Locale,

    /// Symbol drawn for the human's marks.
    #[serde(default = "default_human_mark")]
    human_mark: String,

    /// Symbol drawn for the computer's marks.
    #[serde(default = "default_computer_mark")]
    computer_mark: String,

    /// File receiving tracing output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Fixed seed for the computer's random choices; fresh when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

fn default_thinking_delay_ms() -> u64 {
    700
}

fn default_smart_probability() -> f64 {
    MediumPolicy::DEFAULT_SMART_PROBABILITY
}

fn default_human_mark() -> String {
    "X".to_string()
}

fn default_computer_mark() -> String {
    "O".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("comedy_battle.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            smart_probability: default_smart_probability(),
            locale: Locale::default(),
            human_mark: default_human_mark(),
            computer_mark: default_computer_mark(),
            log_file: default_log_file(),
            seed: None,
        }
    }
}

/// Values given on the command line, each replacing the file's setting.
#[derive(Debug, Clone, Default, PartialEq, derive_new::new)]
pub struct Overrides {
    /// Replacement seed.
    pub seed: Option<u64>,
    /// Replacement thinking delay in milliseconds.
    pub thinking_delay_ms: Option<u64>,
    /// Replacement locale.
    pub locale: Option<Locale>,
    /// Replacement smart-mode probability.
    pub smart_probability: Option<f64>,
}

/// The two symbols drawn on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marks {
    /// Symbol for the human.
    pub human: String,
    /// Symbol for the computer.
    pub computer: String,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            human: default_human_mark(),
            computer: default_computer_mark(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(locale = %config.locale, delay_ms = config.thinking_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(delay) = overrides.thinking_delay_ms {
            self.thinking_delay_ms = delay;
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(p) = overrides.smart_probability {
            self.smart_probability = p;
        }
        self.validate()?;
        Ok(self)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// The computer's move policy.
    pub fn policy(&self) -> Result<MediumPolicy, ConfigError> {
        MediumPolicy::new(self.smart_probability).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// The thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// The symbols drawn on the board.
    pub fn marks(&self) -> Marks {
        Marks {
            human: self.human_mark.clone(),
            computer: self.computer_mark.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.policy()?;
        if self.human_mark.trim().is_empty() || self.computer_mark.trim().is_empty() {
            return Err(ConfigError::new("Marks must not be blank".to_string()));
        }
        if self.human_mark == self.computer_mark {
            return Err(ConfigError::new(format!(
                "Human and computer marks must differ (both {:?})",
                self.human_mark
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
