//! Application state for one play session.

use crate::config::{ConfigError, GameConfig, Marks};
use crate::status::{Locale, StatusKey};
use battle_tictactoe::{
    apply_computer_move, apply_human_move, new_game, EngineError, GameRng, GameState,
    MediumPolicy, MoveResult, Position, RandomSource, Turn,
};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

/// Asks the driver to let the computer move after the thinking delay.
///
/// Carries the generation it was issued for so a reply that arrives after
/// a restart can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ThinkRequest {
    /// Generation of the game that asked for the move.
    pub game_id: u64,
}

/// Session state: the game, the opponent, and what the screen shows.
pub struct App {
    state: GameState,
    policy: MediumPolicy,
    rng: Box<dyn RandomSource + Send>,
    cursor: Position,
    game_id: u64,
    locale: Locale,
    marks: Marks,
    restarted: bool,
}

impl App {
    /// Creates an app with an explicit random source.
    pub fn new(
        policy: MediumPolicy,
        rng: Box<dyn RandomSource + Send>,
        locale: Locale,
        marks: Marks,
    ) -> Self {
        Self {
            state: new_game(),
            policy,
            rng,
            cursor: Position::Center,
            game_id: 0,
            locale,
            marks,
            restarted: false,
        }
    }

    /// Creates an app from configuration, seeding the RNG from the config
    /// or from entropy.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let policy = config.policy()?;
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        info!(
            seed = rng.seed(),
            smart_probability = policy.smart_probability(),
            "Opponent ready"
        );
        Ok(Self::new(
            policy,
            Box::new(rng),
            *config.locale(),
            config.marks(),
        ))
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current generation.
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// Display language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Board symbols.
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// True while the human may act on the board.
    pub fn input_enabled(&self) -> bool {
        !self.state.is_over() && self.state.turn() == Turn::HumanTurn
    }

    /// Localized status line.
    pub fn status(&self) -> &'static str {
        self.locale
            .message(StatusKey::for_game(&self.state, self.restarted))
    }

    /// Places the human's mark on `pos`.
    ///
    /// Returns a request for the computer's reply when the move landed and
    /// the game goes on. Ignored moves change nothing.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn select(&mut self, pos: Position) -> Option<ThinkRequest> {
        self.select_index(pos.to_index())
    }

    /// Places the human's mark on the cell with board index `index`.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn select_index(&mut self, index: usize) -> Option<ThinkRequest> {
        if !self.input_enabled() {
            debug!("Input disabled, selection dropped");
            return None;
        }

        match apply_human_move(&self.state, index) {
            MoveResult::Applied(next) => {
                self.state = next;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                if self.state.is_over() {
                    info!(outcome = %self.state.outcome(), "Game over");
                    None
                } else {
                    Some(ThinkRequest::new(self.game_id))
                }
            }
            MoveResult::Ignored(reason) => {
                debug!(%reason, "Selection ignored");
                None
            }
        }
    }

    /// Selects the cell under the cursor.
    pub fn select_cursor(&mut self) -> Option<ThinkRequest> {
        self.select(self.cursor)
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = super::input::move_cursor(self.cursor, key);
    }

    /// Lets the computer move if `request` belongs to the current game.
    ///
    /// Returns `Ok(true)` when a move was applied. Stale requests and
    /// requests the engine ignores return `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`] from the engine.
    #[instrument(skip(self), fields(current = self.game_id))]
    pub fn computer_ready(&mut self, request: ThinkRequest) -> Result<bool, EngineError> {
        if request.game_id != self.game_id {
            debug!(stale = request.game_id, "Discarding stale computer move");
            return Ok(false);
        }

        match apply_computer_move(&self.state, &self.policy, &mut *self.rng)? {
            MoveResult::Applied(next) => {
                self.state = next;
                if self.state.is_over() {
                    info!(outcome = %self.state.outcome(), "Game over");
                }
                Ok(true)
            }
            MoveResult::Ignored(reason) => {
                debug!(%reason, "Computer move ignored");
                Ok(false)
            }
        }
    }

    /// Starts a new game and invalidates pending computer moves.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn restart(&mut self) {
        self.state = new_game();
        self.game_id += 1;
        self.restarted = true;
        self.cursor = Position::Center;
        info!(game_id = self.game_id, "Game restarted");
    }
}
