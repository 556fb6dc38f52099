//! Terminal UI for Comedy Battle.

mod app;
mod events;
mod input;
mod thinking;
mod ui;

pub use app::{App, ThinkRequest};
pub use events::AppEvent;
pub use input::{action_for, cell_at, move_cursor, Action};
pub use thinking::ThinkingTimer;
pub use ui::{board_cells, draw};

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Runs an interactive session until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    init_tracing(config.log_file())?;
    info!("Starting Comedy Battle TUI");

    let mut app = App::from_config(&config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Session ended with error");
    }
    info!("Comedy Battle TUI stopped");
    result
}

/// Sends tracing output to `log_file` so it never lands on the screen.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,battle_tictactoe=debug,comedy_battle=debug")
            }),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    config: &GameConfig,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _reader = events::spawn_input_reader(tx.clone());
    let mut timer = ThinkingTimer::new(tx, config.thinking_delay());

    loop {
        let mut cells = [Rect::default(); 9];
        terminal.draw(|frame| {
            cells = ui::draw(frame, app);
        })?;

        let Some(event) = rx.recv().await else {
            debug!("Event channel closed");
            break;
        };

        if handle_event(app, &mut timer, event, &cells)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Applies one event to the app. `cells` are the board cells of the last
/// frame, for mouse hit-testing.
fn handle_event(
    app: &mut App,
    timer: &mut ThinkingTimer,
    event: AppEvent,
    cells: &[Rect; 9],
) -> Result<Flow> {
    match event {
        AppEvent::Input(ev) => match input::action_for(&ev, cells) {
            Some(Action::Quit) => {
                info!("Quit requested");
                return Ok(Flow::Quit);
            }
            Some(Action::Restart) => {
                timer.cancel();
                app.restart();
            }
            Some(Action::Select(pos)) => {
                if let Some(request) = app.select(pos) {
                    timer.schedule(request);
                }
            }
            Some(Action::SelectCursor) => {
                if let Some(request) = app.select_cursor() {
                    timer.schedule(request);
                }
            }
            Some(Action::MoveCursor(key)) => app.move_cursor(key),
            None => {}
        },
        AppEvent::ComputerReady(request) => {
            app.computer_ready(request)?;
        }
        AppEvent::InputClosed => {
            timer.cancel();
            anyhow::bail!("Terminal input closed");
        }
    }
    Ok(Flow::Continue)
}
