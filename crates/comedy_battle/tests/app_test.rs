//! Session flow through the app, the thinking timer, and the event channel.

use battle_tictactoe::{GameRng, Mark, MediumPolicy, Position, ScriptedRandom, Square};
use comedy_battle::{App, AppEvent, GameConfig, Locale, Marks, Overrides, ThinkingTimer};
use std::time::Duration;
use tokio::sync::mpsc;

const DELAY: Duration = Duration::from_millis(700);

fn smart_app() -> App {
    App::new(
        MediumPolicy::default(),
        Box::new(ScriptedRandom::always_smart()),
        Locale::English,
        Marks::default(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_computer_replies_after_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = ThinkingTimer::new(tx, DELAY);
    let mut app = smart_app();

    let request = app.select(Position::TopLeft).expect("move accepted");
    timer.schedule(request);
    assert!(!app.input_enabled());

    let Some(AppEvent::ComputerReady(ready)) = rx.recv().await else {
        panic!("expected ComputerReady");
    };
    assert!(app.computer_ready(ready).unwrap());
    assert_eq!(
        app.state().board().get(Position::Center),
        Square::Occupied(Mark::Computer)
    );
    assert!(app.input_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_restart_during_delay_never_applies_old_move() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = ThinkingTimer::new(tx, DELAY);
    let mut app = smart_app();

    let request = app.select(Position::TopLeft).unwrap();
    timer.schedule(request);
    tokio::time::advance(DELAY / 2).await;

    timer.cancel();
    app.restart();

    let waited = tokio::time::timeout(DELAY * 2, rx.recv()).await;
    assert!(waited.is_err());
    assert!(app.state().board().empty_positions().len() == 9);
    assert!(app.input_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_in_flight_move_from_old_game_is_discarded() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = ThinkingTimer::new(tx, DELAY);
    let mut app = smart_app();

    let request = app.select(Position::TopLeft).unwrap();
    timer.schedule(request);
    let Some(AppEvent::ComputerReady(ready)) = rx.recv().await else {
        panic!("expected ComputerReady");
    };

    // The event is already queued when the player restarts.
    app.restart();
    assert!(!app.computer_ready(ready).unwrap());
    assert_eq!(app.state().board().empty_positions().len(), 9);
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let config = GameConfig::default()
        .with_overrides(&Overrides::new(Some(99), None, Some(Locale::English), None))
        .unwrap();

    let play = |mut app: App| {
        for index in 0..9 {
            if let Some(request) = app.select_index(index) {
                app.computer_ready(request).unwrap();
            }
        }
        *app.state()
    };

    let first = play(App::from_config(&config).unwrap());
    let second = play(App::from_config(&config).unwrap());
    assert_eq!(first, second);
    assert!(first.is_over());
}

#[test]
fn test_random_mode_uses_injected_rng() {
    let mut app = App::new(
        MediumPolicy::new(0.0).unwrap(),
        Box::new(GameRng::new(5)),
        Locale::Marathi,
        Marks::default(),
    );
    let request = app.select(Position::Center).unwrap();
    assert!(app.computer_ready(request).unwrap());
    assert_eq!(app.state().board().count(Mark::Computer), 1);
}
