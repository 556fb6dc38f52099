//! Events feeding the main loop.

use super::ThinkRequest;
use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Everything the main loop reacts to.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard, mouse, or resize from the terminal.
    Input(Event),
    /// The thinking delay elapsed.
    ComputerReady(ThinkRequest),
    /// The terminal stopped delivering input; the session cannot continue.
    InputClosed,
}

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Forwards terminal events into `tx` from a blocking thread.
///
/// The thread exits once the receiver is dropped.
pub fn spawn_input_reader(tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        forward_events(&tx, || {
            if event::poll(POLL_INTERVAL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    })
}

/// Pumps `next` into `tx` until the receiver goes away or `next` fails.
///
/// `next` returns `Ok(None)` when nothing arrived within its poll window.
/// A failure is reported as [`AppEvent::InputClosed`] so the loop can shut
/// down even while other senders are alive.
pub(crate) fn forward_events<F>(tx: &UnboundedSender<AppEvent>, mut next: F)
where
    F: FnMut() -> io::Result<Option<Event>>,
{
    while !tx.is_closed() {
        match next() {
            Ok(None) => continue,
            Ok(Some(ev)) => {
                if tx.send(AppEvent::Input(ev)).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to read terminal event");
                let _ = tx.send(AppEvent::InputClosed);
                break;
            }
        }
    }
    debug!("Input reader stopped");
}
