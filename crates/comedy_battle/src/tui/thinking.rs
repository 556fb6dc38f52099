//! The computer's "thinking" pause.

use super::{AppEvent, ThinkRequest};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Delivers [`AppEvent::ComputerReady`] after a fixed delay.
///
/// Holds at most one pending request. Scheduling again or cancelling
/// aborts the task that is waiting.
#[derive(Debug)]
pub struct ThinkingTimer {
    tx: UnboundedSender<AppEvent>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ThinkingTimer {
    /// Creates a timer that sends into `tx`.
    pub fn new(tx: UnboundedSender<AppEvent>, delay: Duration) -> Self {
        Self {
            tx,
            delay,
            pending: None,
        }
    }

    /// Sends `request` back after the delay, replacing any pending one.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, request: ThinkRequest) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(AppEvent::ComputerReady(request)).is_err() {
                debug!("Event loop gone, dropping computer move");
            }
        }));
    }

    /// Aborts the pending request, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("Thinking cancelled");
        }
    }

    /// True while a request is waiting to be sent.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ThinkingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
