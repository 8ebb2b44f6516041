//! Discussion countdown timer
//!
//! [`DiscussionTimer`] runs the timed discussion window that opens after a
//! divergent round. It spawns a tokio task ticking once per second and
//! delivers [`TimerEvent`]s through a channel owned by the active
//! discussion. Dropping the handle (or calling [`DiscussionTimer::cancel`])
//! stops the task; a countdown that was cancelled never reports `Elapsed`.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One step of a running countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Seconds left on the clock, counting down to and including 0
    Tick(u64),
    /// The window is over; emitted exactly once, after `Tick(0)`
    Elapsed,
}

/// Handle to a running discussion countdown
///
/// The countdown starts immediately with `Tick(duration)` and ends with
/// `Tick(0)` followed by `Elapsed`. At most one timer should be live per
/// session; replacing the handle cancels the superseded countdown.
pub struct DiscussionTimer {
    token: CancellationToken,
}

impl DiscussionTimer {
    /// Start a countdown of `duration_seconds`.
    ///
    /// Returns the cancellation handle and the receiving end of the event
    /// channel. When the receiver is dropped the task stops on its own.
    pub fn start(duration_seconds: u64) -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let token = CancellationToken::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let task_token = token.clone();
        tokio::spawn(async move {
            Self::run(duration_seconds, tx, task_token).await;
        });
        (Self { token }, rx)
    }

    /// Stop the countdown.
    ///
    /// Ticks already queued may still be read, but `Elapsed` is never
    /// delivered after this returns.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    async fn run(
        duration_seconds: u64,
        tx: mpsc::UnboundedSender<TimerEvent>,
        token: CancellationToken,
    ) {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        let mut remaining = duration_seconds;
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("discussion timer cancelled with {}s remaining", remaining);
                    return;
                }
                _ = interval.tick() => {}
            }
            if tx.send(TimerEvent::Tick(remaining)).is_err() {
                return;
            }
            if remaining == 0 {
                let _ = tx.send(TimerEvent::Elapsed);
                return;
            }
            remaining -= 1;
        }
    }
}

impl Drop for DiscussionTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
