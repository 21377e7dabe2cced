//! Cancellable timers for one play session.
//!
//! Every timed wait in the engine (flip delay, scroll settle, stagger,
//! feedback revert, win announcement) goes through a `Scheduler`. Loading a
//! new board cancels the session's scheduler, which abandons all of them.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Spawn a Tokio task inside a trace span carrying its name.
pub fn spawn_named_task<F, S>(name: S, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
    S: Into<String>,
{
    let name_owned = name.into();
    let span = tracing::info_span!("task", task_name = %name_owned);
    tokio::spawn(future.instrument(span))
}

/// Session timer source.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    token: CancellationToken,
}

impl Scheduler {
    /// Create a live scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Abandon every pending and future wait.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Sleep for `delay`. Returns false if the session was cancelled first.
    pub async fn wait(&self, delay: Duration) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => false,
            _ = tokio::time::sleep(delay) => true,
        }
    }

    /// Run `action` after `delay` on a background task, unless cancelled.
    pub fn schedule<F>(&self, name: &str, delay: Duration, action: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let scheduler = self.clone();
        spawn_named_task(name, async move {
            if scheduler.wait(delay).await {
                action();
            }
        })
    }
}
