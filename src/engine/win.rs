//! Win detection.
//!
//! Checked after every single reveal. The announcement is delayed so the
//! last flip can finish, and fires at most once per board generation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use super::renderer::Renderer;
use super::scheduler::Scheduler;
use super::store::{Generation, ViewStore};

const LOG_TARGET: &str = "card_recall::engine::win";

#[derive(Debug, Default)]
struct WinState {
    /// Generation the announcement was scheduled for.
    armed_for: Option<Generation>,
    pending: Option<JoinHandle<()>>,
}

/// Schedules the win announcement.
#[derive(Debug)]
pub struct WinDetector<R> {
    renderer: Arc<R>,
    delay: Duration,
    state: Mutex<WinState>,
}

impl<R: Renderer> WinDetector<R> {
    #[must_use]
    pub fn new(renderer: Arc<R>, delay: Duration) -> Self {
        Self {
            renderer,
            delay,
            state: Mutex::new(WinState::default()),
        }
    }

    /// Schedule the announcement if every card is face-up.
    ///
    /// Returns true only on the call that scheduled it; repeated checks for
    /// the same board do nothing.
    pub fn check(&self, store: &ViewStore, scheduler: &Scheduler) -> bool {
        let (generation, progress) = store.generation_progress();
        if !progress.is_won() {
            return false;
        }
        let mut state = self.state.lock();
        if state.armed_for == Some(generation) {
            return false;
        }
        state.armed_for = Some(generation);

        info!(target: LOG_TARGET, %progress, "all cards revealed");
        let renderer = Arc::clone(&self.renderer);
        state.pending = Some(scheduler.schedule("announce-win", self.delay, move || {
            renderer.announce_win(progress);
        }));
        true
    }

    /// Was an announcement scheduled for `generation`?
    #[must_use]
    pub fn is_armed_for(&self, generation: Generation) -> bool {
        self.state.lock().armed_for == Some(generation)
    }

    /// Wait for a scheduled announcement to fire (or be abandoned).
    pub async fn settled(&self) {
        let pending = self.state.lock().pending.take();
        if let Some(handle) = pending {
            // Errs only if the renderer panicked.
            let _ = handle.await;
        }
    }
}
