//! Reveal sequencing.
//!
//! Matched cards are revealed one at a time, in display order. Each reveal
//! scrolls (if needed), waits, flips, marks the card face-up, checks for a
//! win, and pauses before the next one. Nothing here runs in parallel.

use std::sync::Arc;

use tracing::debug;

use super::renderer::Renderer;
use super::scheduler::Scheduler;
use super::store::{Generation, ViewStore};
use super::win::WinDetector;
use crate::cards::ViewId;
use crate::core::config::Timings;

const LOG_TARGET: &str = "card_recall::engine::sequencer";

/// Drives the scroll/flip animation for one guess.
pub struct RevealSequencer<'a, R> {
    pub store: &'a ViewStore,
    pub renderer: &'a Arc<R>,
    pub win: &'a WinDetector<R>,
    pub timings: &'a Timings,
}

impl<R: Renderer> RevealSequencer<'_, R> {
    /// Reveal `matched` in order. Returns the ids actually flipped.
    ///
    /// Views claimed by a concurrent guess are skipped. If the session is
    /// cancelled mid-sequence, the sequence stops where it is.
    pub async fn run(
        &self,
        generation: Generation,
        matched: &[ViewId],
        scheduler: &Scheduler,
    ) -> Vec<ViewId> {
        let mut revealed = Vec::with_capacity(matched.len());

        for &id in matched {
            let Some(view) = self.store.claim(generation, id) else {
                debug!(target: LOG_TARGET, %id, "view already taken, skipping");
                continue;
            };

            let settled = if self.renderer.is_in_viewport(&view) {
                scheduler.wait(self.timings.visible_flip_delay()).await
            } else {
                debug!(target: LOG_TARGET, %id, set = %view.set_name, "scrolling to view");
                self.renderer.scroll_into_view(&view);
                scheduler.wait(self.timings.scroll_settle()).await
            };
            if !settled {
                self.store.release(generation, id);
                break;
            }

            self.renderer.play_flip(&view);
            if !self.store.mark_revealed(generation, id) {
                break;
            }
            debug!(target: LOG_TARGET, %id, name = %view.display_name, "revealed");
            revealed.push(id);

            self.win.check(self.store, scheduler);

            if !scheduler.wait(self.timings.reveal_stagger()).await {
                break;
            }
        }

        revealed
    }
}
