//! Hit/miss feedback on the input field.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::renderer::{GuessField, Indicator};
use super::scheduler::Scheduler;

/// Flashes the indicator and hands focus back to the field.
#[derive(Debug)]
pub struct Feedback<F> {
    field: Arc<F>,
    revert_after: Duration,
    /// Bumped on every flash so stale reverts can tell they are stale.
    flashes: Arc<AtomicU64>,
}

impl<F: GuessField> Feedback<F> {
    #[must_use]
    pub fn new(field: Arc<F>, revert_after: Duration) -> Self {
        Self {
            field,
            revert_after,
            flashes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Show the result of a completed guess.
    ///
    /// A hit also clears the field. The indicator goes back to neutral after
    /// the revert delay unless another flash happened in between.
    pub fn flash(&self, hit: bool, scheduler: &Scheduler) {
        if hit {
            self.field.clear();
            self.field.set_indicator(Indicator::Hit);
        } else {
            self.field.set_indicator(Indicator::Miss);
        }

        let flash = self.flashes.fetch_add(1, Ordering::SeqCst) + 1;
        let flashes = Arc::clone(&self.flashes);
        let field = Arc::clone(&self.field);
        scheduler.schedule("feedback-revert", self.revert_after, move || {
            if flashes.load(Ordering::SeqCst) == flash {
                field.set_indicator(Indicator::Neutral);
            }
        });

        self.field.focus();
    }

    /// Drop any shown indicator and invalidate pending reverts.
    ///
    /// Used when the board is replaced, since the reverts of the old board
    /// are cancelled with it.
    pub fn reset(&self) {
        self.flashes.fetch_add(1, Ordering::SeqCst);
        self.field.set_indicator(Indicator::Neutral);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FieldEvent, RecordingField};

    #[tokio::test(start_paused = true)]
    async fn test_hit_clears_and_reverts() {
        let field = Arc::new(RecordingField::with_value("fireball"));
        let feedback = Feedback::new(Arc::clone(&field), Duration::from_millis(1000));

        feedback.flash(true, &Scheduler::new());
        assert_eq!(field.value(), "");
        assert_eq!(field.indicator(), Indicator::Hit);
        assert!(field.is_focused());

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(field.indicator(), Indicator::Hit);
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(field.indicator(), Indicator::Neutral);
    }

    #[tokio::test(start_paused = true)]
    async fn test_miss_keeps_text() {
        let field = Arc::new(RecordingField::with_value("fire"));
        let feedback = Feedback::new(Arc::clone(&field), Duration::from_millis(1000));

        feedback.flash(false, &Scheduler::new());
        assert_eq!(field.value(), "fire");
        assert_eq!(field.indicator(), Indicator::Miss);
        assert!(field.is_focused());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_flash_is_not_reverted_early() {
        let field = Arc::new(RecordingField::new());
        let feedback = Feedback::new(Arc::clone(&field), Duration::from_millis(1000));
        let scheduler = Scheduler::new();

        feedback.flash(false, &scheduler);
        tokio::time::sleep(Duration::from_millis(600)).await;
        feedback.flash(true, &scheduler);

        // The first flash's revert is due now but must not touch the second.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(field.indicator(), Indicator::Hit);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(field.indicator(), Indicator::Neutral);

        let indicators: Vec<_> = field
            .events()
            .into_iter()
            .filter_map(|e| match e {
                FieldEvent::Indicator(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(
            indicators,
            vec![Indicator::Miss, Indicator::Hit, Indicator::Neutral]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_indicator_and_stales_revert() {
        let field = Arc::new(RecordingField::new());
        let feedback = Feedback::new(Arc::clone(&field), Duration::from_millis(1000));
        let scheduler = Scheduler::new();

        feedback.flash(false, &scheduler);
        feedback.reset();
        assert_eq!(field.indicator(), Indicator::Neutral);

        // A flash after the reset must survive the earlier revert timer.
        tokio::time::sleep(Duration::from_millis(500)).await;
        feedback.flash(true, &scheduler);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(field.indicator(), Indicator::Hit);
    }
}
