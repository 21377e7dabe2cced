//! The guess engine.
//!
//! `GuessEngine` ties the pieces together: it normalizes input, matches it
//! against the board, sequences the reveals, and flashes feedback. One
//! engine serves one board at a time; `load` swaps in a new board and starts
//! a fresh game.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::feedback::Feedback;
use super::matching::match_guess;
use super::normalize::GuessKey;
use super::renderer::{GuessField, Renderer};
use super::scheduler::Scheduler;
use super::sequencer::RevealSequencer;
use super::store::{Generation, Progress, ViewStore};
use super::win::WinDetector;
use crate::cards::{CardView, ViewId};
use crate::core::config::EngineConfig;

const LOG_TARGET: &str = "card_recall::engine";

/// Result of one guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Nothing usable was typed. No feedback was shown.
    Ignored,

    /// No hidden card has that name.
    Miss { guess: String },

    /// These cards were flipped, in order.
    Hit { guess: String, revealed: Vec<ViewId> },
}

impl GuessOutcome {
    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessOutcome::Hit { .. })
    }

    /// Cards flipped by this guess.
    #[must_use]
    pub fn revealed(&self) -> &[ViewId] {
        match self {
            GuessOutcome::Hit { revealed, .. } => revealed,
            _ => &[],
        }
    }
}

/// What happened to a key press in the input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyResponse {
    /// Not the submit key; the front end keeps its default behavior.
    Ignored,

    /// The submit key ran a guess.
    Submitted(GuessOutcome),
}

impl KeyResponse {
    /// Must the front end suppress the key's default action?
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyResponse::Submitted(_))
    }
}

#[derive(Debug)]
struct Session {
    generation: Generation,
    scheduler: Scheduler,
}

/// Guessing/reveal engine over an injectable store and front end.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use card_recall::cards::{CardView, ViewId};
/// use card_recall::core::EngineConfig;
/// use card_recall::engine::{GuessEngine, ViewStore};
/// use card_recall::testing::{RecordingField, RecordingRenderer};
///
/// # async fn demo() {
/// let store = ViewStore::new(vec![CardView::new(ViewId::new(0), "Yogg-Saron", "Core")]);
/// let engine = GuessEngine::new(
///     EngineConfig::default(),
///     store,
///     Arc::new(RecordingRenderer::new()),
///     Arc::new(RecordingField::new()),
/// );
///
/// let outcome = engine.guess("yogg saron").await;
/// assert!(outcome.is_hit());
/// assert!(engine.progress().is_won());
/// # }
/// ```
pub struct GuessEngine<R, F> {
    config: EngineConfig,
    store: ViewStore,
    renderer: Arc<R>,
    field: Arc<F>,
    win: WinDetector<R>,
    feedback: Feedback<F>,
    session: Mutex<Session>,
}

impl<R: Renderer, F: GuessField> GuessEngine<R, F> {
    /// Create an engine for the board already in `store`.
    pub fn new(config: EngineConfig, store: ViewStore, renderer: Arc<R>, field: Arc<F>) -> Self {
        let win = WinDetector::new(Arc::clone(&renderer), config.timings.win_delay());
        let feedback = Feedback::new(Arc::clone(&field), config.timings.feedback_revert());
        let session = Session {
            generation: store.generation(),
            scheduler: Scheduler::new(),
        };
        Self {
            config,
            store,
            renderer,
            field,
            win,
            feedback,
            session: Mutex::new(session),
        }
    }

    /// Replace the board and start a fresh game.
    ///
    /// Pending timers of the previous board (reveal waits, feedback revert,
    /// win announcement) are abandoned and the indicator goes back to
    /// neutral.
    pub fn load(&self, views: Vec<CardView>) -> Generation {
        let mut session = self.session.lock();
        session.scheduler.cancel();
        self.feedback.reset();
        let generation = self.store.replace(views);
        *session = Session {
            generation,
            scheduler: Scheduler::new(),
        };
        info!(target: LOG_TARGET, cards = self.store.len(), "board loaded");
        generation
    }

    /// Run the full guess flow for `raw` input.
    pub async fn guess(&self, raw: &str) -> GuessOutcome {
        let Some(key) = GuessKey::parse(raw) else {
            debug!(target: LOG_TARGET, "empty guess ignored");
            return GuessOutcome::Ignored;
        };

        let (generation, scheduler) = {
            let session = self.session.lock();
            (session.generation, session.scheduler.clone())
        };

        let snapshot = self.store.snapshot();
        let matched = if snapshot.generation == generation {
            match_guess(&key, snapshot.views.iter())
        } else {
            Default::default()
        };
        debug!(target: LOG_TARGET, guess = %key, matches = matched.len(), "guess matched");

        let sequencer = RevealSequencer {
            store: &self.store,
            renderer: &self.renderer,
            win: &self.win,
            timings: &self.config.timings,
        };
        let revealed = sequencer.run(generation, &matched, &scheduler).await;

        let outcome = if revealed.is_empty() {
            GuessOutcome::Miss {
                guess: key.to_string(),
            }
        } else {
            GuessOutcome::Hit {
                guess: key.to_string(),
                revealed,
            }
        };

        if !scheduler.is_cancelled() {
            self.feedback.flash(outcome.is_hit(), &scheduler);
        }
        outcome
    }

    /// Guess whatever is in the input field (the submit control).
    pub async fn submit(&self) -> GuessOutcome {
        let raw = self.field.value();
        self.guess(&raw).await
    }

    /// Handle a key pressed while the input field has focus.
    pub async fn handle_key(&self, key: &str) -> KeyResponse {
        if key != self.config.submit_key {
            return KeyResponse::Ignored;
        }
        KeyResponse::Submitted(self.submit().await)
    }

    /// Revealed/total for the current board.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.store.progress()
    }

    /// The board store.
    #[must_use]
    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Wait until a scheduled win announcement has fired.
    pub async fn win_settled(&self) {
        self.win.settled().await;
    }
}
