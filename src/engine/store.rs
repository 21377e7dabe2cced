//! Shared board state.
//!
//! `ViewStore` owns the rendered card views for one play session. Matching
//! reads snapshots of it, the sequencer claims and reveals views through it,
//! and the win detector asks it for progress. Every method takes the lock
//! once, so a claim or a reveal of one view is atomic.

use std::sync::Arc;

use im::Vector;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::cards::{CardView, ViewId};

/// Identifies one set of views. Bumped whenever the board is replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation(pub u64);

/// Revealed vs. total count for the current board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub revealed: usize,
    pub total: usize,
}

impl Progress {
    /// All cards revealed, and there was at least one card.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.total > 0 && self.revealed == self.total
    }

    /// Cards still face-down.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.revealed
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.revealed, self.total)
    }
}

/// A consistent copy of the board.
///
/// Cloning the views is O(1) thanks to `im::Vector`.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub generation: Generation,
    pub views: Vector<CardView>,
}

#[derive(Debug, Default)]
struct StoreInner {
    views: Vector<CardView>,
    /// Views a running reveal sequence has taken ownership of.
    claimed: FxHashSet<ViewId>,
    generation: Generation,
    revealed: usize,
}

/// Injectable, shareable board store.
#[derive(Clone, Debug, Default)]
pub struct ViewStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ViewStore {
    /// Create a store holding `views`.
    ///
    /// View ids must match positions, as `build_view` assigns them.
    #[must_use]
    pub fn new(views: Vec<CardView>) -> Self {
        let store = Self::default();
        store.replace(views);
        store
    }

    /// Swap in a new board and start a new generation.
    ///
    /// Claims from the previous board are dropped; sequences still running
    /// against the old generation can no longer claim or reveal anything.
    pub fn replace(&self, views: Vec<CardView>) -> Generation {
        debug_assert!(views
            .iter()
            .enumerate()
            .all(|(idx, v)| v.id.index() == idx));
        let mut inner = self.inner.lock();
        inner.revealed = views.iter().filter(|v| v.revealed).count();
        inner.views = views.into_iter().collect();
        inner.claimed.clear();
        inner.generation = Generation(inner.generation.0 + 1);
        inner.generation
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.inner.lock().generation
    }

    /// Copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        Snapshot {
            generation: inner.generation,
            views: inner.views.clone(),
        }
    }

    /// Look up one view.
    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<CardView> {
        self.inner.lock().views.get(id.index()).cloned()
    }

    /// Take ownership of a face-down view for revealing.
    ///
    /// Returns `None` if the board changed, the view is already face-up, or
    /// another sequence already claimed it.
    pub fn claim(&self, generation: Generation, id: ViewId) -> Option<CardView> {
        let mut inner = self.inner.lock();
        if inner.generation != generation || inner.claimed.contains(&id) {
            return None;
        }
        let view = inner.views.get(id.index()).filter(|v| !v.revealed).cloned()?;
        inner.claimed.insert(id);
        Some(view)
    }

    /// Flip a claimed view face-up.
    ///
    /// Returns false if the board changed in the meantime.
    pub fn mark_revealed(&self, generation: Generation, id: ViewId) -> bool {
        let mut inner = self.inner.lock();
        if inner.generation != generation {
            return false;
        }
        inner.claimed.remove(&id);
        let flipped = match inner.views.get_mut(id.index()) {
            Some(view) if !view.revealed => {
                view.revealed = true;
                true
            }
            _ => false,
        };
        if flipped {
            inner.revealed += 1;
        }
        flipped
    }

    /// Give a claim back without revealing.
    pub fn release(&self, generation: Generation, id: ViewId) {
        let mut inner = self.inner.lock();
        if inner.generation == generation {
            inner.claimed.remove(&id);
        }
    }

    /// Revealed and total counts.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let inner = self.inner.lock();
        Progress {
            revealed: inner.revealed,
            total: inner.views.len(),
        }
    }

    /// Current generation together with its progress, read atomically.
    #[must_use]
    pub fn generation_progress(&self) -> (Generation, Progress) {
        let inner = self.inner.lock();
        let progress = Progress {
            revealed: inner.revealed,
            total: inner.views.len(),
        };
        (inner.generation, progress)
    }

    /// Number of views on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().views.len()
    }

    /// True when nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
