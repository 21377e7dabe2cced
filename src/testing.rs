//! Recording front ends for tests and headless runs.
//!
//! `RecordingRenderer` and `RecordingField` implement the engine's
//! capabilities by writing down every call with the time it happened
//! (relative to their creation). With a paused Tokio clock the timestamps
//! are exact.

use std::time::Duration;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tokio::time::Instant;

use crate::cards::{CardView, ViewId};
use crate::engine::{GuessField, Indicator, Progress, Renderer};

/// A call made on a `RecordingRenderer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    Scroll(ViewId),
    Flip(ViewId),
    Win(Progress),
}

/// Renderer that records calls.
///
/// A view counts as on screen once `show` was called for it or it was
/// scrolled to.
#[derive(Debug)]
pub struct RecordingRenderer {
    started: Instant,
    visible: Mutex<FxHashSet<ViewId>>,
    events: Mutex<Vec<(Duration, RenderEvent)>>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            visible: Mutex::new(FxHashSet::default()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Put a view on screen.
    pub fn show(&self, id: ViewId) {
        self.visible.lock().insert(id);
    }

    /// Take a view off screen.
    pub fn hide(&self, id: ViewId) {
        self.visible.lock().remove(&id);
    }

    /// Recorded calls with their offsets from creation.
    #[must_use]
    pub fn events(&self) -> Vec<(Duration, RenderEvent)> {
        self.events.lock().clone()
    }

    /// Ids flipped so far, in order.
    #[must_use]
    pub fn flips(&self) -> Vec<ViewId> {
        self.events
            .lock()
            .iter()
            .filter_map(|(_, e)| match e {
                RenderEvent::Flip(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Number of win announcements.
    #[must_use]
    pub fn win_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|(_, e)| matches!(e, RenderEvent::Win(_)))
            .count()
    }

    fn record(&self, event: RenderEvent) {
        let at = self.started.elapsed();
        self.events.lock().push((at, event));
    }
}

impl Renderer for RecordingRenderer {
    fn is_in_viewport(&self, view: &CardView) -> bool {
        self.visible.lock().contains(&view.id)
    }

    fn scroll_into_view(&self, view: &CardView) {
        self.visible.lock().insert(view.id);
        self.record(RenderEvent::Scroll(view.id));
    }

    fn play_flip(&self, view: &CardView) {
        self.record(RenderEvent::Flip(view.id));
    }

    fn announce_win(&self, progress: Progress) {
        self.record(RenderEvent::Win(progress));
    }
}

/// A call made on a `RecordingField`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Cleared,
    Indicator(Indicator),
    Focused,
}

#[derive(Debug, Default)]
struct FieldState {
    text: String,
    indicator: Indicator,
    focused: bool,
    events: Vec<FieldEvent>,
}

/// Input field that records calls.
#[derive(Debug, Default)]
pub struct RecordingField {
    state: Mutex<FieldState>,
}

impl RecordingField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field pre-filled with `text`.
    #[must_use]
    pub fn with_value(text: impl Into<String>) -> Self {
        let field = Self::new();
        field.type_text(text);
        field
    }

    /// Replace the field's text, as if the player typed it.
    pub fn type_text(&self, text: impl Into<String>) {
        self.state.lock().text = text.into();
    }

    #[must_use]
    pub fn indicator(&self) -> Indicator {
        self.state.lock().indicator
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.lock().focused
    }

    #[must_use]
    pub fn events(&self) -> Vec<FieldEvent> {
        self.state.lock().events.clone()
    }
}

impl GuessField for RecordingField {
    fn value(&self) -> String {
        self.state.lock().text.clone()
    }

    fn clear(&self) {
        let mut state = self.state.lock();
        state.text.clear();
        state.events.push(FieldEvent::Cleared);
    }

    fn set_indicator(&self, indicator: Indicator) {
        let mut state = self.state.lock();
        state.indicator = indicator;
        state.events.push(FieldEvent::Indicator(indicator));
    }

    fn focus(&self) {
        let mut state = self.state.lock();
        state.focused = true;
        state.events.push(FieldEvent::Focused);
    }
}
