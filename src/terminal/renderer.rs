//! Terminal board and input field.

use parking_lot::Mutex;

use super::layout::BoardLayout;
use super::output::Output;
use crate::cards::CardView;
use crate::engine::{GuessField, Indicator, Progress, Renderer};

/// Board renderer that prints to a terminal.
///
/// Only `viewport_rows` rows of the board are "on screen". Scrolling moves
/// the window so the target row sits in the middle.
#[derive(Debug)]
pub struct TerminalRenderer {
    layout: BoardLayout,
    viewport_rows: usize,
    top: Mutex<usize>,
    out: Output,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(layout: BoardLayout, viewport_rows: usize, out: Output) -> Self {
        Self {
            layout,
            viewport_rows: viewport_rows.max(1),
            top: Mutex::new(0),
            out,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// First visible row.
    #[must_use]
    pub fn top(&self) -> usize {
        *self.top.lock()
    }

    /// Visible rows as a half-open range.
    #[must_use]
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        let top = self.top();
        let end = (top + self.viewport_rows).min(self.layout.row_count());
        top..end
    }

    fn centered_top(&self, row: usize) -> usize {
        let max_top = self.layout.row_count().saturating_sub(self.viewport_rows);
        row.saturating_sub(self.viewport_rows / 2).min(max_top)
    }
}

impl Renderer for TerminalRenderer {
    fn is_in_viewport(&self, view: &CardView) -> bool {
        self.layout
            .row_of(view.id)
            .is_some_and(|row| self.visible_rows().contains(&row))
    }

    fn scroll_into_view(&self, view: &CardView) {
        let Some(row) = self.layout.row_of(view.id) else {
            return;
        };
        let top = self.centered_top(row);
        *self.top.lock() = top;
        self.out.line(format_args!(
            "  ... scrolling to {} (rows {}-{})",
            view.set_name,
            top + 1,
            (top + self.viewport_rows).min(self.layout.row_count())
        ));
    }

    fn play_flip(&self, view: &CardView) {
        self.out.line(format_args!(
            "  * {} ({}, {})",
            view.display_name, view.set_name, view.rarity
        ));
    }

    fn announce_win(&self, progress: Progress) {
        self.out.line(format_args!(
            "Well done! You guessed all {} cards!",
            progress.total
        ));
    }
}

/// Input field backed by lines read from the terminal.
#[derive(Debug)]
pub struct TerminalField {
    prompt: String,
    text: Mutex<String>,
    indicator: Mutex<Indicator>,
    out: Output,
}

impl TerminalField {
    #[must_use]
    pub fn new(prompt: impl Into<String>, out: Output) -> Self {
        Self {
            prompt: prompt.into(),
            text: Mutex::new(String::new()),
            indicator: Mutex::new(Indicator::Neutral),
            out,
        }
    }

    /// Replace the field's text with a line the player typed.
    pub fn set_value(&self, text: impl Into<String>) {
        *self.text.lock() = text.into();
    }

    #[must_use]
    pub fn indicator(&self) -> Indicator {
        *self.indicator.lock()
    }
}

impl GuessField for TerminalField {
    fn value(&self) -> String {
        self.text.lock().clone()
    }

    fn clear(&self) {
        self.text.lock().clear();
    }

    fn set_indicator(&self, indicator: Indicator) {
        *self.indicator.lock() = indicator;
        match indicator {
            Indicator::Hit => self.out.line(format_args!("  \u{2714} correct")),
            Indicator::Miss => self.out.line(format_args!("  \u{2718} no hidden card by that name")),
            Indicator::Neutral => {}
        }
    }

    fn focus(&self) {
        self.out.prompt(&self.prompt);
    }
}
