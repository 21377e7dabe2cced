//! Capabilities the engine needs from the front end.
//!
//! Front ends implement `Renderer` (the board) and `GuessField` (the input
//! box). The engine only calls these; it never touches a screen directly,
//! so it runs the same against a terminal, a browser bridge, or a test
//! recorder.

use crate::cards::CardView;

use super::store::Progress;

/// Board capability.
///
/// ## Implementation Notes
///
/// - `is_in_viewport`: true only when the whole card is on screen
/// - `scroll_into_view`: start a smooth scroll that centers the card on both
///   axes; the engine waits for it to settle, so this must not block
/// - `play_flip`: start the flip animation; must not block either
/// - `announce_win`: called at most once per board
pub trait Renderer: Send + Sync + 'static {
    /// Is the card fully inside the visible area?
    fn is_in_viewport(&self, view: &CardView) -> bool;

    /// Bring the card to the center of the visible area.
    fn scroll_into_view(&self, view: &CardView);

    /// Turn the card face-up.
    fn play_flip(&self, view: &CardView);

    /// Tell the player every card has been found.
    fn announce_win(&self, progress: Progress);
}

/// State of the input box's hit/miss indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indicator {
    #[default]
    Neutral,
    Hit,
    Miss,
}

/// Input box capability.
pub trait GuessField: Send + Sync + 'static {
    /// Current raw text.
    fn value(&self) -> String;

    /// Empty the box.
    fn clear(&self);

    fn set_indicator(&self, indicator: Indicator);

    /// Put the cursor back in the box.
    fn focus(&self);
}
