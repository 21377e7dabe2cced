//! Guess matching.

use smallvec::SmallVec;

use super::normalize::GuessKey;
use crate::cards::{CardView, ViewId};

/// Ids of matched views. Most guesses hit zero or one card.
pub type Matches = SmallVec<[ViewId; 4]>;

/// Every face-down view named by `guess`, in display order.
///
/// Card names repeat across sets; a guess names the card, not one printing,
/// so all hidden copies match together.
pub fn match_guess<'a, I>(guess: &GuessKey, views: I) -> Matches
where
    I: IntoIterator<Item = &'a CardView>,
{
    views
        .into_iter()
        .filter(|view| !view.revealed && guess.matches(&view.key))
        .map(|view| view.id)
        .collect()
}
