//! Card views - one face-down card on the board.
//!
//! A `CardView` is created by the view builder for every card that passes
//! the rarity filter. Its identity key is computed once, at creation. Only
//! the reveal sequencer flips `revealed`.

use serde::{Deserialize, Serialize};

use super::definition::{CardRecord, Rarity};
use crate::engine::normalize::IdentityKey;

/// Position of a view in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(pub u32);

impl ViewId {
    /// Create a new view ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Index into the display-ordered view list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "View({})", self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: ViewId,

    /// Normalized display name. Never recomputed.
    pub key: IdentityKey,

    pub display_name: String,

    pub image_ref: String,

    pub set_name: String,

    pub rarity: Rarity,

    pub cost: u32,

    /// Face-up?
    pub revealed: bool,
}

impl CardView {
    /// Create a face-down view of a catalog record.
    #[must_use]
    pub fn from_record(id: ViewId, record: &CardRecord) -> Self {
        Self {
            id,
            key: IdentityKey::from_name(&record.name),
            display_name: record.name.clone(),
            image_ref: record.img.clone(),
            set_name: record.set.clone(),
            rarity: record.rarity,
            cost: record.cost,
            revealed: false,
        }
    }

    /// Create a face-down view from just a name and set.
    ///
    /// Mostly for tests and scripted boards.
    #[must_use]
    pub fn new(id: ViewId, name: impl Into<String>, set_name: impl Into<String>) -> Self {
        let display_name = name.into();
        Self {
            id,
            key: IdentityKey::from_name(&display_name),
            display_name,
            image_ref: String::new(),
            set_name: set_name.into(),
            rarity: Rarity::Common,
            cost: 0,
            revealed: false,
        }
    }
}
