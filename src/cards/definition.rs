//! Card records - static catalog data.
//!
//! `CardRecord` is one entry of the catalog file. It never changes during
//! play; the face-up/face-down state lives on `CardView`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Card rarity.
///
/// Parsing is case-insensitive; the serialized form is capitalized
/// (`"Legendary"`), which is also how the catalog file stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Rarity {
    Free,
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Rarities a player can filter by, in display order.
    ///
    /// `Free` cards stay in the catalog but only show up when asked for.
    pub const SELECTABLE: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Capitalized name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Free => "Free",
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a string that names no rarity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRarity(pub String);

impl std::fmt::Display for UnknownRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown rarity {:?}", self.0)
    }
}

impl std::error::Error for UnknownRarity {}

impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [
            Rarity::Free,
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
        .into_iter()
        .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| UnknownRarity(s.to_string()))
    }
}

impl TryFrom<String> for Rarity {
    type Error = UnknownRarity;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One card of the collection.
///
/// ## Example
///
/// ```
/// use card_recall::cards::{CardRecord, Rarity};
///
/// let card = CardRecord::new("Yogg-Saron", Rarity::Legendary, "Core")
///     .with_cost(10)
///     .with_img("https://example.com/yogg.png");
///
/// assert_eq!(card.cost, 10);
/// assert_eq!(card.rarity.to_string(), "Legendary");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRecord {
    /// Display name; what the player has to guess.
    pub name: String,

    pub rarity: Rarity,

    /// Set display name.
    pub set: String,

    /// Mana cost.
    #[serde(default)]
    pub cost: u32,

    /// Image URL of the card face.
    #[serde(default)]
    pub img: String,
}

impl CardRecord {
    /// Create a record with zero cost and no image.
    #[must_use]
    pub fn new(name: impl Into<String>, rarity: Rarity, set: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity,
            set: set.into(),
            cost: 0,
            img: String::new(),
        }
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set the image URL (builder pattern).
    #[must_use]
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// Canonical catalog ordering key: set, then cost, then name.
    #[must_use]
    pub fn sort_key(&self) -> (&str, u32, &str) {
        (&self.set, self.cost, &self.name)
    }
}
