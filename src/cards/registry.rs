//! Card catalog: the ordered list of card records.
//!
//! The `Catalog` is what ingestion produces and what the view builder
//! consumes. It is stored on disk as a pretty-printed JSON array.

use std::path::Path;

use tracing::{debug, warn};

use super::definition::{CardRecord, Rarity};
use crate::core::error::{RecallError, Result};

const LOG_TARGET: &str = "card_recall::catalog";

/// Ordered collection of card records.
///
/// ## Example
///
/// ```
/// use card_recall::cards::{Catalog, CardRecord, Rarity};
///
/// let mut catalog = Catalog::new();
/// catalog.push(CardRecord::new("Fireball", Rarity::Common, "Core").with_cost(4));
/// catalog.push(CardRecord::new("Arcane Intellect", Rarity::Common, "Core").with_cost(3));
/// catalog.sort_canonical();
///
/// assert_eq!(catalog.get(0).unwrap().name, "Arcane Intellect");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<CardRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records, keeping their order.
    #[must_use]
    pub fn from_records(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards = serde_json::from_str(json).map_err(|err| RecallError::json("catalog", err))?;
        Ok(Self { cards })
    }

    /// Load a catalog file.
    ///
    /// A missing file is an empty catalog, so the view can report that no
    /// data exists instead of failing.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(target: LOG_TARGET, path = %path.display(), "catalog file not found");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(RecallError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let cards: Vec<CardRecord> = serde_json::from_str(&data)
            .map_err(|err| RecallError::json(path.display().to_string(), err))?;
        debug!(target: LOG_TARGET, path = %path.display(), cards = cards.len(), "catalog loaded");
        Ok(Self { cards })
    }

    /// Write the catalog as pretty JSON.
    ///
    /// Writes to a sibling temp file first and renames it into place.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |source: std::io::Error| RecallError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(&self.cards)
            .map_err(|err| RecallError::json("catalog", err))?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, path).map_err(write_err)?;
        Ok(())
    }

    /// Append a record.
    pub fn push(&mut self, card: CardRecord) {
        self.cards.push(card);
    }

    /// Sort by (set, cost, name).
    pub fn sort_canonical(&mut self) {
        self.cards.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }

    /// Get a record by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardRecord> {
        self.cards.get(index)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    /// Records of one rarity.
    pub fn find_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter().filter(move |c| c.rarity == rarity)
    }

    /// Records matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardRecord>
    where
        F: Fn(&CardRecord) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Consume the catalog, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<CardRecord> {
        self.cards
    }
}

impl FromIterator<CardRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = CardRecord>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_records(vec![
            CardRecord::new("Yogg-Saron", Rarity::Legendary, "Core").with_cost(10),
            CardRecord::new("Fireball", Rarity::Common, "Core").with_cost(4),
            CardRecord::new("Fireball", Rarity::Common, "Event").with_cost(4),
            CardRecord::new("Arcane Shot", Rarity::Common, "Core").with_cost(1),
        ])
    }

    #[test]
    fn test_sort_canonical() {
        let mut catalog = sample();
        catalog.sort_canonical();

        let order: Vec<_> = catalog.iter().map(|c| (c.set.as_str(), c.name.as_str())).collect();
        assert_eq!(
            order,
            vec![
                ("Core", "Arcane Shot"),
                ("Core", "Fireball"),
                ("Core", "Yogg-Saron"),
                ("Event", "Fireball"),
            ]
        );
    }

    #[test]
    fn test_find_by_rarity() {
        let catalog = sample();
        assert_eq!(catalog.find_by_rarity(Rarity::Common).count(), 3);
        assert_eq!(catalog.find_by_rarity(Rarity::Legendary).count(), 1);
        assert_eq!(catalog.find_by_rarity(Rarity::Epic).count(), 0);
    }

    #[test]
    fn test_find_with_predicate() {
        let catalog = sample();
        let cheap: Vec<_> = catalog.find(|c| c.cost <= 2).collect();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].name, "Arcane Shot");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cards_data.json");

        let catalog = sample();
        catalog.save(&path).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded, catalog);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(&dir.path().join("missing.json")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_malformed_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards_data.json");
        std::fs::write(&path, r#"[{"name": 3}]"#).unwrap();
        assert!(Catalog::load(&path).is_err());
    }

    #[test]
    fn test_from_json_defaults_cost_and_img() {
        let catalog =
            Catalog::from_json(r#"[{"name":"Wisp","rarity":"Common","set":"Core"}]"#).unwrap();
        let wisp = catalog.get(0).unwrap();
        assert_eq!(wisp.cost, 0);
        assert!(wisp.img.is_empty());
    }
}
