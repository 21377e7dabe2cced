//! Builds the board from the catalog.
//!
//! A view request selects rarities; the builder keeps matching cards, groups
//! them by set in the configured order, and creates one face-down
//! `CardView` per card. Every request builds a brand new board.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::info;

use crate::cards::{CardRecord, CardView, Catalog, Rarity, ViewId};
use crate::core::config::ViewConfig;

const LOG_TARGET: &str = "card_recall::view";

/// Which rarities to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RarityFilter {
    /// Every selectable rarity.
    All,
    /// Only these. An empty list shows nothing.
    Only(Vec<Rarity>),
}

impl RarityFilter {
    #[must_use]
    pub fn allows(&self, rarity: Rarity) -> bool {
        match self {
            RarityFilter::All => Rarity::SELECTABLE.contains(&rarity),
            RarityFilter::Only(selected) => selected.contains(&rarity),
        }
    }

    /// Selected rarities in display order (what a filter form would tick).
    #[must_use]
    pub fn selected(&self) -> Vec<Rarity> {
        match self {
            RarityFilter::All => Rarity::SELECTABLE.to_vec(),
            RarityFilter::Only(selected) => {
                let mut selected = selected.clone();
                selected.sort();
                selected.dedup();
                selected
            }
        }
    }
}

/// A request for a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRequest {
    pub filter: RarityFilter,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self::all()
    }
}

impl ViewRequest {
    /// Show every selectable rarity.
    #[must_use]
    pub fn all() -> Self {
        Self {
            filter: RarityFilter::All,
        }
    }

    /// Build a request from the player's selections.
    ///
    /// Case does not matter. No selections means all rarities. Selections
    /// that name no rarity are dropped, so a request made only of unknown
    /// names shows nothing.
    ///
    /// ```
    /// use card_recall::cards::Rarity;
    /// use card_recall::view::{RarityFilter, ViewRequest};
    ///
    /// let request = ViewRequest::from_selections(["legendary", "EPIC"]);
    /// assert_eq!(request.filter, RarityFilter::Only(vec![Rarity::Legendary, Rarity::Epic]));
    ///
    /// let none: [&str; 0] = [];
    /// assert_eq!(ViewRequest::from_selections(none).filter, RarityFilter::All);
    /// ```
    pub fn from_selections<I, S>(selections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut any = false;
        let mut chosen = Vec::new();
        for selection in selections {
            any = true;
            if let Ok(rarity) = selection.as_ref().parse::<Rarity>() {
                if !chosen.contains(&rarity) {
                    chosen.push(rarity);
                }
            }
        }
        if any {
            Self {
                filter: RarityFilter::Only(chosen),
            }
        } else {
            Self::all()
        }
    }

    /// Parse `rarity=...` pairs out of a URL query string.
    ///
    /// ```
    /// use card_recall::cards::Rarity;
    /// use card_recall::view::{RarityFilter, ViewRequest};
    ///
    /// let request = ViewRequest::from_query("rarity=epic&rarity=Rare&page=2");
    /// assert_eq!(request.filter, RarityFilter::Only(vec![Rarity::Epic, Rarity::Rare]));
    /// ```
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let selections: Vec<String> = url::form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == "rarity")
            .map(|(_, value)| value.into_owned())
            .collect();
        Self::from_selections(selections)
    }
}

/// Cards of one set, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogSet {
    pub name: String,
    pub views: Vec<CardView>,
}

/// Why a board is empty, or that it is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ViewState {
    /// The catalog itself is empty.
    NoData,
    /// The catalog has cards but none pass the filter.
    NoMatches,
    Ready,
}

impl ViewState {
    /// Message to show instead of an empty grid.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            ViewState::NoData => Some("No card data available. Run the ingest step first."),
            ViewState::NoMatches => Some("No cards found."),
            ViewState::Ready => None,
        }
    }
}

/// A built board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuiltView {
    pub state: ViewState,
    pub selected: Vec<Rarity>,
    pub sets: Vec<CatalogSet>,
}

impl BuiltView {
    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.sets.iter().map(|s| s.views.len()).sum()
    }

    /// All views in display order (ids are their positions).
    #[must_use]
    pub fn views(&self) -> Vec<CardView> {
        self.sets.iter().flat_map(|s| s.views.iter().cloned()).collect()
    }

    /// Consume the board into its display-ordered views.
    #[must_use]
    pub fn into_views(self) -> Vec<CardView> {
        self.sets.into_iter().flat_map(|s| s.views).collect()
    }
}

/// Build the board for `request`.
pub fn build_view(catalog: &Catalog, request: &ViewRequest, config: &ViewConfig) -> BuiltView {
    let selected = request.filter.selected();
    if catalog.is_empty() {
        return BuiltView {
            state: ViewState::NoData,
            selected,
            sets: Vec::new(),
        };
    }

    // Configured sets first, then unknown sets by first appearance.
    let mut order: Vec<&str> = config.set_order.iter().map(String::as_str).collect();
    let mut grouped: FxHashMap<&str, Vec<&CardRecord>> = FxHashMap::default();
    for card in catalog.iter().filter(|c| request.filter.allows(c.rarity)) {
        let set = card.set.as_str();
        if !order.contains(&set) {
            order.push(set);
        }
        grouped.entry(set).or_default().push(card);
    }

    let mut next_id = 0u32;
    let mut sets = Vec::new();
    for name in order {
        let Some(cards) = grouped.remove(name) else {
            continue;
        };
        let views = cards
            .into_iter()
            .map(|card| {
                let view = CardView::from_record(ViewId::new(next_id), card);
                next_id += 1;
                view
            })
            .collect();
        sets.push(CatalogSet {
            name: name.to_string(),
            views,
        });
    }

    let state = if sets.is_empty() {
        ViewState::NoMatches
    } else {
        ViewState::Ready
    };
    info!(
        target: LOG_TARGET,
        sets = sets.len(),
        cards = next_id,
        ?selected,
        "view built"
    );
    BuiltView {
        state,
        selected,
        sets,
    }
}
