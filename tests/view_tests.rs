//! View builder integration tests.
//!
//! Properties of boards built from arbitrary catalogs and selections.

use proptest::prelude::*;

use card_recall::cards::{CardRecord, Catalog, Rarity};
use card_recall::core::ViewConfig;
use card_recall::view::{build_view, RarityFilter, ViewRequest, ViewState};

const SETS: [&str; 5] = ["Core", "Event", "Perils in Paradise", "GVG", "NAXX"];
const RARITIES: [Rarity; 5] = [
    Rarity::Free,
    Rarity::Common,
    Rarity::Rare,
    Rarity::Epic,
    Rarity::Legendary,
];

fn arb_card() -> impl Strategy<Value = CardRecord> {
    ("[A-Za-z' ,-]{1,12}", 0..5usize, 0..5usize, 0u32..11).prop_map(|(name, set, rarity, cost)| {
        CardRecord::new(name, RARITIES[rarity], SETS[set]).with_cost(cost)
    })
}

fn arb_selection() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["free", "Common", "RARE", "epic", "Legendary", "mythic"]),
        0..4,
    )
    .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    /// Test that every shown card passes the filter and nothing else is dropped.
    #[test]
    fn prop_board_is_exactly_the_filtered_catalog(
        cards in prop::collection::vec(arb_card(), 0..40),
        selection in arb_selection(),
    ) {
        let catalog = Catalog::from_records(cards);
        let request = ViewRequest::from_selections(&selection);
        let view = build_view(&catalog, &request, &ViewConfig::default());

        let expected = catalog.iter().filter(|c| request.filter.allows(c.rarity)).count();
        prop_assert_eq!(view.card_count(), expected);

        for (idx, card) in view.views().iter().enumerate() {
            prop_assert_eq!(card.id.index(), idx);
            prop_assert!(request.filter.allows(card.rarity));
            prop_assert!(!card.revealed);
        }

        match view.state {
            ViewState::NoData => prop_assert!(catalog.is_empty()),
            ViewState::NoMatches => prop_assert!(!catalog.is_empty() && expected == 0),
            ViewState::Ready => prop_assert!(expected > 0),
        }
    }

    /// Test that sets appear once each, never empty, configured ones first.
    #[test]
    fn prop_sets_are_grouped(
        cards in prop::collection::vec(arb_card(), 1..40),
        selection in arb_selection(),
    ) {
        let config = ViewConfig::default();
        let view = build_view(
            &Catalog::from_records(cards),
            &ViewRequest::from_selections(&selection),
            &config,
        );

        let names: Vec<&str> = view.sets.iter().map(|s| s.name.as_str()).collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), names.len());

        let mut seen_unconfigured = false;
        for set in &view.sets {
            prop_assert!(!set.views.is_empty());
            prop_assert!(set.views.iter().all(|v| v.set_name == set.name));
            let configured = config.set_order.contains(&set.name);
            prop_assert!(!(configured && seen_unconfigured));
            seen_unconfigured |= !configured;
        }
    }
}

/// Test that a selection naming only unknown rarities shows nothing.
#[test]
fn test_unknown_only_selection_is_empty_board() {
    let catalog = Catalog::from_records(vec![CardRecord::new("Wisp", Rarity::Common, "Core")]);
    let request = ViewRequest::from_query("rarity=mythic");

    assert_eq!(request.filter, RarityFilter::Only(Vec::new()));
    let view = build_view(&catalog, &request, &ViewConfig::default());
    assert_eq!(view.state, ViewState::NoMatches);
    assert_eq!(view.state.message(), Some("No cards found."));
}

/// Test that set order can be reconfigured.
#[test]
fn test_custom_set_order() {
    let catalog = Catalog::from_records(vec![
        CardRecord::new("Fireball", Rarity::Common, "Core"),
        CardRecord::new("Patches", Rarity::Legendary, "Event"),
    ]);
    let config = ViewConfig::default().with_set_order(["Core", "Event"]);
    let view = build_view(&catalog, &ViewRequest::all(), &config);

    let names: Vec<_> = view.sets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Core", "Event"]);
}

/// Test the JSON form of a board.
#[test]
fn test_view_serializes() {
    let catalog = Catalog::from_records(vec![CardRecord::new("Fireball", Rarity::Common, "Core")]);
    let view = build_view(&catalog, &ViewRequest::all(), &ViewConfig::default());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["state"], "Ready");
    assert_eq!(json["sets"][0]["name"], "Core");
    assert_eq!(json["sets"][0]["views"][0]["display_name"], "Fireball");
    assert_eq!(json["sets"][0]["views"][0]["revealed"], false);
}
