//! Ingestion integration tests.
//!
//! Dump file in, catalog file out, board built from the written catalog.

use std::fs;

use serde_json::json;

use card_recall::cards::{Catalog, Rarity};
use card_recall::core::{IngestConfig, RecallConfig, SetMapping, ViewConfig};
use card_recall::ingest::{ingest, CardSource, IssueKind};
use card_recall::view::{build_view, ViewRequest, ViewState};

fn write_dump(dir: &tempfile::TempDir, records: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("cards.collectible.json");
    fs::write(&path, records.to_string()).unwrap();
    path
}

/// Test the dump-to-board pipeline.
#[tokio::test]
async fn test_dump_to_board() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(
        &dir,
        json!([
            {"id": "CORE_EX1_116", "name": "Leeroy Jenkins", "set": "CORE", "rarity": "LEGENDARY", "cost": 4, "type": "MINION"},
            {"id": "CORE_CS2_029", "name": "Fireball", "set": "CORE", "rarity": "COMMON", "cost": 4},
            {"id": "TIME_001", "name": "Chronikar", "set": "TIME_TRAVEL", "rarity": "EPIC", "cost": 3},
            {"id": "EX1_001", "name": "Lightwarden", "set": "EXPERT1", "rarity": "RARE", "cost": 1},
        ]),
    );

    let config = RecallConfig::default().with_catalog_path(dir.path().join("cards_data.json"));
    let report = ingest(&CardSource::File(dump), &config.ingest).await.unwrap();
    assert!(report.is_complete());
    report.catalog.save(&config.catalog_path).unwrap();

    let catalog = Catalog::load(&config.catalog_path).unwrap();
    assert_eq!(catalog, report.catalog);

    let view = build_view(&catalog, &ViewRequest::all(), &config.view);
    let names: Vec<_> = view.sets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Across the Timeways", "Core", "EXPERT1"]);

    let legendary = build_view(
        &catalog,
        &ViewRequest::from_selections(["Legendary"]),
        &config.view,
    );
    assert_eq!(legendary.card_count(), 1);
    let leeroy = &legendary.sets[0].views[0];
    assert_eq!(leeroy.display_name, "Leeroy Jenkins");
    assert_eq!(leeroy.rarity, Rarity::Legendary);
    assert!(leeroy.image_ref.ends_with("/CORE_EX1_116.png"));
}

/// Test that bad records are reported while good ones are kept.
#[tokio::test]
async fn test_partial_dump_keeps_good_records() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(
        &dir,
        json!([
            {"id": "CORE_CS2_029", "name": "Fireball", "set": "CORE", "rarity": "COMMON", "cost": 4},
            {"id": "BROKEN_1", "set": "CORE"},
            {"id": "BROKEN_2", "name": "Odd", "set": "CORE", "cost": -1},
        ]),
    );

    let report = ingest(&CardSource::File(dump), &IngestConfig::default())
        .await
        .unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.total(), 1);
    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.issues[0].kind, IssueKind::MissingField("name"));
    assert!(matches!(report.issues[1].kind, IssueKind::Malformed(_)));
}

/// Test a custom set table with several codes per set.
#[tokio::test]
async fn test_custom_set_table() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(
        &dir,
        json!([
            {"id": "A", "name": "Alpha", "set": "LEGACY", "cost": 1},
            {"id": "B", "name": "Beta", "set": "EXPERT1", "cost": 2},
            {"id": "C", "name": "Gamma", "set": "CORE", "cost": 3},
        ]),
    );

    let config = IngestConfig::default()
        .with_sets(vec![SetMapping::new("Classic", ["LEGACY", "EXPERT1"])])
        .mapped_only();
    let report = ingest(&CardSource::File(dump), &config).await.unwrap();

    assert_eq!(report.found_counts, vec![("Classic".to_string(), 2)]);
    assert_eq!(report.unmapped, 1);
    assert!(report.catalog.iter().all(|c| c.set == "Classic"));
}

/// Test that an empty catalog file tells the player to ingest first.
#[test]
fn test_missing_catalog_is_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::load(&dir.path().join("cards_data.json")).unwrap();

    let view = build_view(&catalog, &ViewRequest::all(), &ViewConfig::default());
    assert_eq!(view.state, ViewState::NoData);
    assert_eq!(
        view.state.message(),
        Some("No card data available. Run the ingest step first.")
    );
}
