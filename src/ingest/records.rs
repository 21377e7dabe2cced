//! Raw card normalization.
//!
//! Turns records of the upstream collectible-card dump into catalog
//! records. Bad records are reported, never fatal.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::cards::{CardRecord, Catalog, Rarity};
use crate::core::config::IngestConfig;

const LOG_TARGET: &str = "card_recall::ingest";

/// Fields we read from one upstream record. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RawCard {
    pub id: Option<String>,
    pub name: Option<String>,
    pub set: Option<String>,
    pub rarity: Option<String>,
    pub cost: Option<u32>,
}

/// Why a record was left out of the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueKind {
    /// A required field is absent or empty.
    MissingField(&'static str),
    /// The rarity names no known rarity.
    UnknownRarity(String),
    /// The record does not have the expected shape.
    Malformed(String),
}

/// A record that could not be ingested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestIssue {
    /// Position in the upstream array.
    pub index: usize,
    /// Upstream id, when the record had one.
    pub card_id: Option<String>,
    pub kind: IssueKind,
}

impl fmt::Display for IngestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}", self.index)?;
        if let Some(id) = &self.card_id {
            write!(f, " ({id})")?;
        }
        match &self.kind {
            IssueKind::MissingField(field) => write!(f, ": missing {field}"),
            IssueKind::UnknownRarity(rarity) => write!(f, ": unknown rarity {rarity:?}"),
            IssueKind::Malformed(reason) => write!(f, ": malformed ({reason})"),
        }
    }
}

/// Result of one ingestion run.
#[derive(Clone, Debug, Default)]
pub struct IngestReport {
    /// Cards kept, sorted by set, cost, name.
    pub catalog: Catalog,
    /// Cards found per mapped set, in table order.
    pub found_counts: Vec<(String, usize)>,
    /// Records whose set code is not in the table.
    pub unmapped: usize,
    /// Records left out because they were malformed.
    pub issues: Vec<IngestIssue>,
}

impl IngestReport {
    /// No record had to be left out for being malformed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of cards kept.
    #[must_use]
    pub fn total(&self) -> usize {
        self.catalog.len()
    }
}

/// Maps raw set codes to display names.
struct SetTable<'a> {
    by_code: FxHashMap<&'a str, usize>,
    config: &'a IngestConfig,
}

impl<'a> SetTable<'a> {
    fn new(config: &'a IngestConfig) -> Self {
        let mut by_code = FxHashMap::default();
        for (idx, mapping) in config.sets.iter().enumerate() {
            for code in &mapping.codes {
                by_code.entry(code.as_str()).or_insert(idx);
            }
        }
        Self { by_code, config }
    }

    fn lookup(&self, code: &str) -> Option<usize> {
        self.by_code.get(code).copied()
    }

    fn name(&self, idx: usize) -> &'a str {
        &self.config.sets[idx].display_name
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// Normalize upstream records into a catalog.
///
/// Missing rarity means Common and missing cost means 0. Unmapped set codes
/// are kept under the raw code unless `mapped_only` is set.
pub fn normalize_records(records: Vec<Value>, config: &IngestConfig) -> IngestReport {
    let table = SetTable::new(config);
    let mut counts = vec![0usize; config.sets.len()];
    let mut report = IngestReport::default();
    let mut cards = Vec::with_capacity(records.len());

    for (index, value) in records.into_iter().enumerate() {
        let raw: RawCard = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(err) => {
                report.issues.push(IngestIssue {
                    index,
                    card_id: None,
                    kind: IssueKind::Malformed(err.to_string()),
                });
                continue;
            }
        };

        let card_id = non_empty(raw.id);
        let issue = |kind| IngestIssue {
            index,
            card_id: card_id.clone(),
            kind,
        };

        let Some(id) = card_id.as_deref() else {
            report.issues.push(issue(IssueKind::MissingField("id")));
            continue;
        };
        let Some(code) = non_empty(raw.set) else {
            report.issues.push(issue(IssueKind::MissingField("set")));
            continue;
        };
        let Some(name) = non_empty(raw.name) else {
            report.issues.push(issue(IssueKind::MissingField("name")));
            continue;
        };
        let rarity = match raw.rarity.as_deref() {
            None => Rarity::Common,
            Some(text) => match text.parse::<Rarity>() {
                Ok(rarity) => rarity,
                Err(_) => {
                    report.issues.push(issue(IssueKind::UnknownRarity(text.to_string())));
                    continue;
                }
            },
        };

        let set = match table.lookup(&code) {
            Some(idx) => {
                counts[idx] += 1;
                table.name(idx).to_string()
            }
            None => {
                report.unmapped += 1;
                if config.mapped_only {
                    continue;
                }
                code
            }
        };

        cards.push(
            CardRecord::new(name, rarity, set)
                .with_cost(raw.cost.unwrap_or(0))
                .with_img(config.image_url(id)),
        );
    }

    for issue in &report.issues {
        warn!(target: LOG_TARGET, %issue, "skipping card record");
    }

    let mut catalog = Catalog::from_records(cards);
    catalog.sort_canonical();
    report.catalog = catalog;
    report.found_counts = config
        .sets
        .iter()
        .zip(counts)
        .map(|(mapping, count)| (mapping.display_name.clone(), count))
        .collect();

    info!(
        target: LOG_TARGET,
        total = report.total(),
        unmapped = report.unmapped,
        issues = report.issues.len(),
        "card data normalized"
    );
    report
}
