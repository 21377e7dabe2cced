//! Card data ingestion.
//!
//! Downloads the upstream collectible-card dump (or reads a local copy),
//! maps set codes to display names, and produces the catalog plus a status
//! report.
//!
//! ## Key Types
//!
//! - `CardSource`: remote URL or dump file
//! - `IngestReport`: catalog, per-set counts, and skipped records

pub mod records;
pub mod source;

pub use records::{normalize_records, IngestIssue, IngestReport, IssueKind, RawCard};
pub use source::{fetch_records, ingest, load_dump, CardSource};
