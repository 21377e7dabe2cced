//! Where raw card data comes from: the upstream URL or a local dump.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use super::records::{normalize_records, IngestReport};
use crate::core::config::IngestConfig;
use crate::core::error::{RecallError, Result};

const LOG_TARGET: &str = "card_recall::ingest";

/// Source of the raw collectible-card array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardSource {
    /// Download from `IngestConfig::source_url`.
    Remote,
    /// Read a previously downloaded dump.
    File(PathBuf),
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn into_records(payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(records) => Ok(records),
        other => Err(RecallError::UnexpectedPayload(describe(&other))),
    }
}

/// Download the raw card array.
pub async fn fetch_records(config: &IngestConfig) -> Result<Vec<Value>> {
    info!(target: LOG_TARGET, url = %config.source_url, "downloading card data");
    let payload: Value = reqwest::get(config.source_url.as_str())
        .await?
        .error_for_status()?
        .json()
        .await?;
    let records = into_records(payload)?;
    debug!(target: LOG_TARGET, records = records.len(), "card data downloaded");
    Ok(records)
}

/// Read the raw card array from a dump file.
pub fn load_dump(path: &Path) -> Result<Vec<Value>> {
    let data = std::fs::read_to_string(path).map_err(|source| RecallError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: Value = serde_json::from_str(&data)
        .map_err(|err| RecallError::json(path.display().to_string(), err))?;
    into_records(payload)
}

/// Fetch and normalize card data in one step.
pub async fn ingest(source: &CardSource, config: &IngestConfig) -> Result<IngestReport> {
    let records = match source {
        CardSource::Remote => fetch_records(config).await?,
        CardSource::File(path) => load_dump(path)?,
    };
    Ok(normalize_records(records, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_dump_reads_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"A","name":"Fireball","set":"CORE"}}]"#).unwrap();

        let records = load_dump(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_non_array_payload_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"error":"rate limited"}}"#).unwrap();

        let err = load_dump(file.path()).unwrap_err();
        assert!(matches!(err, RecallError::UnexpectedPayload("an object")));
    }

    #[test]
    fn test_missing_dump_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dump(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RecallError::Read { .. }));
    }

    #[tokio::test]
    async fn test_ingest_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"CORE_CS2_029","name":"Fireball","set":"CORE","rarity":"COMMON","cost":4}}]"#
        )
        .unwrap();

        let source = CardSource::File(file.path().to_path_buf());
        let report = ingest(&source, &IngestConfig::default()).await.unwrap();
        assert_eq!(report.total(), 1);
        assert_eq!(report.catalog.get(0).unwrap().set, "Core");
    }
}
