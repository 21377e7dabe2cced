//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by catalog, configuration, and ingestion code.
///
/// The guess engine itself never fails: an unusable guess is a no-op and a
/// guess with no matches is a miss.
#[derive(Debug, Error)]
pub enum RecallError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("card data download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("card data source returned {0}, expected a JSON array of cards")]
    UnexpectedPayload(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RecallError {
    pub(crate) fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = RecallError::Read {
            path: PathBuf::from("cards_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("cards_data.json"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_json_error_context() {
        let source = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = RecallError::json("config.json", source);
        assert!(err.to_string().starts_with("malformed JSON in config.json"));
    }
}
