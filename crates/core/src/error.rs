//! # Digest Errors
//!
//! Failures the library surfaces to callers. Cleaning, extraction and
//! summary rendering are infallible; only persistence and configuration
//! loading can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The payload decoded to valid JSON that is not a fragment array
    #[error("expected a JSON array of fragments, got {0}")]
    NotASequence(&'static str),
    #[error("invalid config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, DigestError>;

impl DigestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Short JSON type name used in error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_a_sequence_message() {
        let err = DigestError::NotASequence(json_kind(&json!({"a": 1})));
        assert_eq!(
            err.to_string(),
            "expected a JSON array of fragments, got an object"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DigestError = parse_err.into();
        assert!(matches!(err, DigestError::Json(_)));
    }
}
