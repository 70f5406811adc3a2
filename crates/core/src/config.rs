//! # Digest Configuration
//!
//! Optional JSON settings file. Every field has a default, so `{}` is a
//! valid configuration and command-line flags only need to override what
//! they set.
//!
//! ```json
//! {
//!   "summary": { "max_response_length": 300 },
//!   "output": { "path": "out/cleaned.json", "pretty": false }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DigestError, Result};
use crate::state::io::{read_input, OutputFormat, DEFAULT_OUTPUT_FILE};
use crate::tools::summary::SummaryConfig;

/// Where and how the cleaned artifact is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Indent the JSON (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            pretty: true,
        }
    }
}

impl OutputConfig {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_pretty(self.pretty)
    }
}

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    pub summary: SummaryConfig,
    pub output: OutputConfig,
}

impl DigestConfig {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = read_input(path)?;
        serde_json::from_str(&raw).map_err(|e| DigestError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load settings when a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DigestConfig::default();
        assert_eq!(config.summary.max_response_length, 500);
        assert_eq!(config.output.path, PathBuf::from("cleaned_swarm_output.json"));
        assert_eq!(config.output.format(), OutputFormat::Pretty);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digest.json");
        std::fs::write(&path, r#"{"output": {"pretty": false}}"#).unwrap();

        let config = DigestConfig::load(&path).unwrap();
        assert_eq!(config.summary, SummaryConfig::default());
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.output.format(), OutputFormat::Compact);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digest.json");
        std::fs::write(&path, r#"{"summary": {"max_response_length": "lots"}}"#).unwrap();

        match DigestConfig::load(&path).unwrap_err() {
            DigestError::Config { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            DigestConfig::load_or_default(None).unwrap(),
            DigestConfig::default()
        );
    }
}
