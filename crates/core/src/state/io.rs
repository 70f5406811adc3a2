//! # IO Utilities
//!
//! Reading raw swarm output and writing the cleaned JSON artifact.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{json_kind, DigestError, Result};
use crate::tools::cleaner::clean_fragments;

/// Destination used when the caller does not name one
pub const DEFAULT_OUTPUT_FILE: &str = "cleaned_swarm_output.json";

/// How the cleaned artifact is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two-space indentation
    #[default]
    Pretty,
    /// No insignificant whitespace
    Compact,
}

impl OutputFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Fragments to persist, already decoded or still as JSON text
#[derive(Debug, Clone, Copy)]
pub enum FragmentSource<'a> {
    Fragments(&'a [Value]),
    Json(&'a str),
}

impl<'a> From<&'a [Value]> for FragmentSource<'a> {
    fn from(fragments: &'a [Value]) -> Self {
        Self::Fragments(fragments)
    }
}

impl<'a> From<&'a Vec<Value>> for FragmentSource<'a> {
    fn from(fragments: &'a Vec<Value>) -> Self {
        Self::Fragments(fragments.as_slice())
    }
}

impl<'a> From<&'a str> for FragmentSource<'a> {
    fn from(json: &'a str) -> Self {
        Self::Json(json)
    }
}

/// Clean fragments and render them as JSON text.
///
/// Non-ASCII characters are written literally.
pub fn render_cleaned_output<'a>(
    source: impl Into<FragmentSource<'a>>,
    format: OutputFormat,
) -> Result<String> {
    let cleaned = match source.into() {
        FragmentSource::Fragments(fragments) => clean_fragments(fragments),
        FragmentSource::Json(json) => match serde_json::from_str::<Value>(json)? {
            Value::Array(fragments) => clean_fragments(&fragments),
            other => return Err(DigestError::NotASequence(json_kind(&other))),
        },
    };

    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(&cleaned)?,
        OutputFormat::Compact => serde_json::to_string(&cleaned)?,
    };
    Ok(rendered)
}

/// Clean fragments and write them to `path` as JSON.
///
/// Write failures are returned as [`DigestError::Io`]; nothing is retried.
pub fn save_cleaned_output<'a>(
    source: impl Into<FragmentSource<'a>>,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let rendered = render_cleaned_output(source, format)?;

    fs::write(path, rendered.as_bytes()).map_err(|e| DigestError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = rendered.len(), "Saved cleaned swarm output");
    Ok(())
}

/// Read a whole input file as UTF-8 text
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| DigestError::io(path, e))
}
