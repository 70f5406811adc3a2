//! # Digest Pipeline
//!
//! Entry point that takes a raw swarm result all the way to cleaned
//! fragments plus extracted content.
//!
//! ```text
//! raw result → resolve payload → clean fragments → extract content → (report)
//! ```

use serde_json::Value;
use std::io::{self, Write};

use crate::models::{text_fragment, SwarmAnalysis, CONTENT_KEY};
use crate::tools::cleaner::clean_fragments;
use crate::tools::extractor::extract_content_with_diagnostics;
use crate::tools::summary::{format_summary, SummaryConfig};

/// Turn a raw swarm result into a fragment sequence.
///
/// The payload lives under `content` of a mapping; a bare array or string
/// is taken as the payload itself.
///
/// - array: used as is
/// - string: parsed as a JSON array; anything else becomes one synthetic
///   `{"text": raw}` fragment
/// - anything else: empty
pub fn resolve_payload(result: &Value) -> Vec<Value> {
    let payload = match result {
        Value::Object(map) => map.get(CONTENT_KEY),
        other => Some(other),
    };

    match payload {
        Some(Value::Array(fragments)) => fragments.clone(),
        Some(Value::String(raw)) => parse_fragments(raw),
        _ => Vec::new(),
    }
}

fn parse_fragments(raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(fragments)) => fragments,
        _ => vec![text_fragment(raw)],
    }
}

/// Resolve, clean and extract without printing anything
pub fn analyze_swarm_result(result: &Value) -> SwarmAnalysis {
    let fragments = resolve_payload(result);
    let cleaned_data = clean_fragments(&fragments);
    let (extracted_content, diagnostics) = extract_content_with_diagnostics(&cleaned_data);

    tracing::debug!(
        fragments = cleaned_data.len(),
        seen = diagnostics.fragments_seen,
        unclassified = diagnostics.fragments_unclassified,
        knowledge_failures = diagnostics.knowledge_parse_failures,
        responses = extracted_content.agent_responses.len(),
        metrics = extracted_content.metrics.len(),
        "Analyzed swarm result"
    );

    SwarmAnalysis {
        cleaned_data,
        extracted_content,
    }
}

/// Analyze a swarm result and, when `verbose`, print the summary to stdout
pub fn display_swarm_analysis(
    result: &Value,
    verbose: bool,
    config: &SummaryConfig,
) -> SwarmAnalysis {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report_swarm_analysis(&mut out, result, verbose, config)
}

/// Same as [`display_swarm_analysis`], writing the report to `out`
pub fn display_swarm_analysis_to<W: Write>(
    out: &mut W,
    result: &Value,
    verbose: bool,
    config: &SummaryConfig,
) -> io::Result<SwarmAnalysis> {
    let analysis = analyze_swarm_result(result);
    if verbose {
        write_summary(out, &analysis, config)?;
    }
    Ok(analysis)
}

/// Analyze once; a failed report write is logged and the analysis kept
fn report_swarm_analysis<W: Write>(
    out: &mut W,
    result: &Value,
    verbose: bool,
    config: &SummaryConfig,
) -> SwarmAnalysis {
    let analysis = analyze_swarm_result(result);
    if verbose {
        if let Err(e) = write_summary(out, &analysis, config) {
            tracing::warn!("Failed to write swarm summary: {}", e);
        }
    }
    analysis
}

fn write_summary<W: Write>(
    out: &mut W,
    analysis: &SwarmAnalysis,
    config: &SummaryConfig,
) -> io::Result<()> {
    writeln!(out, "{}", format_summary(&analysis.extracted_content, config))
}
