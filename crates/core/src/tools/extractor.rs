//! # Content Extractor
//!
//! Sorts cleaned fragments into the few sections a reader of a swarm run
//! cares about. Each fragment lands in at most one category, checked in
//! this order:
//!
//! 1. status: contains `Swarm Status`
//! 2. response: `Agent agent_N ... Response:` on one line
//! 3. metrics: `Agent agent_N ... Metrics:` on one line
//! 4. knowledge: contains `Collective Knowledge:` followed by a JSON array
//!
//! Extraction never fails. A knowledge section whose JSON does not parse is
//! dropped and only counted in [`ExtractionDiagnostics`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::{
    fragment_text, AgentMetrics, AgentResponse, ExtractedContent, ExtractionDiagnostics,
    KnowledgeItem, CONTENT_KEY,
};
use crate::tools::cleaner::{clean_text, clean_value};

const STATUS_MARKER: &str = "Swarm Status";
const RESPONSE_MARKER: &str = "Response:";
const METRICS_MARKER: &str = "Metrics:";
const METRICS_DELIMITER: &str = "\n\nMetrics:";
const KNOWLEDGE_MARKER: &str = "Collective Knowledge:";

/// Agent id used when a fragment matched but the id could not be captured
pub const UNKNOWN_AGENT: &str = "unknown";

static RESPONSE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Agent agent_\d+.*Response:").expect("valid response pattern"));
static METRICS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Agent agent_\d+.*Metrics:").expect("valid metrics pattern"));
static AGENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Agent (agent_\d+)").expect("valid agent id pattern"));

// ============================================================================
// Classification
// ============================================================================

/// Category a fragment falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Status,
    Response,
    Metrics,
    Knowledge,
}

/// Classify fragment text, first matching rule wins
pub fn classify(text: &str) -> Option<FragmentKind> {
    if text.contains(STATUS_MARKER) {
        Some(FragmentKind::Status)
    } else if RESPONSE_LINE.is_match(text) {
        Some(FragmentKind::Response)
    } else if METRICS_LINE.is_match(text) {
        Some(FragmentKind::Metrics)
    } else if text.contains(KNOWLEDGE_MARKER) {
        Some(FragmentKind::Knowledge)
    } else {
        None
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract status, responses, metrics and knowledge from fragments
pub fn extract_content(fragments: &[Value]) -> ExtractedContent {
    extract_content_with_diagnostics(fragments).0
}

/// Same as [`extract_content`], also reporting what was skipped
pub fn extract_content_with_diagnostics(
    fragments: &[Value],
) -> (ExtractedContent, ExtractionDiagnostics) {
    let mut content = ExtractedContent::default();
    let mut diagnostics = ExtractionDiagnostics::default();

    for text in fragments.iter().filter_map(fragment_text) {
        diagnostics.fragments_seen += 1;

        match classify(text) {
            Some(FragmentKind::Status) => {
                content.swarm_status = Some(clean_text(text));
            }
            Some(FragmentKind::Response) => {
                let agent = agent_id(text);
                let (response, trailing_metrics) = split_response(text);
                if let Some(metrics) = trailing_metrics {
                    content.metrics.push(AgentMetrics {
                        agent_id: agent.clone(),
                        metrics,
                    });
                }
                content.agent_responses.push(AgentResponse {
                    agent_id: agent,
                    response,
                });
            }
            Some(FragmentKind::Metrics) => {
                content.metrics.push(AgentMetrics {
                    agent_id: agent_id(text),
                    metrics: section_after(text, METRICS_MARKER),
                });
            }
            Some(FragmentKind::Knowledge) => match parse_knowledge(text) {
                Some(items) => content.collective_knowledge = items,
                None => diagnostics.knowledge_parse_failures += 1,
            },
            None => diagnostics.fragments_unclassified += 1,
        }
    }

    (content, diagnostics)
}

fn agent_id(text: &str) -> String {
    AGENT_ID
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_AGENT.to_string(), |m| m.as_str().to_string())
}

/// Response body plus the metrics block that trails it, if any.
///
/// The body runs from the first `Response:` to the first `\n\nMetrics:`.
/// A delimiter sitting before `Response:` leaves the body empty.
fn split_response(text: &str) -> (String, Option<String>) {
    let start = text
        .find(RESPONSE_MARKER)
        .map_or(text.len(), |i| i + RESPONSE_MARKER.len());

    match text.find(METRICS_DELIMITER) {
        Some(delimiter) => {
            let body = if delimiter >= start {
                &text[start..delimiter]
            } else {
                ""
            };
            let metrics = &text[delimiter + METRICS_DELIMITER.len()..];
            (clean_text(body.trim()), Some(clean_text(metrics.trim())))
        }
        None => (clean_text(text[start..].trim()), None),
    }
}

/// Everything after the first `marker`, trimmed and cleaned
fn section_after(text: &str, marker: &str) -> String {
    let start = text.find(marker).map_or(text.len(), |i| i + marker.len());
    clean_text(text[start..].trim())
}

/// Parse the JSON array that follows `Collective Knowledge:`.
///
/// `None` when there is no `[` after the marker or the array does not
/// parse. Elements that are not mappings are kept unchanged.
fn parse_knowledge(text: &str) -> Option<Vec<KnowledgeItem>> {
    let marker = text.find(KNOWLEDGE_MARKER)?;
    let open = marker + text[marker..].find('[')?;

    let mut items: Vec<KnowledgeItem> = serde_json::from_str(&text[open..]).ok()?;
    for item in &mut items {
        if let Some(content) = item.0.get_mut(CONTENT_KEY) {
            *content = clean_value(content);
        }
    }
    Some(items)
}
