//! # Summary Formatter
//!
//! Renders [`ExtractedContent`] as the plain-text report printed after a
//! swarm run. Sections appear in a fixed order and only when they have
//! something to show; the title banner is always present.

use serde::{Deserialize, Serialize};

use crate::models::ExtractedContent;

const TITLE: &str = "SWARM ANALYSIS SUMMARY";
const TITLE_RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 40;
const ELLIPSIS: &str = "...";

// ============================================================================
// Configuration
// ============================================================================

/// Rendering options for the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Responses longer than this many characters are cut and get `...`
    pub max_response_length: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_response_length: 500,
        }
    }
}

impl SummaryConfig {
    pub fn with_max_response_length(max_response_length: usize) -> Self {
        Self {
            max_response_length,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Format extracted content as a readable multi-line summary
pub fn format_summary(content: &ExtractedContent, config: &SummaryConfig) -> String {
    let section_rule = "-".repeat(SECTION_RULE_WIDTH);
    let mut lines: Vec<String> = vec![TITLE.to_string(), "=".repeat(TITLE_RULE_WIDTH)];

    if let Some(status) = content.swarm_status.as_deref().filter(|s| !s.is_empty()) {
        lines.push("\nSWARM STATUS:".to_string());
        lines.push(section_rule.clone());
        lines.push(status.to_string());
    }

    if !content.agent_responses.is_empty() {
        lines.push("\nAGENT RESPONSES:".to_string());
        lines.push(section_rule.clone());

        for response in &content.agent_responses {
            lines.push(format!("\n{}:", response.agent_id));
            lines.push(truncate_chars(&response.response, config.max_response_length));
        }
    }

    if !content.metrics.is_empty() {
        lines.push("\n\nPERFORMANCE METRICS:".to_string());
        lines.push(section_rule);

        for metric in &content.metrics {
            lines.push(format!("\n{}:", metric.agent_id));
            lines.push(metric.metrics.clone());
        }
    }

    lines.join("\n")
}

/// First `max` characters plus `...` when the text is longer than `max`
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgentMetrics, AgentResponse};

    fn response(agent_id: &str, text: &str) -> AgentResponse {
        AgentResponse {
            agent_id: agent_id.into(),
            response: text.into(),
        }
    }

    #[test]
    fn test_empty_content_has_only_banner() {
        let summary = format_summary(&ExtractedContent::default(), &SummaryConfig::default());
        assert_eq!(summary, format!("SWARM ANALYSIS SUMMARY\n{}", "=".repeat(60)));
    }

    #[test]
    fn test_full_layout() {
        let content = ExtractedContent {
            swarm_status: Some("Swarm Status: active".into()),
            agent_responses: vec![response("agent_1", "Hello")],
            metrics: vec![AgentMetrics {
                agent_id: "agent_1".into(),
                metrics: "latency=5ms".into(),
            }],
            collective_knowledge: Vec::new(),
        };

        let rule = "-".repeat(40);
        let expected = [
            "SWARM ANALYSIS SUMMARY".to_string(),
            "=".repeat(60),
            "\nSWARM STATUS:".to_string(),
            rule.clone(),
            "Swarm Status: active".to_string(),
            "\nAGENT RESPONSES:".to_string(),
            rule.clone(),
            "\nagent_1:".to_string(),
            "Hello".to_string(),
            "\n\nPERFORMANCE METRICS:".to_string(),
            rule,
            "\nagent_1:".to_string(),
            "latency=5ms".to_string(),
        ]
        .join("\n");

        assert_eq!(format_summary(&content, &SummaryConfig::default()), expected);
    }

    #[test]
    fn test_empty_status_is_skipped() {
        let content = ExtractedContent {
            swarm_status: Some(String::new()),
            ..Default::default()
        };
        let summary = format_summary(&content, &SummaryConfig::default());
        assert!(!summary.contains("SWARM STATUS"));
    }

    #[test]
    fn test_truncation_boundary() {
        let config = SummaryConfig::with_max_response_length(10);

        let long = ExtractedContent {
            agent_responses: vec![response("agent_1", "abcdefghijk")],
            ..Default::default()
        };
        let summary = format_summary(&long, &config);
        assert!(summary.ends_with("\nabcdefghij..."));

        let exact = ExtractedContent {
            agent_responses: vec![response("agent_1", "abcdefghij")],
            ..Default::default()
        };
        let summary = format_summary(&exact, &config);
        assert!(summary.ends_with("\nabcdefghij"));
        assert!(!summary.contains("..."));
    }

    #[test]
    fn test_truncation_counts_chars() {
        assert_eq!(truncate_chars("ééééé", 3), "ééé...");
        assert_eq!(truncate_chars("日本語", 3), "日本語");
        assert_eq!(truncate_chars("abc", 0), "...");
    }

    #[test]
    fn test_metrics_are_not_truncated() {
        let metrics = "m".repeat(50);
        let content = ExtractedContent {
            metrics: vec![AgentMetrics {
                agent_id: "agent_9".into(),
                metrics: metrics.clone(),
            }],
            ..Default::default()
        };
        let summary = format_summary(&content, &SummaryConfig::with_max_response_length(5));
        assert!(summary.ends_with(&metrics));
    }

    #[test]
    fn test_config_defaults_when_deserialized() {
        let config: SummaryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_response_length, 500);
    }
}
