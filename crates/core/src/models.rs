//! # Digest Models
//!
//! Record types shared by the cleaner, extractor, summary formatter and
//! pipeline.
//!
//! Raw fragments stay as `serde_json::Value` because a swarm payload may mix
//! mappings with other JSON values, and everything that is not a mapping
//! with a `text` key has to survive cleaning untouched. The extracted record
//! on the other hand is fixed-shape.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the textual payload of a fragment
pub const TEXT_KEY: &str = "text";

/// Key holding the payload inside a raw swarm result
pub const CONTENT_KEY: &str = "content";

// ============================================================================
// Fragments
// ============================================================================

/// The string `text` of a fragment, if it is a mapping that has one
pub fn fragment_text(fragment: &Value) -> Option<&str> {
    fragment.as_object()?.get(TEXT_KEY)?.as_str()
}

/// Build a synthetic fragment wrapping raw text
pub fn text_fragment(text: impl Into<String>) -> Value {
    let mut map = Map::new();
    map.insert(TEXT_KEY.to_string(), Value::String(text.into()));
    Value::Object(map)
}

// ============================================================================
// Extracted Content
// ============================================================================

/// One agent's response, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AgentResponse {
    pub agent_id: String,
    pub response: String,
}

/// One agent's metrics block, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AgentMetrics {
    pub agent_id: String,
    pub metrics: String,
}

/// A shared-knowledge entry parsed from a `Collective Knowledge:` section.
///
/// Usually a mapping with a `content` field, but any JSON element the swarm
/// emitted is kept as is; only a mapping's `content` is rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct KnowledgeItem(pub Value);

impl KnowledgeItem {
    /// The `content` field as text, when this is a mapping holding a string
    pub fn content(&self) -> Option<&str> {
        self.0.get(CONTENT_KEY)?.as_str()
    }

    /// A field by name; `None` for non-mapping items
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Everything worth keeping from one swarm run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedContent {
    /// Last `Swarm Status` fragment seen
    pub swarm_status: Option<String>,
    pub agent_responses: Vec<AgentResponse>,
    pub metrics: Vec<AgentMetrics>,
    pub collective_knowledge: Vec<KnowledgeItem>,
}

impl ExtractedContent {
    /// True when no fragment was classified
    pub fn is_empty(&self) -> bool {
        self.swarm_status.is_none()
            && self.agent_responses.is_empty()
            && self.metrics.is_empty()
            && self.collective_knowledge.is_empty()
    }
}

/// Counters collected while extracting, kept out of [`ExtractedContent`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionDiagnostics {
    /// Fragments carrying a string `text`
    pub fragments_seen: usize,
    /// Text fragments that matched no category
    pub fragments_unclassified: usize,
    /// Knowledge sections dropped because their JSON did not parse
    pub knowledge_parse_failures: usize,
}

/// JSON Schema describing [`ExtractedContent`]
pub fn extracted_content_schema() -> Value {
    schemars::schema_for!(ExtractedContent).to_value()
}

// ============================================================================
// Pipeline Output
// ============================================================================

/// Result of running the full pipeline on a raw swarm result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwarmAnalysis {
    pub cleaned_data: Vec<Value>,
    pub extracted_content: ExtractedContent,
}
