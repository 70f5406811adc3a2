//! # Swarm Digest Core
//!
//! Turns the noisy console output of a multi-agent swarm run into something
//! a person can read: terminal escapes and box drawing are stripped, text
//! fragments are sorted into status, per-agent responses, per-agent metrics
//! and shared knowledge, and the result is rendered as a summary or saved as
//! cleaned JSON.
//!
//! ## Architecture
//!
//! - `tools/` - Cleaner, extractor and summary formatter
//! - `swarm/` - Pipeline entry point over a raw swarm result
//! - `state/` - Reading input and writing the cleaned artifact
//! - `models` - Fragment helpers and extracted records
//! - `config` - Optional JSON settings
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use swarm_digest_core::swarm::analyze_swarm_result;
//!
//! let result = json!({
//!     "content": [
//!         {"text": "Swarm Status: active"},
//!         {"text": "Agent agent_1 Response: Hello\n\nMetrics: latency=5ms"}
//!     ]
//! });
//! let analysis = analyze_swarm_result(&result);
//! assert_eq!(analysis.extracted_content.agent_responses[0].response, "Hello");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod swarm;
pub mod tools;

pub use config::{DigestConfig, OutputConfig};
pub use error::{DigestError, Result};
pub use models::{
    extracted_content_schema, AgentMetrics, AgentResponse, ExtractedContent,
    ExtractionDiagnostics, KnowledgeItem, SwarmAnalysis,
};
