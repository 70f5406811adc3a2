//! # Swarm Output Processing
//!
//! Runs the digest pipeline over the result of a multi-agent run.

pub mod pipeline;

pub use pipeline::{
    analyze_swarm_result, display_swarm_analysis, display_swarm_analysis_to, resolve_payload,
};
