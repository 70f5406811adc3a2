//! # Digest Tools
//!
//! Deterministic text processing over swarm output fragments.
//!
//! ## Modules
//!
//! - `cleaner` - ANSI and box-drawing cleanup, per value and per batch
//! - `extractor` - Status / response / metrics / knowledge classification
//! - `summary` - Plain-text report rendering

pub mod cleaner;
pub mod extractor;
pub mod summary;

pub use cleaner::{clean_fragments, clean_text, clean_value};
pub use extractor::{classify, extract_content, extract_content_with_diagnostics, FragmentKind};
pub use summary::{format_summary, SummaryConfig};
