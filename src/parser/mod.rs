//! Trace line parsing and job schema definitions.
//!
//! This module handles:
//! - Classifying raw lines (trace, comment, blank)
//! - Tokenising and normalising record fields
//! - Collecting metadata from comments
//! - The Wiki/GWF dialect and its job builder

pub mod fields;
pub mod line;
pub mod metadata;
pub mod schema;
pub mod wiki;

// Re-export main types
pub use line::{classify_line, is_trace_line, LineKind};
pub use metadata::{scan_processors, TraceMetadata};
pub use schema::{JobListing, JobSpec};
pub use wiki::{
    build_wiki_job, parse_wiki_record, ProcsDistribution, WikiDialect, WikiParams, WikiRecord,
};
