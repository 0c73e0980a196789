//! Trace reader foundation.
//!
//! This module handles:
//! - The `Dialect` capability set every trace format implements
//! - The `JobFactory` seam jobs are built through
//! - TraceIndex window filtering and the read-further policy
//! - Lazy, restartable enumeration over a trace file

pub mod dialect;
pub mod factory;
pub mod filter;
pub mod foundation;

// Re-export main types
pub use dialect::{Dialect, RawRecord};
pub use factory::{spec_factory, JobFactory};
pub use filter::{Decision, RangeSpec, RecordFilter};
pub use foundation::{Jobs, ReaderState, TraceReader};

use crate::parser::wiki::WikiDialect;
use crate::utils::error::ReaderError;
use std::path::Path;

/// Open a Wiki/GWF trace with the default dialect parameters
///
/// **Public** - shorthand for `TraceReader::open` with `WikiDialect`
///
/// # Errors
/// * `ReaderError::InvalidRange` - `to < from`
/// * `ReaderError::Open` - the file cannot be opened
pub fn open_wiki_trace<F: JobFactory>(
    path: impl AsRef<Path>,
    from: u64,
    to: u64,
    allow_reading_further: bool,
    factory: F,
) -> Result<TraceReader<WikiDialect, F>, ReaderError> {
    let range = RangeSpec::new(from, to, allow_reading_further)?;
    TraceReader::open(path, range, WikiDialect::new(), factory)
}
