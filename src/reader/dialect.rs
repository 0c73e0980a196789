//! Dialect capability set.
//!
//! The reader foundation is dialect-neutral: it asks a `Dialect` how to
//! classify lines, what to pull out of comments, and how to turn a trace
//! record into a `JobSpec`.

use crate::parser::line::{classify_line, LineKind};
use crate::parser::metadata::TraceMetadata;
use crate::parser::schema::JobSpec;
use crate::utils::error::RecordError;
use rand::rngs::StdRng;

/// A trace line together with its TraceIndex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub index: u64,
    pub line: String,
}

/// Everything a trace format has to provide to be readable
pub trait Dialect {
    /// Human readable dialect name, used for diagnostics only
    fn label(&self) -> &str;

    /// Prefix that marks comment lines
    fn comment_marker(&self) -> &str;

    /// Classify a raw line; the default honours `comment_marker`
    fn classify(&self, line: &str) -> LineKind {
        classify_line(self.comment_marker(), line)
    }

    /// Collect header facts from a comment line
    fn scan_metadata(&self, line: &str, metadata: &mut TraceMetadata);

    /// Turn a record into job arguments
    ///
    /// `Ok(None)` rejects the record silently; `Err` reports a record the
    /// dialect considers malformed.
    fn build_job(
        &self,
        record: &RawRecord,
        rng: &mut StdRng,
    ) -> Result<Option<JobSpec>, RecordError>;
}
