//! Configuration and constants for the GWF dialect and the CLI.

use std::ops::Range;

/// Current job listing schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Diagnostic label of the Wiki/GWF dialect
pub const GWF_DIALECT_LABEL: &str = "Grid workload format";

// Line classification and metadata
pub const GWF_COMMENT_MARKER: &str = "#";
pub const PROCESSORS_KEY: &str = "Processors";

// Record-level conventions of the Wiki/ASKALON variant
pub const ASKALON_SUFFIX: &str = "ASKALON";
pub const UNSUPPORTED_REQUEST_SENTINEL: &str = "error:unsupported-request-method";
pub const NOT_APPLICABLE: &str = "N/A";
pub const NOT_APPLICABLE_MARKER: &str = "-1";
pub const NAME_SEPARATOR: char = 'w';

/// Sub-unit characters trailing every submit time token
pub const SUBMIT_TIME_SUFFIX_LEN: usize = 4;

/// Fields 0..=2 are read by the builder
pub const MIN_RECORD_FIELDS: usize = 3;

// Placeholder job shape, kept as the dialect defaults
pub const DEFAULT_PROCS_RANGE: Range<i64> = 1..4;
pub const DEFAULT_RUNTIME: i64 = 400;
pub const DEFAULT_WAIT_TIME: i64 = 0;
pub const DEFAULT_AVERAGE_EXECUTION_TIME: i64 = 300;
pub const DEFAULT_MEMORY: i64 = 300; // sentinel: no memory constraint

/// Environment variable consulted for a reproducible PRNG seed
pub const SEED_ENV_VAR: &str = "GWF_TRACE_SEED";
