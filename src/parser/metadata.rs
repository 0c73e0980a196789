//! Header facts scavenged from trace comments.
//!
//! Metadata is advisory: malformed comments never fail a read.

use crate::parser::fields::is_field_separator;
use crate::utils::config::PROCESSORS_KEY;
use log::debug;

/// Facts collected from comment lines while reading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceMetadata {
    /// Total processor count announced by a `Processors` comment
    pub max_proc_count: Option<i64>,
}

impl TraceMetadata {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Scan a GWF comment line for the processor count
///
/// **Public** - the Wiki/GWF dialect's metadata scanner
///
/// If the line mentions `Processors` and its last whitespace-separated
/// token is an integer, that value replaces `max_proc_count`. Anything
/// else (including `# Processors: unknown`) leaves the metadata untouched.
pub fn scan_processors(line: &str, metadata: &mut TraceMetadata) {
    if !line.contains(PROCESSORS_KEY) {
        return;
    }

    let Some(last) = line
        .split(is_field_separator)
        .filter(|token| !token.is_empty())
        .next_back()
    else {
        return;
    };

    match last.parse::<i64>() {
        Ok(count) => {
            debug!("Trace announces {} processors", count);
            metadata.max_proc_count = Some(count);
        }
        Err(_) => {
            // nothing useful in this comment
            debug!("Ignoring processor comment without a count: {}", line.trim());
        }
    }
}
