//! Line classification for line-oriented trace files.
//!
//! Every raw line is exactly one of: a trace record, a comment, or blank.
//! Only trace records advance the TraceIndex.

use crate::parser::fields::is_field_separator;

/// Kind of a raw line in a trace file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A record that carries a job
    Trace,
    /// A comment, offered to the metadata scanner
    Comment,
    /// Empty or whitespace-only, ignored
    Blank,
}

/// Classify a raw line against a dialect's comment marker
///
/// **Public** - the default classifier every dialect builds on
///
/// # Arguments
/// * `comment_marker` - Prefix that starts a comment (e.g. `#`)
/// * `line` - Raw line, untrimmed
///
/// # Returns
/// `Blank` for whitespace-only lines, `Comment` when the first
/// non-whitespace text is the marker, `Trace` otherwise
pub fn classify_line(comment_marker: &str, line: &str) -> LineKind {
    let trimmed = line.trim_start_matches(is_field_separator);
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(comment_marker) {
        LineKind::Comment
    } else {
        LineKind::Trace
    }
}

/// Convenience wrapper mirroring the classic `isTraceLine` check
pub fn is_trace_line(comment_marker: &str, line: &str) -> bool {
    classify_line(comment_marker, line) == LineKind::Trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line("#", ""), LineKind::Blank);
        assert_eq!(classify_line("#", "   \t "), LineKind::Blank);
        assert_eq!(classify_line("#", "\x0B\x0C\r"), LineKind::Blank);
    }

    #[test]
    fn test_non_ascii_space_is_content() {
        assert_eq!(classify_line("#", "\u{00a0}"), LineKind::Trace);
        assert_eq!(classify_line("#", "\u{00a0}# not a comment"), LineKind::Trace);
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(classify_line("#", "# Processors 4"), LineKind::Comment);
        assert_eq!(classify_line("#", "   #indented"), LineKind::Comment);
        assert_eq!(classify_line("#", "#"), LineKind::Comment);
    }

    #[test]
    fn test_trace_lines() {
        assert_eq!(classify_line("#", "1 15000 abcwXYZ"), LineKind::Trace);
        assert_eq!(classify_line("#", "  1 2 3 # trailing"), LineKind::Trace);
        assert!(is_trace_line("#", "1 15000 abcwXYZ"));
        assert!(!is_trace_line("#", "# nope"));
    }

    #[test]
    fn test_other_marker() {
        assert_eq!(classify_line(";", "; comment"), LineKind::Comment);
        assert_eq!(classify_line(";", "# not a comment here"), LineKind::Trace);
    }
}
