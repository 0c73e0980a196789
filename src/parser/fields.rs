//! Field-level helpers shared by whitespace-delimited dialects.

use crate::utils::config::{NOT_APPLICABLE, NOT_APPLICABLE_MARKER};
use crate::utils::error::RecordError;

/// Whether `c` separates fields: ASCII space, tab, line feed, vertical
/// tab, form feed or carriage return
///
/// Other Unicode whitespace (e.g. NO-BREAK SPACE) is field content.
pub fn is_field_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Split a record into its whitespace-separated tokens
///
/// **Public** - leading/trailing whitespace never yields empty tokens
pub fn tokenise(line: &str) -> Vec<&str> {
    line.split(is_field_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse an integer field
///
/// **Public** - used for job state, submit time and metadata values
///
/// # Arguments
/// * `field` - Field name, reported in the error
/// * `token` - Text to parse
///
/// # Errors
/// * `RecordError::InvalidNumber` - token is not a base-10 integer
pub fn parse_integer(field: &'static str, token: &str) -> Result<i64, RecordError> {
    token.parse::<i64>().map_err(|_| RecordError::InvalidNumber {
        field,
        value: token.to_string(),
    })
}

/// Normalise a textual field: `-1` means "not applicable"
pub fn textual_field(token: &str) -> String {
    if token == NOT_APPLICABLE_MARKER {
        NOT_APPLICABLE.to_string()
    } else {
        token.to_string()
    }
}

/// Drop the last `count` characters of a token
///
/// Returns `None` when the token has `count` characters or fewer.
pub fn drop_trailing_chars(token: &str, count: usize) -> Option<&str> {
    let kept = token.chars().count().checked_sub(count).filter(|n| *n > 0)?;
    let end = token
        .char_indices()
        .nth(kept)
        .map_or(token.len(), |(idx, _)| idx);
    Some(&token[..end])
}
