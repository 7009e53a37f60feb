//! Identifier validation for field names spliced into AQL.
//!
//! Field names from a filter spec end up unescaped in the output
//! (`var.<field>`), so they are held to a strict shape:
//! - Dot-separated segments (`address.city`)
//! - Each segment starts with an ASCII letter or underscore
//! - Each segment continues with ASCII letters, digits or underscores
//! - No segment equals a reserved AQL statement or data modification keyword
//!
//! This is a syntax guard, not a complete defence against every kind of
//! injection.
//!
//! ```rust
//! use aql_filter_query::identifier::{is_valid_identifier, validate_identifier};
//!
//! assert!(is_valid_identifier("firstName"));
//! assert!(is_valid_identifier("address.city"));
//! assert!(!is_valid_identifier("foo, bar"));
//! assert!(validate_identifier("INSeRT").unwrap_err().is_identifier_error());
//! ```

use crate::error::{QueryError, QueryResult};

/// Maximum length of an identifier in bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Keywords that may not appear as an identifier segment (compared case-insensitively).
pub const RESERVED_KEYWORDS: &[&str] = &[
    // data modification
    "insert", "update", "replace", "remove", "upsert", "delete", "drop", "truncate", "into",
    // statement level
    "for", "return", "filter", "let", "collect", "with",
];

/// Check whether `name` is a safe identifier.
#[inline]
pub fn is_valid_identifier(name: &str) -> bool {
    validate_identifier(name).is_ok()
}

/// Validate an identifier, possibly dotted.
pub fn validate_identifier(name: &str) -> QueryResult<()> {
    if name.is_empty() {
        return Err(QueryError::invalid_identifier(name, "must not be empty"));
    }
    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(QueryError::invalid_identifier(
            name,
            &format!("longer than {} bytes", MAX_IDENTIFIER_LENGTH),
        ));
    }

    for segment in name.split('.') {
        validate_segment(name, segment)?;
    }
    Ok(())
}

/// Validate a single, undotted identifier such as a variable or collection name.
pub fn validate_simple_identifier(name: &str) -> QueryResult<()> {
    if name.contains('.') {
        return Err(QueryError::invalid_identifier(name, "must not contain '.'"));
    }
    validate_identifier(name)
}

fn validate_segment(name: &str, segment: &str) -> QueryResult<()> {
    let mut chars = segment.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(c) if c.is_ascii_digit() => {
            return Err(QueryError::invalid_identifier(
                name,
                "segments must not start with a digit",
            ));
        }
        Some(c) => return Err(QueryError::invalid_identifier(name, &describe(c))),
        None => {
            return Err(QueryError::invalid_identifier(
                name,
                "contains an empty segment",
            ));
        }
    }

    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(QueryError::invalid_identifier(name, &describe(c)));
    }

    if let Some(keyword) = reserved_keyword(segment) {
        return Err(QueryError::reserved_identifier(
            name,
            &keyword.to_ascii_uppercase(),
        ));
    }

    Ok(())
}

/// Return the reserved keyword `segment` collides with, if any.
pub fn reserved_keyword(segment: &str) -> Option<&'static str> {
    RESERVED_KEYWORDS
        .iter()
        .copied()
        .find(|kw| kw.eq_ignore_ascii_case(segment))
}

fn describe(c: char) -> String {
    if c.is_whitespace() {
        "contains whitespace".to_string()
    } else {
        format!("contains disallowed character {:?}", c)
    }
}
