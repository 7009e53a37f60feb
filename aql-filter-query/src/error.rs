//! Error types for filter processing with actionable messages.
//!
//! Every error produced while turning a filter spec into AQL fragments is a
//! [`QueryError`]. Errors carry:
//! - An [`ErrorCode`] for programmatic handling
//! - The location in the filter spec that was rejected
//! - Suggestions for fixing the input
//!
//! # Error Codes
//!
//! Error codes follow a pattern: F{category}{number}
//! - 1xxx: Decode errors (malformed JSON)
//! - 2xxx: Sort errors (token count, direction)
//! - 3xxx: Where errors (shape, operand type, depth)
//! - 4xxx: Identifier errors (bad characters, reserved keywords)
//! - 7xxx: Configuration errors
//! - 9xxx: Internal errors
//!
//! ```rust
//! use aql_filter_query::{ErrorCode, QueryError};
//!
//! let err = QueryError::where_type("where[0].money.eq", "integer operand, expected a floating-point number");
//! assert_eq!(err.code, ErrorCode::InvalidWhereType);
//! assert_eq!(err.code.code(), "F3002");
//! assert!(err.is_where_error());
//! ```
//!
//! None of these errors are retryable: the input itself is invalid and should
//! be rejected back to the client (e.g. as a bad request).

use std::fmt;
use thiserror::Error;

/// Result type for filter operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Decode errors (1xxx)
    /// Filter spec could not be decoded (F1001).
    DecodeFailed = 1001,

    // Sort errors (2xxx)
    /// Sort entry has the wrong number of tokens (F2001).
    InvalidSortSyntax = 2001,
    /// Sort direction is neither `asc` nor `desc` (F2002).
    InvalidSortDirection = 2002,

    // Where errors (3xxx)
    /// Condition value has the wrong shape (F3001).
    InvalidWhereShape = 3001,
    /// Comparison operand has the wrong type (F3002).
    InvalidWhereType = 3002,
    /// Condition tree nests deeper than allowed (F3003).
    WhereTooDeep = 3003,

    // Identifier errors (4xxx)
    /// Identifier contains disallowed characters (F4001).
    InvalidIdentifier = 4001,
    /// Identifier collides with a reserved keyword (F4002).
    ReservedIdentifier = 4002,

    // Configuration errors (7xxx)
    /// Invalid processor configuration (F7001).
    InvalidConfiguration = 7001,

    // Internal errors (9xxx)
    /// Internal error (F9001).
    Internal = 9001,
}

impl ErrorCode {
    /// Get the error code string (e.g., "F3001").
    pub fn code(&self) -> String {
        format!("F{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DecodeFailed => "Malformed filter spec",
            Self::InvalidSortSyntax => "Invalid sort entry",
            Self::InvalidSortDirection => "Invalid sort direction",
            Self::InvalidWhereShape => "Invalid where condition",
            Self::InvalidWhereType => "Invalid comparison operand",
            Self::WhereTooDeep => "Where condition nested too deeply",
            Self::InvalidIdentifier => "Invalid identifier",
            Self::ReservedIdentifier => "Reserved identifier",
            Self::InvalidConfiguration => "Invalid configuration",
            Self::Internal => "Internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Suggestion for fixing an error.
#[derive(Debug, Clone)]
pub struct Suggestion {
    /// The suggestion text.
    pub text: String,
    /// Optional example input.
    pub example: Option<String>,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            example: None,
        }
    }

    /// Add an example input.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Additional context for an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Location of the offending node, e.g. `where[0].or[1].age`.
    pub location: Option<String>,
    /// The identifier involved.
    pub field: Option<String>,
    /// Suggestions for fixing the error.
    pub suggestions: Vec<Suggestion>,
    /// Help text.
    pub help: Option<String>,
}

/// Errors that can occur while processing a filter spec.
#[derive(Error, Debug)]
pub struct QueryError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Additional context.
    pub context: ErrorContext,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)?;
        if let Some(ref location) = self.context.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

impl QueryError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Set the location in the filter spec.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.context.location = Some(location.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context.suggestions.push(Suggestion::new(suggestion));
        self
    }

    /// Add a suggestion with an example input.
    pub fn with_example_suggestion(
        mut self,
        text: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        self.context
            .suggestions
            .push(Suggestion::new(text).with_example(example));
        self
    }

    /// Add help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Set the identifier.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // ============== Constructor Functions ==============

    /// Create a decode error from a JSON error.
    pub fn decode(source: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::DecodeFailed,
            format!("Failed to decode filter spec: {}", source),
        )
        .with_suggestion("Check that the filter is a JSON object")
        .with_example_suggestion(
            "A minimal filter looks like this",
            r#"{"limit": 10, "sort": ["name"], "where": [{"active": true}]}"#,
        )
        .with_source(source)
    }

    /// Create a sort syntax error.
    pub fn sort_syntax(location: impl Into<String>, entry: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSortSyntax,
            format!("Sort entry '{}' must be '<field>' or '<field> <direction>'", entry),
        )
        .at(location)
        .with_example_suggestion("Use one field per entry", r#"["lastName DESC", "age"]"#)
    }

    /// Create a sort direction error.
    pub fn sort_direction(location: impl Into<String>, direction: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSortDirection,
            format!("Sort direction '{}' must be 'asc' or 'desc'", direction),
        )
        .at(location)
        .with_suggestion("Omit the direction to sort ascending")
    }

    /// Create a where shape error.
    pub fn where_shape(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidWhereShape, message).at(location)
    }

    /// Create a where operand type error.
    pub fn where_type(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidWhereType, message)
            .at(location)
            .with_help("Numbers in filters are floating-point; booleans and strings are also accepted")
    }

    /// Create a nesting depth error.
    pub fn too_deep(location: impl Into<String>, max_depth: usize) -> Self {
        Self::new(
            ErrorCode::WhereTooDeep,
            format!("Condition nesting exceeds the maximum depth of {}", max_depth),
        )
        .at(location)
        .with_suggestion("Flatten nested and/or/not conditions")
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(field: impl Into<String>, reason: &str) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::InvalidIdentifier,
            format!("Invalid identifier '{}': {}", field, reason),
        )
        .with_field(&field)
        .with_help(
            "Identifiers are dot-separated segments of ASCII letters, digits and underscores, \
             not starting with a digit",
        )
    }

    /// Create a reserved identifier error.
    pub fn reserved_identifier(field: impl Into<String>, keyword: &str) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::ReservedIdentifier,
            format!("Identifier '{}' uses reserved keyword '{}'", field, keyword),
        )
        .with_field(&field)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(
            ErrorCode::InvalidConfiguration,
            format!("Invalid configuration: {}", message),
        )
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(ErrorCode::Internal, format!("Internal error: {}", message))
    }

    // ============== Error Checks ==============

    /// Check if this is a decode error.
    pub fn is_decode_error(&self) -> bool {
        self.code == ErrorCode::DecodeFailed
    }

    /// Check if this is a sort error.
    pub fn is_sort_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InvalidSortSyntax | ErrorCode::InvalidSortDirection
        )
    }

    /// Check if this is a where error.
    pub fn is_where_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InvalidWhereShape | ErrorCode::InvalidWhereType | ErrorCode::WhereTooDeep
        )
    }

    /// Check if this is an identifier error.
    pub fn is_identifier_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InvalidIdentifier | ErrorCode::ReservedIdentifier
        )
    }

    /// Check if this error is retryable.
    ///
    /// Always `false`: every error describes invalid caller input.
    pub fn is_retryable(&self) -> bool {
        false
    }

    // ============== Display Functions ==============

    /// Display the full error with all context and suggestions.
    pub fn display_full(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error [{}]: {}\n", self.code.code(), self.message));

        if let Some(ref location) = self.context.location {
            output.push_str(&format!("  → At: {}\n", location));
        }
        if let Some(ref field) = self.context.field {
            output.push_str(&format!("  → Identifier: {}\n", field));
        }

        if !self.context.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for (i, suggestion) in self.context.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion.text));
                if let Some(ref example) = suggestion.example {
                    output.push_str(&format!("     {}\n", example));
                }
            }
        }

        if let Some(ref help) = self.context.help {
            output.push_str(&format!("\nHelp: {}\n", help));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::DecodeFailed.code(), "F1001");
        assert_eq!(ErrorCode::InvalidSortSyntax.code(), "F2001");
        assert_eq!(ErrorCode::InvalidWhereShape.code(), "F3001");
        assert_eq!(ErrorCode::ReservedIdentifier.code(), "F4002");
    }

    #[test]
    fn test_display_includes_location() {
        let err = QueryError::where_shape("where[0].and", "expected a list of condition maps");
        assert_eq!(
            err.to_string(),
            "[F3001] expected a list of condition maps (at where[0].and)"
        );
    }

    #[test]
    fn test_categories() {
        assert!(QueryError::sort_syntax("sort[0]", "a b c").is_sort_error());
        assert!(QueryError::sort_direction("sort[0]", "up").is_sort_error());
        assert!(QueryError::too_deep("where[0]", 4).is_where_error());
        assert!(QueryError::reserved_identifier("insert", "INSERT").is_identifier_error());
        assert!(!QueryError::invalid_identifier("a,b", "bad").is_where_error());
    }

    #[test]
    fn test_never_retryable() {
        assert!(!QueryError::too_deep("where[0]", 4).is_retryable());
        assert!(!QueryError::internal("boom").is_retryable());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = QueryError::decode(json_err);
        assert!(err.is_decode_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display_full() {
        let err = QueryError::invalid_identifier("first name", "contains whitespace")
            .at("where[0]");

        let output = err.display_full();
        assert!(output.contains("F4001"));
        assert!(output.contains("At: where[0]"));
        assert!(output.contains("Identifier: first name"));
        assert!(output.contains("Help:"));
    }

    #[test]
    fn test_suggestion_with_example() {
        let err = QueryError::sort_syntax("sort[1]", "a b c");
        let suggestion = err.context.suggestions.last().unwrap();
        assert!(suggestion.example.is_some());
    }
}
