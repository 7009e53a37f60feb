//! Sort entries and the `SORT` fragment.
//!
//! Each entry of a filter spec's `sort` list is `"<field>"` or
//! `"<field> <direction>"`; the direction is `asc` or `desc` in any case and
//! defaults to ascending.
//!
//! ```rust
//! use aql_filter_query::sort::{SortField, SortOrder};
//!
//! let field = SortField::parse("lastName dESc").unwrap();
//! assert_eq!(field.order, SortOrder::Desc);
//!
//! let mut buffer = String::new();
//! field.write_aql("doc", &mut buffer);
//! assert_eq!(buffer, "doc.lastName DESC");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{QueryError, QueryResult};
use crate::identifier::validate_identifier;

/// Sort order for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Get the AQL keyword for this sort order.
    pub fn as_aql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_aql())
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(QueryError::sort_direction("sort", s))
        }
    }
}

/// A validated sort field with its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    /// The field to sort by.
    pub field: String,
    /// The sort order.
    pub order: SortOrder,
}

impl SortField {
    /// Create a sort field, validating the identifier.
    pub fn new(field: impl Into<String>, order: SortOrder) -> QueryResult<Self> {
        let field = field.into();
        validate_identifier(&field)?;
        Ok(Self { field, order })
    }

    /// Parse a `"<field> [asc|desc]"` entry.
    pub fn parse(entry: &str) -> QueryResult<Self> {
        let mut tokens = entry.split_whitespace();
        let field = tokens.next().unwrap_or_default();
        let direction = tokens.next();
        if tokens.next().is_some() {
            return Err(QueryError::sort_syntax("sort", entry));
        }

        let order = match direction {
            Some(direction) => direction.parse()?,
            None => SortOrder::Asc,
        };
        Self::new(field, order)
    }

    /// Write `<variable>.<field> ASC|DESC` to a buffer.
    #[inline]
    pub fn write_aql(&self, variable: &str, buffer: &mut String) {
        buffer.push_str(variable);
        buffer.push('.');
        buffer.push_str(&self.field);
        buffer.push(' ');
        buffer.push_str(self.order.as_aql());
    }
}

/// Format a list of sort entries into a `SORT` fragment (without the keyword).
///
/// An empty list yields an empty string.
pub fn format_sort<S: AsRef<str>>(entries: &[S], variable: &str) -> QueryResult<String> {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let field = SortField::parse(entry.as_ref()).map_err(|e| e.at(format!("sort[{}]", i)))?;
        if i > 0 {
            out.push_str(", ");
        }
        field.write_aql(variable, &mut out);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_sort() {
        let sort = format_sort(&["firstName ASC", "lastName dESc", "age"], "var").unwrap();
        assert_eq!(sort, "var.firstName ASC, var.lastName DESC, var.age ASC");
    }

    #[test]
    fn test_format_sort_empty() {
        let entries: [&str; 0] = [];
        assert_eq!(format_sort(&entries, "var").unwrap(), "");
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        let sort = format_sort(&["  age\tdesc "], "doc").unwrap();
        assert_eq!(sort, "doc.age DESC");
    }

    #[test]
    fn test_invalid_character() {
        let err = format_sort(&["foo, bar"], "var").unwrap_err();
        assert!(err.is_sort_error() || err.is_identifier_error());
        assert_eq!(err.context.location.as_deref(), Some("sort[0]"));
    }

    #[test]
    fn test_reserved_keyword() {
        let err = format_sort(&["INSeRT ASC"], "var").unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservedIdentifier);
    }

    #[test]
    fn test_too_many_tokens() {
        let err = format_sort(&["age", "name asc nulls"], "var").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSortSyntax);
        assert_eq!(err.context.location.as_deref(), Some("sort[1]"));
    }

    #[test]
    fn test_invalid_direction() {
        let err = SortField::parse("age upward").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSortDirection);
    }

    #[test]
    fn test_blank_entry() {
        let err = SortField::parse("   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidIdentifier);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("descending".parse::<SortOrder>().is_err());
    }
}
