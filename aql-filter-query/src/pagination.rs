//! Offset/limit fragment for `LIMIT` clauses.
//!
//! ```rust
//! use aql_filter_query::Pagination;
//!
//! assert_eq!(Pagination::new(3, 4).to_aql(), "3, 4");
//! assert_eq!(Pagination::new(1, 0).to_aql(), "1");
//! assert_eq!(Pagination::new(0, 2).to_aql(), "2");
//! assert!(Pagination::new(0, 0).is_empty());
//! ```
//!
//! Zero means "not set" for both values. Negative values are passed through
//! unchanged; the query engine decides what they mean.

use std::fmt::Write;

/// Offset and limit taken from a filter spec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Number of records to skip.
    pub offset: i64,
    /// Maximum number of records to return.
    pub limit: i64,
}

impl Pagination {
    /// Create a pagination from an offset and a limit.
    pub const fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Check if neither value is set.
    pub fn is_empty(&self) -> bool {
        self.offset == 0 && self.limit == 0
    }

    /// Generate the fragment, e.g. `"10, 20"`.
    pub fn to_aql(&self) -> String {
        let mut aql = String::with_capacity(42);
        self.write_aql(&mut aql);
        aql
    }

    /// Write the fragment directly to a buffer.
    #[inline]
    pub fn write_aql(&self, buffer: &mut String) {
        if self.offset != 0 {
            let _ = write!(buffer, "{}", self.offset);
        }

        if self.limit != 0 {
            if self.offset != 0 {
                buffer.push_str(", ");
            }
            let _ = write!(buffer, "{}", self.limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Pagination::default().to_aql(), "");
    }

    #[test]
    fn test_offset_only() {
        assert_eq!(Pagination::new(1, 0).to_aql(), "1");
    }

    #[test]
    fn test_limit_only() {
        assert_eq!(Pagination::new(0, 2).to_aql(), "2");
    }

    #[test]
    fn test_offset_and_limit() {
        assert_eq!(Pagination::new(3, 4).to_aql(), "3, 4");
    }

    #[test]
    fn test_negative_values_are_kept() {
        assert_eq!(Pagination::new(-1, 0).to_aql(), "-1");
        assert_eq!(Pagination::new(0, -1).to_aql(), "-1");
        assert_eq!(Pagination::new(-5, -10).to_aql(), "-5, -10");
    }

    #[test]
    fn test_write_appends() {
        let mut buffer = String::from("LIMIT ");
        Pagination::new(10, 20).write_aql(&mut buffer);
        assert_eq!(buffer, "LIMIT 10, 20");
    }
}
