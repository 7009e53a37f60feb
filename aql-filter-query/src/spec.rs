//! The decoded filter spec.
//!
//! ```rust
//! use aql_filter_query::FilterSpec;
//!
//! let spec = FilterSpec::from_json(r#"{
//!     "offset": 10,
//!     "limit": 20,
//!     "sort": ["lastName DESC"],
//!     "where": [{"age": {"gte": 18}}],
//!     "options": ["withCount"]
//! }"#).unwrap();
//!
//! assert_eq!(spec.limit, 20);
//! assert_eq!(spec.options(), ["withCount"]);
//! ```

use serde::Deserialize;

use crate::error::{QueryError, QueryResult};
use crate::pagination::Pagination;
use crate::value::{ConditionMap, Value};

/// A filter spec as received from a caller.
///
/// Every field is optional when decoding; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Number of records to skip. Zero means unset.
    pub offset: i64,
    /// Maximum number of records. Zero means unset.
    pub limit: i64,
    /// Sort entries, `"<field> [asc|desc]"`.
    pub sort: Vec<String>,
    /// Condition maps, implicitly AND-ed.
    #[serde(rename = "where")]
    pub conditions: Vec<ConditionMap>,
    options: Vec<String>,
}

impl FilterSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a spec from JSON text.
    pub fn from_json(json: &str) -> QueryResult<Self> {
        serde_json::from_str(json).map_err(QueryError::decode)
    }

    /// Decode a spec from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> QueryResult<Self> {
        serde_json::from_slice(bytes).map_err(QueryError::decode)
    }

    /// Set the offset.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the limit.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Append a sort entry.
    pub fn sort_by(mut self, entry: impl Into<String>) -> Self {
        self.sort.push(entry.into());
        self
    }

    /// Append a condition map.
    pub fn condition(mut self, condition: ConditionMap) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Append a single-key condition.
    pub fn where_eq(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut condition = ConditionMap::with_capacity(1);
        condition.insert(key.into(), value.into());
        self.condition(condition)
    }

    /// Append an opaque option.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Options, passed through untouched.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Offset and limit as a [`Pagination`].
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.offset, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_empty_object() {
        assert_eq!(FilterSpec::from_json("{}").unwrap(), FilterSpec::default());
    }

    #[test]
    fn test_decode_full() {
        let spec = FilterSpec::from_json(
            r#"{"offset": -1, "limit": 5, "sort": ["age"], "where": [{"a": 1}], "options": ["x", "y"]}"#,
        )
        .unwrap();
        assert_eq!(spec.offset, -1);
        assert_eq!(spec.limit, 5);
        assert_eq!(spec.sort, vec!["age"]);
        assert_eq!(spec.conditions.len(), 1);
        assert_eq!(spec.conditions[0]["a"], Value::Float(1.0));
        assert_eq!(spec.options(), ["x", "y"]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let spec = FilterSpec::from_json(r#"{"limit": 3, "page": 7}"#).unwrap();
        assert_eq!(spec.limit, 3);
    }

    #[test]
    fn test_decode_errors() {
        for json in ["", "{", "[]", r#"{"limit": "ten"}"#, r#"{"where": {"a": 1}}"#, r#"{"sort": "age"}"#] {
            let err = FilterSpec::from_json(json).unwrap_err();
            assert!(err.is_decode_error(), "{json:?}");
        }
    }

    #[test]
    fn test_from_slice() {
        let spec = FilterSpec::from_slice(br#"{"offset": 2}"#).unwrap();
        assert_eq!(spec.pagination(), Pagination::new(2, 0));
        assert!(FilterSpec::from_slice(b"\xff").is_err());
    }

    #[test]
    fn test_builder() {
        let spec = FilterSpec::new()
            .offset(1)
            .limit(2)
            .sort_by("age desc")
            .where_eq("active", true)
            .option("raw");
        assert_eq!(spec.pagination(), Pagination::new(1, 2));
        assert_eq!(spec.sort, vec!["age desc"]);
        assert_eq!(spec.conditions[0]["active"], Value::Bool(true));
        assert_eq!(spec.options(), ["raw"]);
    }
}
