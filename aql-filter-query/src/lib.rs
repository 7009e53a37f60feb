//! # aql-filter-query
//!
//! Compiles JSON filter specs into AQL fragments.
//!
//! A filter spec carries pagination, sort entries and a list of nested
//! where-conditions. This crate turns it into three independent fragments
//! that can be spliced into an AQL statement:
//! - `LIMIT` fragment from `offset` / `limit`
//! - `SORT` fragment from `sort`
//! - `FILTER` fragment from `where`
//!
//! The crate never executes a query and knows nothing about the target
//! schema.
//!
//! ## Processing
//!
//! ```rust
//! use aql_filter_query::FilterProcessor;
//!
//! let processor = FilterProcessor::new();
//! let filter = processor
//!     .process_json(r#"{
//!         "offset": 3,
//!         "limit": 4,
//!         "sort": ["lastName dESc", "age"],
//!         "where": [{"or": [{"age": {"gt": 23}}, {"lastName": "O'Connor"}]}]
//!     }"#)
//!     .unwrap();
//!
//! assert_eq!(filter.offset_limit, "3, 4");
//! assert_eq!(filter.sort, "var.lastName DESC, var.age ASC");
//! assert_eq!(filter.where_clause, r"(var.age > 23 || var.lastName == 'O\'Connor')");
//! ```
//!
//! ## Where conditions
//!
//! Conditions can also be built in code with [`Value`]:
//!
//! ```rust
//! use aql_filter_query::{FilterProcessor, FilterSpec, Value};
//!
//! let spec = FilterSpec::new()
//!     .where_eq("not", Value::map([("role", "guest")]))
//!     .where_eq("tags", vec!["a", "b"]);
//!
//! let filter = FilterProcessor::new().process(Some(&spec)).unwrap();
//! assert_eq!(
//!     filter.where_clause,
//!     "!(var.role == 'guest') && var.tags IN ['a', 'b']"
//! );
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`QueryError`] with a stable [`ErrorCode`] and the
//! location of the rejected node:
//!
//! ```rust
//! use aql_filter_query::{ErrorCode, FilterProcessor};
//!
//! let err = FilterProcessor::new()
//!     .process_json(r#"{"sort": ["INSeRT ASC"]}"#)
//!     .unwrap_err();
//! assert_eq!(err.code, ErrorCode::ReservedIdentifier);
//! assert_eq!(err.context.location.as_deref(), Some("sort[0]"));
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod filter;
pub mod identifier;
pub mod logging;
pub mod pagination;
pub mod processor;
pub mod sort;
pub mod spec;
pub mod value;

pub use assemble::QueryTemplate;
pub use config::{DEFAULT_VARIABLE, ProcessorConfig};
pub use error::{ErrorCode, ErrorContext, QueryError, QueryResult, Suggestion};
pub use filter::{CompareOp, Condition, DEFAULT_MAX_DEPTH, WhereClause, compile_where};
pub use identifier::{is_valid_identifier, validate_identifier};
pub use pagination::Pagination;
pub use processor::{FilterProcessor, ProcessedFilter};
pub use sort::{SortField, SortOrder, format_sort};
pub use spec::FilterSpec;
pub use value::{ConditionMap, Value, escape};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assemble::QueryTemplate;
    pub use crate::config::ProcessorConfig;
    pub use crate::error::{ErrorCode, QueryError, QueryResult};
    pub use crate::processor::{FilterProcessor, ProcessedFilter};
    pub use crate::spec::FilterSpec;
    pub use crate::value::{ConditionMap, Value};
}
