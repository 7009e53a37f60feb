//! # aql-filter
//!
//! Compile JSON filter specs into safe AQL clauses.
//!
//! aql-filter provides:
//! - A recursive where-condition compiler (`and`, `or`, `not`, `like`, comparisons, `IN`)
//! - Sort and offset/limit formatting
//! - Identifier validation for every field spliced into the output
//! - Statement assembly around the compiled fragments
//!
//! ## Quick Start
//!
//! ```rust
//! use aql_filter::prelude::*;
//!
//! let processor = FilterProcessor::new();
//! let filter = processor
//!     .process_json(r#"{"limit": 10, "sort": ["age desc"], "where": [{"active": true}]}"#)
//!     .unwrap();
//!
//! let statement = QueryTemplate::new("users", processor.variable())
//!     .unwrap()
//!     .render(&filter);
//!
//! assert_eq!(
//!     statement,
//!     "FOR var IN users\n  FILTER var.active == true\n  SORT var.age DESC\n  LIMIT 10\n  RETURN var"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Filter compilation: values, conditions, sort, pagination and errors.
pub mod query {
    pub use aql_filter_query::*;
}

/// Logging bootstrap.
pub use aql_filter_query::logging;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use aql_filter_query::prelude::*;
}

// Re-export key types at the crate root
pub use aql_filter_query::{
    FilterProcessor, FilterSpec, ProcessedFilter, ProcessorConfig, QueryError, QueryResult,
    QueryTemplate, Value,
};
