//! Statement assembly around processed fragments.
//!
//! ```rust
//! use aql_filter_query::{FilterProcessor, FilterSpec, QueryTemplate};
//!
//! let processor = FilterProcessor::new();
//! let filter = processor
//!     .process(Some(&FilterSpec::new().limit(5).where_eq("active", true)))
//!     .unwrap();
//!
//! let template = QueryTemplate::new("users", processor.variable()).unwrap();
//! assert_eq!(
//!     template.render(&filter),
//!     "FOR var IN users\n  FILTER var.active == true\n  LIMIT 5\n  RETURN var"
//! );
//! ```

use crate::error::QueryResult;
use crate::identifier::validate_simple_identifier;
use crate::processor::ProcessedFilter;

/// A `FOR <variable> IN <collection> ... RETURN <variable>` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    collection: String,
    variable: String,
}

impl QueryTemplate {
    /// Create a template, validating both names.
    pub fn new(collection: impl Into<String>, variable: impl Into<String>) -> QueryResult<Self> {
        let collection = collection.into();
        let variable = variable.into();
        validate_simple_identifier(&collection).map_err(|e| e.at("collection"))?;
        validate_simple_identifier(&variable).map_err(|e| e.at("variable"))?;
        Ok(Self {
            collection,
            variable,
        })
    }

    /// The collection iterated over.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The loop variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Render the full statement.
    pub fn render(&self, filter: &ProcessedFilter) -> String {
        let mut out = String::with_capacity(64);
        self.write_aql(filter, &mut out);
        out
    }

    /// Write the full statement to a buffer.
    pub fn write_aql(&self, filter: &ProcessedFilter, buffer: &mut String) {
        buffer.push_str("FOR ");
        buffer.push_str(&self.variable);
        buffer.push_str(" IN ");
        buffer.push_str(&self.collection);
        buffer.push('\n');
        for clause in filter.to_clauses() {
            buffer.push_str("  ");
            buffer.push_str(&clause);
            buffer.push('\n');
        }
        buffer.push_str("  RETURN ");
        buffer.push_str(&self.variable);
    }
}
