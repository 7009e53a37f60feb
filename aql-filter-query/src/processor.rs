//! The filter processor: the single entry point turning a [`FilterSpec`]
//! into a [`ProcessedFilter`].
//!
//! ```rust
//! use aql_filter_query::{FilterProcessor, FilterSpec};
//!
//! let processor = FilterProcessor::new();
//! let spec = FilterSpec::new()
//!     .limit(10)
//!     .sort_by("age desc")
//!     .where_eq("active", true);
//!
//! let filter = processor.process(Some(&spec)).unwrap();
//! assert_eq!(filter.offset_limit, "10");
//! assert_eq!(filter.sort, "var.age DESC");
//! assert_eq!(filter.where_clause, "var.active == true");
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ProcessorConfig;
use crate::error::{QueryError, QueryResult};
use crate::filter::WhereClause;
use crate::sort::format_sort;
use crate::spec::FilterSpec;

/// The three fragments produced for one filter spec.
///
/// An empty string means the clause should be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFilter {
    /// `LIMIT` fragment, e.g. `"10, 20"`.
    pub offset_limit: String,
    /// `SORT` fragment, e.g. `"var.age DESC"`.
    pub sort: String,
    /// `FILTER` fragment.
    #[serde(rename = "where")]
    pub where_clause: String,
}

impl ProcessedFilter {
    /// Check if every fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.offset_limit.is_empty() && self.sort.is_empty() && self.where_clause.is_empty()
    }

    /// Keyword-prefixed clause lines, in `FILTER`, `SORT`, `LIMIT` order.
    pub fn to_clauses(&self) -> Vec<String> {
        [
            ("FILTER", &self.where_clause),
            ("SORT", &self.sort),
            ("LIMIT", &self.offset_limit),
        ]
        .into_iter()
        .filter(|(_, fragment)| !fragment.is_empty())
        .map(|(keyword, fragment)| format!("{} {}", keyword, fragment))
        .collect()
    }
}

/// Compiles filter specs into AQL fragments.
///
/// Holds only immutable configuration; clone it or share it across threads.
#[derive(Debug, Clone)]
pub struct FilterProcessor {
    config: ProcessorConfig,
}

impl Default for FilterProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterProcessor {
    /// Create a processor with the default variable `var`.
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig::default(),
        }
    }

    /// Create a processor with a custom variable name.
    ///
    /// An empty name falls back to the default.
    pub fn with_variable(variable: impl Into<String>) -> QueryResult<Self> {
        Self::from_config(ProcessorConfig::new().variable(variable))
    }

    /// Create a processor from a configuration.
    pub fn from_config(config: ProcessorConfig) -> QueryResult<Self> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    /// The variable name used in field references.
    pub fn variable(&self) -> &str {
        &self.config.variable
    }

    /// The active configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Process a spec. `None` yields an empty result.
    ///
    /// The first failing stage aborts the call; no partial result is returned.
    pub fn process(&self, spec: Option<&FilterSpec>) -> QueryResult<ProcessedFilter> {
        let Some(spec) = spec else {
            return Ok(ProcessedFilter::default());
        };

        self.build(spec).inspect_err(|e| {
            debug!(
                code = %e.code,
                location = e.context.location.as_deref().unwrap_or(""),
                "filter rejected"
            );
        })
    }

    /// Decode JSON text and process it.
    ///
    /// A JSON `null` means no filter was requested.
    pub fn process_json(&self, json: &str) -> QueryResult<ProcessedFilter> {
        let spec: Option<FilterSpec> = serde_json::from_str(json)
            .map_err(QueryError::decode)
            .inspect_err(|e| debug!(code = %e.code, "filter decode failed"))?;
        self.process(spec.as_ref())
    }

    fn build(&self, spec: &FilterSpec) -> QueryResult<ProcessedFilter> {
        let variable = self.variable();

        let offset_limit = spec.pagination().to_aql();
        trace!(fragment = %offset_limit, "offset/limit");

        let sort = format_sort(spec.sort.as_slice(), variable)?;
        trace!(fragment = %sort, "sort");

        let where_clause = WhereClause::parse(&spec.conditions, self.config.max_depth)?;
        for condition in where_clause.conditions() {
            trace!(clause = %condition.to_aql(variable), "where condition");
        }
        let where_clause = where_clause.to_aql(variable);

        debug!(
            offset_limit_len = offset_limit.len(),
            sort_len = sort.len(),
            where_len = where_clause.len(),
            options = spec.options().len(),
            "filter processed"
        );

        Ok(ProcessedFilter {
            offset_limit,
            sort,
            where_clause,
        })
    }
}

// Processors are shared across request handlers.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FilterProcessor>();
    assert_send_sync::<QueryError>();
};
