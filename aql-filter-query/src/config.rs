//! Processor configuration.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::filter::DEFAULT_MAX_DEPTH;
use crate::identifier::validate_simple_identifier;

/// Default variable name prefixed to every field reference.
pub const DEFAULT_VARIABLE: &str = "var";

/// Configuration for a [`FilterProcessor`](crate::FilterProcessor).
///
/// Deserializes from a `[processor]` table:
///
/// ```toml
/// variable = "doc"
/// max_depth = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Variable name used in `var.<field>` references.
    pub variable: String,
    /// Maximum nesting of `and`, `or` and `not`.
    pub max_depth: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ProcessorConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variable name.
    pub fn variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate the config, substituting the default for an empty variable.
    pub fn validated(mut self) -> QueryResult<Self> {
        if self.variable.is_empty() {
            self.variable = DEFAULT_VARIABLE.to_string();
        }

        validate_simple_identifier(&self.variable).map_err(|e| {
            QueryError::configuration(format!("variable name rejected. {}", e.message))
                .with_field("variable")
                .with_source(e)
        })?;

        if self.max_depth == 0 {
            return Err(QueryError::configuration("max_depth must be at least 1")
                .with_field("max_depth"));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::default();
        assert_eq!(config.variable, "var");
        assert_eq!(config.max_depth, 32);
    }

    #[test]
    fn test_empty_variable_means_default() {
        let config = ProcessorConfig::new().variable("").validated().unwrap();
        assert_eq!(config.variable, "var");
    }

    #[test]
    fn test_invalid_variable() {
        for name in ["doc.inner", "my var", "RETURN", "1x"] {
            let err = ProcessorConfig::new().variable(name).validated().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidConfiguration, "{name:?}");
        }
    }

    #[test]
    fn test_zero_depth() {
        let err = ProcessorConfig::new().max_depth(0).validated().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ProcessorConfig = serde_json::from_str(r#"{"variable": "doc"}"#).unwrap();
        assert_eq!(config.variable, "doc");
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }
}
