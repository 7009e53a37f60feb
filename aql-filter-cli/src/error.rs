//! CLI error types and result alias.

use aql_filter_query::QueryError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(aqlf::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(aqlf::config))]
    Config(String),

    /// Filter rejected by the processor
    #[error("Filter error: {0}")]
    #[diagnostic(code(aqlf::filter), help("run `aqlf check` for the full report"))]
    Filter(#[from] QueryError),

    /// JSON output error
    #[error("JSON error: {0}")]
    #[diagnostic(code(aqlf::json))]
    Json(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    #[diagnostic(code(aqlf::validation))]
    Validation(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Config(format!("Failed to serialize TOML: {}", err))
    }
}
