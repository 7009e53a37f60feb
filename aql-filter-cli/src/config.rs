//! CLI configuration handling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use aql_filter_query::ProcessorConfig;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "aqlf.toml";

/// aqlf configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter processor settings
    pub processor: ProcessorConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the explicit config file, or `./aqlf.toml` if it exists.
    ///
    /// Falls back to defaults when neither is present.
    pub fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = PathBuf::from(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line flags on top of file values.
    pub fn with_overrides(
        mut self,
        variable: Option<String>,
        format: Option<OutputFormat>,
        collection: Option<String>,
    ) -> Self {
        if let Some(variable) = variable {
            self.processor.variable = variable;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        if collection.is_some() {
            self.output.collection = collection;
        }
        self
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for `process`
    pub format: OutputFormat,

    /// Collection used by statement output
    pub collection: Option<String>,
}
