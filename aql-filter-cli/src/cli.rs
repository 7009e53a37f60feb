//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// aqlf - Compile JSON filter specs into AQL
#[derive(Parser, Debug)]
#[command(name = "aqlf")]
#[command(version)]
#[command(about = "aqlf - Compile JSON filter specs into AQL fragments", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a filter spec and print the result
    Process(ProcessArgs),

    /// Check that a filter spec compiles
    Check(CheckArgs),

    /// Write a default aqlf.toml
    Init(InitArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Process Command
// =============================================================================

/// Arguments for the `process` command
#[derive(Args, Debug, Default)]
pub struct ProcessArgs {
    /// Filter spec file; `-` or absent reads stdin
    pub input: Option<PathBuf>,

    /// Variable name used in field references
    #[arg(long = "var", env = "AQLF_VARIABLE")]
    pub variable: Option<String>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Collection for statement output
    #[arg(short, long)]
    pub collection: Option<String>,

    /// Path to config file (defaults to ./aqlf.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Output formats for `process`
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KEYWORD fragment` line per non-empty clause
    #[default]
    Fragments,
    /// Full `FOR .. IN .. RETURN` statement
    Statement,
    /// JSON object with `offsetLimit`, `sort` and `where`
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Fragments => write!(f, "fragments"),
            OutputFormat::Statement => write!(f, "statement"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// =============================================================================
// Check Command
// =============================================================================

/// Arguments for the `check` command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Filter spec file; `-` or absent reads stdin
    pub input: Option<PathBuf>,

    /// Variable name used in field references
    #[arg(long = "var", env = "AQLF_VARIABLE")]
    pub variable: Option<String>,

    /// Path to config file (defaults to ./aqlf.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

// =============================================================================
// Init Command
// =============================================================================

/// Arguments for the `init` command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write aqlf.toml into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing aqlf.toml
    #[arg(short, long)]
    pub force: bool,
}
