//! `aqlf init` command - Write a default aqlf.toml.

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{CliError, CliResult};
use crate::output::{self, success};

/// Run the init command
pub async fn run(args: InitArgs) -> CliResult<()> {
    output::header("Initialize aqlf");

    tokio::fs::create_dir_all(&args.path).await?;
    let config_path = args.path.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "{} already exists; pass --force to overwrite",
            config_path.display()
        )));
    }

    let config = Config::default();
    config.save(&config_path)?;

    success(&format!("Created {}", config_path.display()));
    output::newline();
    output::section("Defaults");
    output::kv("processor.variable", &config.processor.variable);
    output::kv("processor.max_depth", &config.processor.max_depth.to_string());
    output::kv("output.format", &config.output.format.to_string());
    output::newline();
    output::info("Set [output] collection to enable statement output");

    Ok(())
}
