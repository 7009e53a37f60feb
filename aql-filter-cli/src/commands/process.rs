//! `aqlf process` command - Compile a filter spec and print the result.

use aql_filter_query::{FilterProcessor, ProcessedFilter, QueryTemplate};
use tracing::debug;

use crate::cli::{OutputFormat, ProcessArgs};
use crate::commands::{normalize_input, read_input};
use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Run the process command
pub async fn run(args: ProcessArgs) -> CliResult<()> {
    let config = Config::discover(args.config.as_deref())?.with_overrides(
        args.variable,
        args.format,
        args.collection,
    );
    debug!(
        variable = %config.processor.variable,
        format = %config.output.format,
        "processing filter"
    );

    let processor = FilterProcessor::from_config(config.processor.clone())?;
    let input = read_input(args.input.as_deref()).await?;
    let filter = processor.process_json(normalize_input(&input))?;

    let rendered = render(
        &filter,
        config.output.format,
        config.output.collection.as_deref(),
        processor.variable(),
    )?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}

/// Render a processed filter in the requested format.
pub fn render(
    filter: &ProcessedFilter,
    format: OutputFormat,
    collection: Option<&str>,
    variable: &str,
) -> CliResult<String> {
    match format {
        OutputFormat::Fragments => Ok(filter.to_clauses().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(filter)?),
        OutputFormat::Statement => {
            let collection = collection.ok_or_else(|| {
                CliError::Config(
                    "statement output needs a collection; pass --collection or set [output] collection"
                        .to_string(),
                )
            })?;
            let template = QueryTemplate::new(collection, variable)?;
            Ok(template.render(filter))
        }
    }
}
