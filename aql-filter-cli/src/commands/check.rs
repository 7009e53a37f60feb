//! `aqlf check` command - Check that a filter spec compiles.

use aql_filter_query::FilterProcessor;

use crate::cli::CheckArgs;
use crate::commands::{normalize_input, read_input};
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output::{self, kv, success};

/// Run the check command
pub async fn run(args: CheckArgs) -> CliResult<()> {
    let config =
        Config::discover(args.config.as_deref())?.with_overrides(args.variable, None, None);
    let processor = FilterProcessor::from_config(config.processor)?;

    let input = read_input(args.input.as_deref()).await?;

    match processor.process_json(normalize_input(&input)) {
        Ok(filter) => {
            success("Filter is valid");
            if filter.is_empty() {
                output::dim("  (no clauses)");
            }
            for (name, fragment) in [
                ("where", &filter.where_clause),
                ("sort", &filter.sort),
                ("offsetLimit", &filter.offset_limit),
            ] {
                if !fragment.is_empty() {
                    kv(name, fragment);
                }
            }
            Ok(())
        }
        Err(e) => {
            output::report(&e.display_full());
            Err(CliError::Validation(format!(
                "filter rejected ({})",
                e.code.description()
            )))
        }
    }
}
