//! aqlf - Compile JSON filter specs into AQL.

use clap::Parser;

use aql_filter_cli::cli::{Cli, Command};
use aql_filter_cli::commands;
use aql_filter_cli::error::CliResult;
use aql_filter_cli::output;
use aql_filter_query::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_with_level("debug");
    } else {
        logging::init();
    }

    if let Err(e) = run(cli.command).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Process(args) => commands::process::run(args).await,
        Command::Check(args) => commands::check::run(args).await,
        Command::Init(args) => commands::init::run(args).await,
        Command::Version => {
            commands::version::run().await;
            Ok(())
        }
    }
}
