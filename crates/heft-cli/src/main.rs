//! Heft CLI - compiled component sizes across UI frameworks.
//!
//! This is the main entry point. It parses arguments, sets up logging and
//! dispatches to the command implementations.

use clap::Parser;
use heft_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Logging goes to stderr; colors follow --no-color and NO_COLOR/FORCE_COLOR
    let no_color = args.no_color || !ui::should_use_color();
    logger::init_logger(args.verbose, args.quiet, no_color);

    let config_path = args.config.as_deref();
    let result = match args.command {
        cli::Command::Run(run_args) => commands::run_execute(run_args, config_path).await,
        cli::Command::List(list_args) => commands::list_execute(list_args, config_path),
    };

    // Convert CLI errors to miette diagnostics
    result.map_err(error::cli_error_to_miette)
}
