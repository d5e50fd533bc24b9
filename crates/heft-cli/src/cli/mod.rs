//! Command-line interface definition.
//!
//! - `heft run` - measure the selected frameworks and write `stats.csv`
//! - `heft list` - show the resolved registry

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{Command, ListArgs, RunArgs, SelectionArgs};
pub use enums::RuntimeArg;
pub use validation::parse_framework;

/// Heft - compiled component size benchmarks
#[derive(Parser, Debug)]
#[command(
    name = "heft",
    version,
    about = "Compare compiled component sizes across UI frameworks",
    long_about = "Heft compiles an equivalent component with each framework's own compiler,\n\
                  strips runtime imports, minifies and compresses the result, and reports\n\
                  minified, gzip and brotli sizes. It can also build each framework's\n\
                  example app and measure the emitted bundle."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of ./heft.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
