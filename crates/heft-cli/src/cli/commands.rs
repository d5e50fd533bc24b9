use clap::{Args, Subcommand};
use heft::{ConfigOverrides, Framework};
use std::path::PathBuf;

use crate::cli::enums::RuntimeArg;
use crate::cli::validation::parse_framework;

/// Available Heft subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Measure component and bundle sizes
    ///
    /// Recreates the output directory, runs both tracks for every selected
    /// framework and writes the artifacts plus stats.csv.
    Run(RunArgs),

    /// Show the resolved framework registry
    ///
    /// Prints each framework's component source, project root and bundle
    /// entry, and whether the source file exists.
    List(ListArgs),
}

/// Options shared by every command that resolves the registry.
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Benchmark root that fixture paths are relative to
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only these frameworks, in this order
    ///
    /// Examples:
    ///   heft run --only preact,react
    ///   heft run --only svelte4,svelte
    #[arg(long, value_delimiter = ',', value_parser = parse_framework, value_name = "IDS")]
    pub only: Option<Vec<Framework>>,
}

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output directory, relative to the root
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Skip the component track
    #[arg(long)]
    pub no_component: bool,

    /// Skip the bundle track
    #[arg(long)]
    pub no_bundle: bool,

    /// Do not write stats.csv
    #[arg(long)]
    pub no_csv: bool,

    /// Do not write per-framework .js/.min.js/.gz/.brotli artifacts
    #[arg(long)]
    pub no_persist: bool,

    /// Stop at the first failing framework
    #[arg(long)]
    pub fail_fast: bool,

    /// JavaScript runtime for the Solid, Svelte and Vue compilers
    #[arg(long, value_enum, value_name = "RUNTIME")]
    pub runtime: Option<RuntimeArg>,
}

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

impl SelectionArgs {
    fn apply(&self, overrides: &mut ConfigOverrides) {
        overrides.root = self.root.clone();
        overrides.frameworks = self.only.clone();
    }
}

impl RunArgs {
    /// Settings given on the command line; flags left off stay unset so
    /// heft.toml and HEFT_* values apply.
    pub fn to_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            out_dir: self.out_dir.clone(),
            component: self.no_component.then_some(false),
            bundle: self.no_bundle.then_some(false),
            csv: self.no_csv.then_some(false),
            persist: self.no_persist.then_some(false),
            fail_fast: self.fail_fast.then_some(true),
            js_runtime: self.runtime.map(Into::into),
            ..ConfigOverrides::default()
        };
        self.selection.apply(&mut overrides);
        overrides
    }
}

impl ListArgs {
    pub fn to_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::default();
        self.selection.apply(&mut overrides);
        overrides
    }
}
