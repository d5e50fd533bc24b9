//! `heft list`: print the resolved registry to stdout.

use heft::Registry;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::ListArgs;
use crate::commands::load_config;
use crate::error::Result;
use crate::ui;

pub fn execute(args: ListArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &args.to_overrides())?;
    let registry = Registry::from_config(&config)?;

    let mut stdout = io::stdout().lock();
    write_registry(&mut stdout, &registry)?;
    stdout.flush()?;

    let missing = registry.iter().filter(|e| !e.source_path.is_file()).count();
    if missing > 0 {
        ui::warning(&format!("{missing} component source(s) not found"));
    }
    Ok(())
}

/// One line per framework: id, source (with a missing marker), project and
/// bundle entry.
pub fn write_registry<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    for entry in registry.iter() {
        let status = if entry.source_path.is_file() { "" } else { " (missing)" };
        let project = entry
            .project_root
            .as_ref()
            .map(|root| format!("{} → {}", root.display(), entry.bundle_entry.display()))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<8} {}{}  [{}]",
            entry.id(),
            entry.source_path.display(),
            status,
            project
        )?;
    }
    Ok(())
}
