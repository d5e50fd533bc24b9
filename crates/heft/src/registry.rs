//! Framework registry.
//!
//! The set of frameworks is closed: each one is a [`Framework`] variant with a
//! fixed fixture layout under the benchmark root. Configuration may pick a
//! subset, reorder it, or re-point individual paths, but never invents a new
//! framework; adding one means adding a variant, and the compiler will point at
//! every `match` that needs a new arm.

use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::{BenchConfig, PathOverride};
use crate::error::{Error, Result};

/// A component framework under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Preact,
    React,
    Solid,
    Svelte,
    /// Svelte 3/4 compiler generation, installed under the `svelte4` alias
    Svelte4,
    Vue,
}

impl Framework {
    /// Every known framework, in canonical order.
    pub const ALL: [Framework; 6] = [
        Framework::Preact,
        Framework::React,
        Framework::Solid,
        Framework::Svelte,
        Framework::Svelte4,
        Framework::Vue,
    ];

    /// Frameworks measured when the configuration does not choose.
    pub const DEFAULT: [Framework; 5] = [
        Framework::Preact,
        Framework::React,
        Framework::Solid,
        Framework::Svelte,
        Framework::Vue,
    ];

    /// Stable identifier used for file names, CSV headers and log fields.
    pub fn id(self) -> &'static str {
        match self {
            Framework::Preact => "preact",
            Framework::React => "react",
            Framework::Solid => "solid",
            Framework::Svelte => "svelte",
            Framework::Svelte4 => "svelte4",
            Framework::Vue => "vue",
        }
    }

    /// Component fixture, relative to the benchmark root.
    pub fn default_source(self) -> PathBuf {
        match self {
            Framework::Preact => PathBuf::from("preact/src/app.jsx"),
            Framework::React => PathBuf::from("react/src/App.jsx"),
            Framework::Solid => PathBuf::from("solid/src/App.jsx"),
            Framework::Svelte => PathBuf::from("svelte/src/App.svelte"),
            Framework::Svelte4 => PathBuf::from("svelte4/src/App.svelte"),
            Framework::Vue => PathBuf::from("vue/src/App.vue"),
        }
    }

    /// Example application directory, relative to the benchmark root.
    pub fn default_project(self) -> PathBuf {
        PathBuf::from(self.id())
    }

    /// Bundle entry, relative to the project root.
    pub fn default_entry(self) -> PathBuf {
        match self {
            Framework::Preact | Framework::React => PathBuf::from("src/main.jsx"),
            Framework::Solid => PathBuf::from("src/index.jsx"),
            Framework::Svelte | Framework::Svelte4 | Framework::Vue => {
                PathBuf::from("src/main.js")
            }
        }
    }

    /// File extensions whose modules must go through this framework's
    /// compiler before rolldown can parse them.
    pub fn component_extensions(self) -> &'static [&'static str] {
        match self {
            Framework::Preact | Framework::React | Framework::Solid => &[".jsx"],
            Framework::Svelte | Framework::Svelte4 => &[".svelte"],
            Framework::Vue => &[".vue"],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Framework::ALL
            .into_iter()
            .find(|fw| fw.id() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Framework::ALL.iter().map(|fw| fw.id()).collect();
                Error::Config(format!(
                    "unknown framework '{}' (known: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// One registry row, with paths resolved against the benchmark root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkEntry {
    pub framework: Framework,
    pub source_path: PathBuf,
    /// `None` skips the bundle track for this framework.
    pub project_root: Option<PathBuf>,
    /// Bundle entry, relative to `project_root`.
    pub bundle_entry: PathBuf,
}

impl FrameworkEntry {
    /// Entry row with the default fixture layout under `root`.
    pub fn with_defaults(framework: Framework, root: &Path) -> Self {
        Self {
            framework,
            source_path: root.join(framework.default_source()).clean(),
            project_root: Some(root.join(framework.default_project()).clean()),
            bundle_entry: framework.default_entry(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.framework.id()
    }

    fn apply(&mut self, root: &Path, overrides: &PathOverride) {
        if let Some(source) = &overrides.source {
            self.source_path = root.join(source).clean();
        }
        if let Some(project) = &overrides.project {
            self.project_root = Some(root.join(project).clean());
        }
        if let Some(entry) = &overrides.entry {
            self.bundle_entry = entry.clone();
        }
    }
}

/// Ordered, immutable set of frameworks for one run.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<FrameworkEntry>,
}

impl Registry {
    /// Build the registry for a validated configuration.
    pub fn from_config(config: &BenchConfig) -> Result<Self> {
        config.validate()?;

        let entries = config
            .frameworks
            .iter()
            .map(|&framework| {
                let mut entry = FrameworkEntry::with_defaults(framework, &config.root);
                if let Some(overrides) = config.overrides.get(framework.id()) {
                    entry.apply(&config.root, overrides);
                }
                entry
            })
            .collect();

        Ok(Self { entries })
    }

    /// Registry over explicit rows, kept in the given order.
    pub fn from_entries(entries: Vec<FrameworkEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameworkEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, framework: Framework) -> Option<&FrameworkEntry> {
        self.entries.iter().find(|e| e.framework == framework)
    }

    /// Framework identifiers in registry order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(FrameworkEntry::id).collect()
    }
}
