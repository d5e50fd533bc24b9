//! Benchmark configuration.
//!
//! Sources are layered with figment, highest priority last:
//! defaults < `heft.toml` < `HEFT_*` environment < explicit overrides (CLI).
//!
//! ```toml
//! root = "."
//! out-dir = "out"
//! frameworks = ["preact", "react", "solid", "svelte", "vue"]
//! bundle = true
//! js-runtime = "node"
//!
//! [overrides.vue]
//! source = "vue/src/components/App.vue"
//! ```

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::adapter::JsRuntime;
use crate::error::{Error, Result};
use crate::registry::Framework;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "heft.toml";

/// Everything one run needs to know, passed explicitly through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BenchConfig {
    /// Benchmark root; registry paths are relative to it
    pub root: PathBuf,
    /// Output directory, relative to `root` unless absolute
    pub out_dir: PathBuf,
    /// Frameworks to measure, in report order
    pub frameworks: Vec<Framework>,
    /// Run the component track
    pub component: bool,
    /// Run the bundle track
    pub bundle: bool,
    /// Write `stats.csv`
    pub csv: bool,
    /// Write per-framework artifacts (`.js`, `.min.js`, `.gz`, `.brotli`)
    pub persist: bool,
    /// Abort on the first failing framework instead of isolating it
    pub fail_fast: bool,
    /// Runtime executing the JS compiler bridge
    pub js_runtime: JsRuntime,
    /// Per-framework path overrides keyed by framework id
    pub overrides: IndexMap<String, PathOverride>,
}

/// Replacement paths for one framework's registry row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PathOverride {
    pub source: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub entry: Option<PathBuf>,
}

/// Explicitly provided settings; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<Vec<Framework>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_runtime: Option<JsRuntime>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            out_dir: PathBuf::from("out"),
            frameworks: Framework::DEFAULT.to_vec(),
            component: true,
            bundle: true,
            csv: true,
            persist: true,
            fail_fast: false,
            js_runtime: JsRuntime::Node,
            overrides: IndexMap::new(),
        }
    }
}

impl BenchConfig {
    /// Load configuration from all sources.
    ///
    /// `config_path` forces a specific file; otherwise `heft.toml` is used when
    /// it exists in the working directory.
    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let config: Self = Self::figment(config_path, overrides)
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Layered figment, exposed for callers that want to inspect sources.
    pub fn figment(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = config_path.map(Path::to_path_buf).or_else(|| {
            let default_path = Path::new(CONFIG_FILE);
            default_path.exists().then(|| default_path.to_path_buf())
        });

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        // HEFT_OUT_DIR -> out-dir, HEFT_FAIL_FAST -> fail-fast
        figment = figment.merge(
            Env::prefixed("HEFT_")
                .ignore(&["OVERRIDES"])
                .map(|key| key.as_str().replace('_', "-").into()),
        );

        figment.merge(Serialized::defaults(overrides))
    }

    /// Reject selections that cannot produce a meaningful report.
    pub fn validate(&self) -> Result<()> {
        if self.frameworks.is_empty() {
            return Err(Error::Config(
                "at least one framework must be selected".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for framework in &self.frameworks {
            if !seen.insert(framework) {
                return Err(Error::Config(format!(
                    "framework '{}' is listed more than once",
                    framework
                )));
            }
        }

        if !self.component && !self.bundle {
            return Err(Error::Config(
                "both the component and the bundle track are disabled".to_string(),
            ));
        }

        for key in self.overrides.keys() {
            key.parse::<Framework>()?;
        }

        Ok(())
    }

    /// Output directory resolved against the root.
    pub fn out_dir(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }
}
