//! Bundle track.
//!
//! Builds a framework's example application with rolldown and returns the code
//! of the single JavaScript chunk it emits. Component files rolldown cannot
//! parse on its own (`.svelte`, `.vue`, framework-flavoured `.jsx`) are routed
//! through the same [`Compiler`] the component track uses:
//!
//! ```text
//! entry → rolldown ─load()─▶ ComponentCompilePlugin → Compiler → JS → rolldown
//! ```

use anyhow::Context;
use rolldown::{BundlerBuilder, BundlerOptions, InputItem, OutputFormat, Platform};
use rolldown_common::{ModuleType, Output, StrOrBytes};
use rolldown_plugin::__inner::SharedPluginable;
use rolldown_plugin::{HookLoadArgs, HookLoadOutput, HookLoadReturn, HookUsage, Plugin, PluginContext};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::adapter::Compiler;
use crate::error::{Error, Result};
use crate::registry::{Framework, FrameworkEntry};

/// Output file extensions that count as the JavaScript asset.
const JS_EXTENSIONS: [&str; 3] = [".js", ".mjs", ".cjs"];

/// Rolldown plugin compiling one framework's component files on load.
#[derive(Debug)]
pub struct ComponentCompilePlugin {
    framework: Framework,
    compiler: Arc<Compiler>,
    cwd: PathBuf,
}

impl ComponentCompilePlugin {
    pub fn new(framework: Framework, compiler: Arc<Compiler>, cwd: PathBuf) -> Self {
        Self {
            framework,
            compiler,
            cwd,
        }
    }

    /// Whether `id` is a component file this plugin compiles.
    ///
    /// Dependencies ship precompiled, so anything under `node_modules` is
    /// left to rolldown.
    fn handles(&self, id: &str) -> bool {
        if id.contains("/node_modules/") || id.contains("\\node_modules\\") {
            return false;
        }
        self.framework
            .component_extensions()
            .iter()
            .any(|ext| id.ends_with(ext))
    }
}

impl Plugin for ComponentCompilePlugin {
    fn name(&self) -> Cow<'static, str> {
        "heft-component-compile".into()
    }

    fn register_hook_usage(&self) -> HookUsage {
        HookUsage::Load
    }

    fn load(
        &self,
        _ctx: &PluginContext,
        args: &HookLoadArgs<'_>,
    ) -> impl std::future::Future<Output = HookLoadReturn> + Send {
        let id = args.id.to_string();
        let handles = self.handles(&id);
        let framework = self.framework;
        let compiler = Arc::clone(&self.compiler);
        let cwd = self.cwd.clone();

        async move {
            if !handles {
                return Ok(None);
            }

            let source = tokio::fs::read_to_string(&id)
                .await
                .with_context(|| format!("Failed to read component file: {}", id))?;

            let code = compiler
                .compile(framework, Path::new(&id), &source, &cwd)
                .await
                .with_context(|| format!("Failed to compile component file: {}", id))?;

            Ok(Some(HookLoadOutput {
                code: code.into(),
                module_type: Some(ModuleType::Js),
                ..Default::default()
            }))
        }
    }
}

/// A file emitted by the build, reduced to what the bundle track inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub filename: String,
    pub code: String,
}

/// Build `entry`'s project and return the code of its single JS output.
///
/// Returns `Ok(None)` when the entry has no project root.
pub async fn build_bundle(entry: &FrameworkEntry, compiler: Arc<Compiler>) -> Result<Option<String>> {
    let Some(project_root) = entry.project_root.as_deref() else {
        return Ok(None);
    };
    let framework = entry.framework;
    let id = framework.id();

    let project_root = std::path::absolute(project_root).map_err(|e| Error::Bundle {
        framework: id.to_string(),
        message: format!("cannot resolve project root {}: {}", project_root.display(), e),
    })?;
    let entry_path = project_root.join(&entry.bundle_entry);
    debug!(framework = id, entry = %entry_path.display(), "building bundle");

    let options = BundlerOptions {
        input: Some(vec![InputItem {
            name: Some(id.to_string()),
            import: entry_path.to_string_lossy().into_owned(),
        }]),
        cwd: Some(project_root.clone()),
        format: Some(OutputFormat::Esm),
        platform: Some(Platform::Browser),
        ..Default::default()
    };

    let plugin: SharedPluginable = Arc::new(ComponentCompilePlugin::new(
        framework,
        compiler,
        project_root,
    ));

    let mut bundler = BundlerBuilder::default()
        .with_options(options)
        .with_plugins(vec![plugin])
        .build()
        .map_err(|e| Error::Bundle {
            framework: id.to_string(),
            message: format!("{:?}", e),
        })?;

    let output = bundler.generate().await.map_err(|e| Error::Bundle {
        framework: id.to_string(),
        message: format!("{:?}", e),
    })?;

    let files = output
        .assets
        .iter()
        .map(|asset| match asset {
            Output::Chunk(chunk) => EmittedFile {
                filename: chunk.filename.to_string(),
                code: chunk.code.clone(),
            },
            Output::Asset(asset) => EmittedFile {
                filename: asset.filename.to_string(),
                code: match &asset.source {
                    StrOrBytes::Str(s) => s.clone(),
                    StrOrBytes::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
                },
            },
        })
        .collect();

    select_js_asset(framework, files).map(Some)
}

/// Pick the one emitted file with a JavaScript extension.
pub fn select_js_asset(framework: Framework, files: Vec<EmittedFile>) -> Result<String> {
    let mut js: Vec<EmittedFile> = files
        .into_iter()
        .filter(|file| JS_EXTENSIONS.iter().any(|ext| file.filename.ends_with(ext)))
        .collect();

    match js.len() {
        0 => Err(Error::NoJsAsset {
            framework: framework.id().to_string(),
        }),
        1 => Ok(js.remove(0).code),
        _ => Err(Error::AmbiguousJsAsset {
            framework: framework.id().to_string(),
            files: js.into_iter().map(|file| file.filename).collect(),
        }),
    }
}
