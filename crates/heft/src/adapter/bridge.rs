//! JS compiler bridge.
//!
//! Frameworks whose compilers only exist as npm packages (Solid's Babel preset,
//! Svelte, Vue) are driven through a short-lived JS runtime process:
//!
//! ```text
//! request JSON ──stdin──▶ runtime --eval compile.mjs ──stdout──▶ generated code
//! ```
//!
//! The driver is evaluated rather than loaded from a file so that bare
//! specifiers like `svelte/compiler` resolve against the working directory,
//! i.e. the framework's project and its `node_modules`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::CompilerError;

/// Driver script evaluated by the runtime.
const DRIVER: &str = include_str!("../../assets/compile.mjs");

/// JavaScript runtime that executes the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsRuntime {
    #[default]
    Node,
    Bun,
}

impl JsRuntime {
    /// Command prefix; the driver source is appended as the last argument.
    fn build_command(self) -> Vec<&'static str> {
        match self {
            Self::Node => vec!["node", "--input-type=module", "--eval"],
            Self::Bun => vec!["bun", "--eval"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Bun => "bun",
        }
    }
}

/// Svelte code generation target.
///
/// Svelte 5 renamed the client target from `dom` to `client`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SvelteGenerate {
    Client,
    Dom,
}

/// One compile job for the driver.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum BridgeRequest<'a> {
    Babel {
        filename: &'a str,
        source: &'a str,
        presets: Vec<&'a str>,
    },
    Svelte {
        filename: &'a str,
        source: &'a str,
        compiler: &'a str,
        generate: SvelteGenerate,
    },
    Vue {
        filename: &'a str,
        source: &'a str,
        id: &'a str,
    },
}

/// Spawns the runtime once per compile request.
#[derive(Debug, Clone)]
pub struct JsBridge {
    runtime: JsRuntime,
}

impl JsBridge {
    pub fn new(runtime: JsRuntime) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> JsRuntime {
        self.runtime
    }

    /// Run one request with `cwd` as the module resolution root.
    pub async fn run(&self, request: &BridgeRequest<'_>, cwd: &Path) -> Result<String, CompilerError> {
        let payload =
            serde_json::to_vec(request).map_err(|source| CompilerError::Request { source })?;

        let cmd_parts = self.runtime.build_command();
        let mut cmd = Command::new(cmd_parts[0]);
        for part in &cmd_parts[1..] {
            cmd.arg(part);
        }
        cmd.arg(DRIVER);

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .current_dir(cwd)
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| CompilerError::spawn_failed(self.runtime.name(), e))?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            CompilerError::io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "failed to capture stdin",
            ))
        })?;
        stdin.write_all(&payload).await.map_err(CompilerError::io)?;
        drop(stdin); // EOF

        let output = child.wait_with_output().await.map_err(CompilerError::io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CompilerError::exit(output.status.code().unwrap_or(-1), stderr));
        }

        String::from_utf8(output.stdout).map_err(|source| CompilerError::InvalidOutput { source })
    }
}
