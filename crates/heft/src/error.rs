//! Error types for the benchmark pipeline.
//!
//! Every variant that belongs to a single framework carries its identifier so a
//! failure can be reported as "which framework, and why" without extra context.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling, bundling, measuring or reporting.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Component source file is missing or unreadable
    #[error("[{framework}] failed to read source {}: {source}", .path.display())]
    #[diagnostic(
        code(heft::source_read),
        help("Check the registry path or the `overrides.<id>.source` setting")
    )]
    SourceRead {
        framework: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// oxc could not parse the input
    #[error("[{framework}] failed to parse {file}: {message}")]
    #[diagnostic(code(heft::parse))]
    Parse {
        framework: String,
        file: String,
        message: String,
    },

    /// oxc transformer reported errors (JSX lowering)
    #[error("[{framework}] transform failed: {message}")]
    #[diagnostic(code(heft::transform))]
    Transform { framework: String, message: String },

    /// A framework compiler running in the JS runtime failed
    #[error("[{framework}] compiler failed: {source}")]
    #[diagnostic(code(heft::compiler))]
    Compiler {
        framework: String,
        #[source]
        source: CompilerError,
    },

    /// Rolldown rejected the project build
    #[error("[{framework}] bundle build failed: {message}")]
    #[diagnostic(
        code(heft::bundle),
        help("Make sure the project's dependencies are installed")
    )]
    Bundle { framework: String, message: String },

    /// The build emitted no JavaScript chunk
    #[error("[{framework}] bundle produced no JavaScript asset")]
    #[diagnostic(code(heft::bundle_no_js))]
    NoJsAsset { framework: String },

    /// The build emitted more than one JavaScript chunk
    #[error("[{framework}] bundle produced {} JavaScript assets, expected one: {}", .files.len(), .files.join(", "))]
    #[diagnostic(
        code(heft::bundle_ambiguous_js),
        help("Dynamic imports split the bundle; keep the example app in a single chunk")
    )]
    AmbiguousJsAsset {
        framework: String,
        files: Vec<String>,
    },

    /// Writing into the output directory failed
    #[error("failed to write {}: {source}", .path.display())]
    #[diagnostic(code(heft::output), help("Check output directory permissions"))]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed
    #[error("failed to write stats table: {0}")]
    #[diagnostic(code(heft::csv))]
    Csv(#[from] csv::Error),

    /// Configuration could not be loaded or is inconsistent
    #[error("invalid configuration: {0}")]
    #[diagnostic(code(heft::config), help("Check heft.toml and HEFT_* variables"))]
    Config(String),
}

impl Error {
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    pub fn compiler(framework: impl Into<String>, source: CompilerError) -> Self {
        Self::Compiler {
            framework: framework.into(),
            source,
        }
    }
}

/// Errors from the JS compiler bridge process.
#[derive(Debug, Error, Diagnostic)]
pub enum CompilerError {
    /// Failed to spawn the JS runtime
    #[error("failed to spawn `{runtime}`: {source}")]
    #[diagnostic(
        code(heft::bridge::spawn_failed),
        help("Ensure {runtime} is installed and available in your PATH")
    )]
    SpawnFailed {
        runtime: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to talk to the child over stdin/stdout
    #[error("failed to communicate with the compiler process: {source}")]
    #[diagnostic(code(heft::bridge::io))]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Runtime exited with non-zero status
    #[error("compiler process exited with code {exit_code}")]
    #[diagnostic(code(heft::bridge::exit))]
    Exit {
        exit_code: i32,
        #[help]
        stderr: String,
    },

    /// Generated code was not valid UTF-8
    #[error("compiler output is not valid UTF-8: {source}")]
    #[diagnostic(code(heft::bridge::utf8))]
    InvalidOutput {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Compile request could not be encoded
    #[error("failed to encode compile request: {source}")]
    #[diagnostic(code(heft::bridge::request))]
    Request {
        #[source]
        source: serde_json::Error,
    },
}

impl CompilerError {
    pub fn spawn_failed(runtime: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            runtime: runtime.into(),
            source,
        }
    }

    pub fn io(source: std::io::Error) -> Self {
        Self::Io { source }
    }

    pub fn exit(exit_code: i32, stderr: String) -> Self {
        Self::Exit { exit_code, stderr }
    }
}

/// Result type alias for heft operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_read_names_framework_and_path() {
        let err = Error::SourceRead {
            framework: "solid".to_string(),
            path: PathBuf::from("solid/src/App.jsx"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("[solid]"));
        assert!(msg.contains("solid/src/App.jsx"));
    }

    #[test]
    fn test_ambiguous_asset_lists_files() {
        let err = Error::AmbiguousJsAsset {
            framework: "vue".to_string(),
            files: vec!["a.js".to_string(), "b.js".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "[vue] bundle produced 2 JavaScript assets, expected one: a.js, b.js"
        );
    }

    #[test]
    fn test_compiler_error_wraps_exit_code() {
        let err = Error::compiler("svelte", CompilerError::exit(1, "boom".to_string()));
        assert_eq!(
            err.to_string(),
            "[svelte] compiler failed: compiler process exited with code 1"
        );
    }
}
