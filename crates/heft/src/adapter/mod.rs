//! Compiler adapters.
//!
//! Each [`Framework`] maps to exactly one [`Adapter`], which says how to turn
//! that framework's component source into plain JavaScript:
//!
//! ```text
//! preact / react  → oxc JSX transform (in process)
//! solid           → babel-preset-solid      ┐
//! svelte/svelte4  → svelte compiler         ├ JS compiler bridge (child process)
//! vue             → @vue/compiler-sfc       ┘
//! ```

mod bridge;
mod jsx;

pub use bridge::{BridgeRequest, JsBridge, JsRuntime, SvelteGenerate};
pub use jsx::{JsxFactory, transform_jsx};
pub(crate) use jsx::join_messages;

use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::Framework;

/// Compilation strategy for one framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    /// JSX lowered to factory calls by oxc
    Jsx(JsxFactory),
    /// Babel preset executed in the JS runtime
    Babel { preset: &'static str },
    /// Svelte compiler; `compiler` picks the installed generation
    Svelte {
        compiler: &'static str,
        generate: SvelteGenerate,
    },
    /// Vue SFC: only the script block is compiled, with the template inlined
    VueScript { id: &'static str },
}

impl Framework {
    pub fn adapter(self) -> Adapter {
        match self {
            Framework::Preact => Adapter::Jsx(JsxFactory::PREACT),
            Framework::React => Adapter::Jsx(JsxFactory::REACT),
            Framework::Solid => Adapter::Babel {
                preset: "babel-preset-solid",
            },
            Framework::Svelte => Adapter::Svelte {
                compiler: "svelte/compiler",
                generate: SvelteGenerate::Client,
            },
            Framework::Svelte4 => Adapter::Svelte {
                compiler: "svelte4/compiler",
                generate: SvelteGenerate::Dom,
            },
            Framework::Vue => Adapter::VueScript { id: "app" },
        }
    }
}

impl Adapter {
    /// Whether this adapter needs the JS runtime.
    pub fn uses_bridge(&self) -> bool {
        !matches!(self, Adapter::Jsx(_))
    }

    fn request<'a>(&self, filename: &'a str, source: &'a str) -> Option<BridgeRequest<'a>> {
        match *self {
            Adapter::Jsx(_) => None,
            Adapter::Babel { preset } => Some(BridgeRequest::Babel {
                filename,
                source,
                presets: vec![preset],
            }),
            Adapter::Svelte { compiler, generate } => Some(BridgeRequest::Svelte {
                filename,
                source,
                compiler,
                generate,
            }),
            Adapter::VueScript { id } => Some(BridgeRequest::Vue {
                filename,
                source,
                id,
            }),
        }
    }
}

/// Dispatches component sources to the right adapter.
#[derive(Debug, Clone)]
pub struct Compiler {
    bridge: JsBridge,
}

impl Compiler {
    pub fn new(runtime: JsRuntime) -> Self {
        Self {
            bridge: JsBridge::new(runtime),
        }
    }

    /// Compile `source` (read from `filename`) into plain JavaScript.
    ///
    /// `cwd` is where the JS runtime resolves framework compilers from,
    /// normally the framework's project root.
    pub async fn compile(
        &self,
        framework: Framework,
        filename: &Path,
        source: &str,
        cwd: &Path,
    ) -> Result<String> {
        let adapter = framework.adapter();
        debug!(framework = framework.id(), file = %filename.display(), ?adapter, "compiling");

        if let Adapter::Jsx(factory) = adapter {
            return transform_jsx(framework, &factory, filename, source);
        }

        let filename = filename.to_string_lossy();
        let request = adapter
            .request(&filename, source)
            .ok_or_else(|| Error::Config(format!("no bridge request for {}", framework)))?;

        self.bridge
            .run(&request, cwd)
            .await
            .map_err(|e| Error::compiler(framework.id(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsx_frameworks_stay_in_process() {
        assert!(!Framework::Preact.adapter().uses_bridge());
        assert!(!Framework::React.adapter().uses_bridge());
        assert!(Framework::Solid.adapter().uses_bridge());
        assert!(Framework::Svelte.adapter().uses_bridge());
        assert!(Framework::Vue.adapter().uses_bridge());
    }

    #[test]
    fn test_svelte_generations_pick_compiler_and_mode() {
        assert_eq!(
            Framework::Svelte.adapter(),
            Adapter::Svelte {
                compiler: "svelte/compiler",
                generate: SvelteGenerate::Client
            }
        );
        assert_eq!(
            Framework::Svelte4.adapter(),
            Adapter::Svelte {
                compiler: "svelte4/compiler",
                generate: SvelteGenerate::Dom
            }
        );
    }

    #[test]
    fn test_vue_request_carries_fixed_id() {
        let request = Framework::Vue
            .adapter()
            .request("App.vue", "<template/>")
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["strategy"], "vue");
        assert_eq!(json["id"], "app");
        assert_eq!(json["filename"], "App.vue");
    }

    #[test]
    fn test_jsx_has_no_bridge_request() {
        assert!(Framework::React.adapter().request("App.jsx", "").is_none());
    }

    #[tokio::test]
    async fn test_compile_preact_in_process() {
        let compiler = Compiler::new(JsRuntime::Node);
        let code = compiler
            .compile(
                Framework::Preact,
                Path::new("app.jsx"),
                "const App = () => <div>Hi</div>;",
                Path::new("."),
            )
            .await
            .unwrap();
        assert!(code.contains("h(\"div\""));
    }
}
