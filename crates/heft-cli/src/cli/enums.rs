use clap::ValueEnum;
use heft::JsRuntime;

/// JavaScript runtime for the compiler bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuntimeArg {
    /// Node.js
    Node,
    /// Bun
    Bun,
}

impl From<RuntimeArg> for JsRuntime {
    fn from(value: RuntimeArg) -> Self {
        match value {
            RuntimeArg::Node => JsRuntime::Node,
            RuntimeArg::Bun => JsRuntime::Bun,
        }
    }
}
