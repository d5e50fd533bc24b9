//! In-process JSX lowering with oxc.

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::{Parser, ParserReturn};
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{JsxOptions, JsxRuntime, TransformOptions, Transformer};
use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::Framework;

/// Classic-runtime JSX factory names. `None` keeps oxc's React defaults
/// (`React.createElement` / `React.Fragment`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsxFactory {
    pub pragma: Option<&'static str>,
    pub pragma_frag: Option<&'static str>,
}

impl JsxFactory {
    pub const PREACT: JsxFactory = JsxFactory {
        pragma: Some("h"),
        pragma_frag: Some("Fragment"),
    };

    pub const REACT: JsxFactory = JsxFactory {
        pragma: None,
        pragma_frag: None,
    };

    fn to_options(self) -> JsxOptions {
        JsxOptions {
            runtime: JsxRuntime::Classic,
            development: false,
            pragma: self.pragma.map(str::to_string),
            pragma_frag: self.pragma_frag.map(str::to_string),
            ..JsxOptions::default()
        }
    }
}

/// Lower JSX in `source` to plain factory calls.
pub fn transform_jsx(
    framework: Framework,
    factory: &JsxFactory,
    filename: &Path,
    source: &str,
) -> Result<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(filename).unwrap_or_else(|_| SourceType::jsx());

    let ParserReturn {
        mut program,
        errors,
        panicked,
        ..
    } = Parser::new(&allocator, source, source_type).parse();

    if panicked || !errors.is_empty() {
        return Err(Error::Parse {
            framework: framework.id().to_string(),
            file: filename.display().to_string(),
            message: join_messages(&errors),
        });
    }

    let scoping = SemanticBuilder::new()
        .build(&program)
        .semantic
        .into_scoping();

    let options = TransformOptions {
        jsx: factory.to_options(),
        ..TransformOptions::default()
    };

    let ret = Transformer::new(&allocator, filename, &options).build_with_scoping(scoping, &mut program);
    if !ret.errors.is_empty() {
        return Err(Error::Transform {
            framework: framework.id().to_string(),
            message: join_messages(&ret.errors),
        });
    }

    Ok(Codegen::new().build(&program).code)
}

pub(crate) fn join_messages<E: std::fmt::Display>(errors: &[E]) -> String {
    if errors.is_empty() {
        return "parser gave up without a diagnostic".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
