//! Size measurement: minify, gzip, brotli.

use flate2::Compression;
use flate2::write::GzEncoder;
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::{Parser, ParserReturn};
use oxc_span::SourceType;
use serde::Serialize;
use std::io::Write;

use crate::adapter::join_messages;
use crate::error::{Error, Result};

/// Brotli quality/window matching the usual "max compression" settings.
const BROTLI_QUALITY: u32 = 11;
const BROTLI_LGWIN: u32 = 22;
const BROTLI_BUFFER: usize = 4096;

/// Byte counts for one piece of code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub minified: u64,
    pub gzip: u64,
    pub brotli: u64,
}

/// A size report together with the bytes it was computed from, so callers
/// can persist the artifacts without redoing the work.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub report: SizeReport,
    pub minified: String,
    pub gzip: Vec<u8>,
    pub brotli: Vec<u8>,
}

/// Minify `code` and compress the result. `name` only labels errors.
pub fn measure(name: &str, code: &str) -> Result<Measurement> {
    let minified = minify(name, code)?;
    let gzip = gzip(minified.as_bytes()).map_err(|e| Error::output(name, e))?;
    let brotli = brotli(minified.as_bytes()).map_err(|e| Error::output(name, e))?;

    Ok(Measurement {
        report: SizeReport {
            minified: byte_len(&minified),
            gzip: gzip.len() as u64,
            brotli: brotli.len() as u64,
        },
        minified,
        gzip,
        brotli,
    })
}

/// UTF-8 byte length, not character count.
pub fn byte_len(text: &str) -> u64 {
    text.len() as u64
}

/// Compress and mangle with oxc, then print without whitespace.
///
/// Top-level declarations are kept even when nothing references them:
/// a stripped component like `const App = () => h("div")` has no exports
/// and would otherwise minify to nothing. Unused locals inside functions
/// are still dropped.
pub fn minify(name: &str, code: &str) -> Result<String> {
    let allocator = Allocator::default();
    let ParserReturn {
        mut program,
        errors,
        panicked,
        ..
    } = Parser::new(&allocator, code, SourceType::mjs()).parse();

    if panicked || !errors.is_empty() {
        return Err(Error::Parse {
            framework: name.to_string(),
            file: format!("{name}.js"),
            message: join_messages(&errors),
        });
    }

    // Parsed as a module so `export` survives; minified under script rules
    // so the root scope is treated as global and left alone.
    program.source_type = program.source_type.with_script(true);

    let options = MinifierOptions {
        mangle: Some(MangleOptions {
            top_level: false,
            ..MangleOptions::default()
        }),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);

    Ok(Codegen::new()
        .with_options(CodegenOptions::minify())
        .with_scoping(ret.scoping)
        .build(&program)
        .code)
}

pub fn gzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

pub fn brotli(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut writer =
            brotli::CompressorWriter::new(&mut out, BROTLI_BUFFER, BROTLI_QUALITY, BROTLI_LGWIN);
        writer.write_all(bytes)?;
        writer.flush()?;
    } // dropping the writer finishes the stream
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    const COMPONENT: &str = r#"
export default function TodoList(props) {
    const items = props.items.filter((item) => !item.hidden);
    const completed = items.filter((item) => item.done).length;
    const remaining = items.length - completed;

    function renderItem(item, index) {
        return h("li", { key: item.id, class: item.done ? "todo done" : "todo" },
            h("input", { type: "checkbox", checked: item.done, onChange: () => props.toggle(index) }),
            h("span", { class: "todo-label" }, item.label),
            h("button", { class: "todo-remove", onClick: () => props.remove(index) }, "remove"));
    }

    return h("section", { class: "todo-list" },
        h("header", { class: "todo-header" }, h("h2", null, "Things to do")),
        h("ul", { class: "todo-items" }, items.map(renderItem)),
        h("footer", { class: "todo-footer" },
            h("span", null, remaining + " remaining"),
            h("span", null, completed + " completed")));
}
"#;

    #[test]
    fn test_realistic_component_compresses() {
        let m = measure("todo", COMPONENT).unwrap();
        assert!(m.report.minified > 0);
        assert!(m.report.minified < COMPONENT.len() as u64);
        assert!(m.report.gzip <= m.report.minified);
        assert!(m.report.brotli <= m.report.minified);
    }

    #[test]
    fn test_report_matches_artifacts() {
        let m = measure("todo", COMPONENT).unwrap();
        assert_eq!(m.report.minified, m.minified.len() as u64);
        assert_eq!(m.report.gzip, m.gzip.len() as u64);
        assert_eq!(m.report.brotli, m.brotli.len() as u64);
    }

    #[test]
    fn test_byte_len_counts_utf8_bytes() {
        let text = "// grüße, 日本語\nconst s = \"✓\";";
        assert!(byte_len(text) > text.chars().count() as u64);
    }

    #[test]
    fn test_minified_multibyte_counted_in_bytes() {
        let m = measure("unicode", "export const greeting = \"héllo wörld ✓\";").unwrap();
        assert!(m.report.minified > m.minified.chars().count() as u64);
    }

    #[test]
    fn test_gzip_round_trips() {
        let compressed = gzip(COMPONENT.as_bytes()).unwrap();
        let mut decoded = String::new();
        GzDecoder::new(&compressed[..])
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, COMPONENT);
    }

    #[test]
    fn test_brotli_round_trips() {
        let compressed = brotli(COMPONENT.as_bytes()).unwrap();
        let mut decoded = Vec::new();
        brotli::Decompressor::new(&compressed[..], BROTLI_BUFFER)
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, COMPONENT.as_bytes());
    }

    #[test]
    fn test_unexported_component_is_kept() {
        let m = measure("x", "const App = () => h(\"div\", null, \"Hi\");\n").unwrap();
        assert!(m.report.minified > 0);
        assert!(m.minified.contains("App"), "{}", m.minified);
        assert!(m.minified.contains("\"Hi\""));
    }

    #[test]
    fn test_unexported_function_is_kept() {
        let m = measure("x", "function App() { return h(\"div\", null, \"Hi\"); }\n").unwrap();
        assert!(m.minified.contains("function App"), "{}", m.minified);
    }

    #[test]
    fn test_exports_survive_minification() {
        let m = measure("x", "const label = \"Hi\";\nexport default function App() { return label; }\n")
            .unwrap();
        assert!(m.minified.contains("export default"), "{}", m.minified);
    }

    #[test]
    fn test_minify_rejects_invalid_code() {
        let err = minify("broken", "export default function (").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
