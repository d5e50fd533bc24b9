//! Import stripping.
//!
//! Generated components import their framework runtime, which is shared by
//! every component in an app. Measuring a single component therefore drops
//! top-level `import` statements before minifying.
//!
//! This is a line-anchored regular expression, not a parser. It recognises
//!
//! - `import x from "m"`, `import { a, b } from 'm'`, `import * as ns from "m"`
//! - clauses spanning several lines, including `//` and `/* */` comments
//! - bare side-effect imports, `import "m"`
//! - several imports sharing one line
//! - an optional `with { … }` / `assert { … }` attribute block
//!
//! and leaves `import(…)`, `import.meta` and anything not starting a line
//! untouched. The newline after a removed statement is kept, so removed
//! imports leave blank lines behind.

use regex::Regex;
use std::sync::LazyLock;

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    let single = concat!(
        r#"import\b\s*"#,
        r#"(?:(?:[\w$*{}\s,]|//[^\n]*|/\*[\s\S]*?\*/)+?\s*\bfrom\s*)?"#,
        r#"(?:"[^"\n]*"|'[^'\n]*')"#,
        r#"(?:\s*(?:with|assert)\s*\{[^}]*\})?"#,
        r#"[ \t]*;?"#,
    );
    Regex::new(&format!(r"(?m)^(?:{single}[ \t]*)+")).expect("import pattern is valid")
});

/// Remove top-level import statements from generated code.
pub fn strip_imports(code: &str) -> String {
    IMPORT_RE.replace_all(code, "").into_owned()
}
