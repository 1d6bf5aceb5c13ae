//! Textual scan for an existing vConsole initialization
//!
//! This is a heuristic, not a lexer. It knows about quoted strings and the two
//! comment forms, which is enough to ignore `new VConsole(` that only appears
//! in commented-out code or inside a string. Template literals and regex
//! literals are treated as plain code.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Strings, line comments and block comments, in leftmost-first order.
///
/// Strings are listed first so that `"http://cdn"` is not mistaken for the
/// start of a line comment. A line comment takes its line break with it.
static TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|/{2,}[^\r\n]*(?:\r|\n)?|/\*.*?\*/"#)
        .expect("token pattern is valid")
});

static CONSTRUCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)new vconsole\(").expect("construct pattern is valid"));

static REQUIRE_CONSTRUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"new require\(['"]vconsole"#).expect("require pattern is valid")
});

/// Source text with comments removed.
///
/// `literals` holds the byte ranges of string literals within `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedSource {
    pub code: String,
    pub literals: Vec<Range<usize>>,
}

impl StrippedSource {
    pub fn new(source: &str) -> Self {
        let mut code = String::with_capacity(source.len());
        let mut literals = Vec::new();
        let mut last = 0;

        for token in TOKENS.find_iter(source) {
            code.push_str(&source[last..token.start()]);
            last = token.end();

            let text = token.as_str();
            if text.starts_with('/') {
                continue;
            }
            let start = code.len();
            code.push_str(text);
            literals.push(start..code.len());
        }
        code.push_str(&source[last..]);

        Self { code, literals }
    }

    fn in_literal(&self, offset: usize) -> bool {
        self.literals.iter().any(|range| range.contains(&offset))
    }

    /// Whether the remaining code constructs a vConsole instance.
    ///
    /// A match counts only when it starts outside a string literal. The
    /// `require` forms run into the module-name literal, so only the start
    /// position is checked.
    pub fn initializes_console(&self) -> bool {
        CONSTRUCT
            .find_iter(&self.code)
            .chain(REQUIRE_CONSTRUCT.find_iter(&self.code))
            .any(|m| !self.in_literal(m.start()))
    }
}

/// Remove `//` and `/* */` comments, leaving string literals untouched.
pub fn strip_comments(source: &str) -> String {
    StrippedSource::new(source).code
}

/// Whether `source` already appears to create a vConsole instance.
pub fn initializes_console(source: &str) -> bool {
    StrippedSource::new(source).initializes_console()
}
