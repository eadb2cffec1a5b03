//! TypeScript import builder.

use gqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for named imports (`import { A, B } from "module";`).
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports, in the given order.
    pub fn named_all<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.named.is_empty() {
            return Vec::new();
        }
        vec![CodeFragment::Line(format!(
            "import {{ {} }} from \"{}\";",
            self.named.join(", "),
            escape_string(&self.from)
        ))]
    }
}

/// Escape a module path for a double-quoted string literal.
fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
