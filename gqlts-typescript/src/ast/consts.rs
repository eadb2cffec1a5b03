//! TypeScript const declaration builder.

use gqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for exported const declarations.
///
/// The value is written verbatim. A multi-line value (a template literal)
/// keeps its line breaks untouched.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "export const {} = {};",
            self.name, self.value
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const() {
        let c = Const::new("answer", "42").build();
        assert_eq!(c, "export const answer = 42;\n");
    }

    #[test]
    fn test_multiline_value_is_verbatim() {
        let c = Const::new("source", "`type Query {\n  a: Int\n}\n`").build();
        assert_eq!(c, "export const source = `type Query {\n  a: Int\n}\n`;\n");
    }
}
