//! Embedding of the schema text as an exported template literal.

use crate::ast::Const;

/// Name of the exported constant holding the schema text.
pub const SOURCE_CONST: &str = "source";

/// Escape text for use inside a template literal.
///
/// Backslashes are escaped first so the escapes added for backticks and
/// `${` are not doubled. Carriage returns are written as `\r`: a raw one
/// would read back as `\n`, and formatters rewrite line endings.
pub fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace('\r', "\\r")
}

/// `export const source = `...`;` holding `schema` verbatim.
pub fn source_const(schema: &str) -> Const {
    Const::new(SOURCE_CONST, format!("`{}`", escape_template(schema)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_template(r"a\b"), r"a\\b");
        assert_eq!(escape_template("a`b"), r"a\`b");
        assert_eq!(escape_template(r"\`"), r"\\\`");
        assert_eq!(escape_template("${x}"), r"\${x}");
        assert_eq!(escape_template("$x {y}"), "$x {y}");
        assert_eq!(escape_template("a\r\nb\\r"), "a\\r\nb\\\\r");
    }

    #[test]
    fn test_source_const() {
        let c = source_const("type Query {\n  \"`quoted`\"\n  a: Int\n}\n").build();
        assert_eq!(
            c,
            "export const source = `type Query {\n  \"\\`quoted\\`\"\n  a: Int\n}\n`;\n"
        );
    }
}
