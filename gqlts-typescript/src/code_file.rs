//! CodeFile abstraction for assembling the generated module.

use gqlts_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of the generated TypeScript module.
///
/// Organizes code into a header comment, imports and body blocks. Non-empty
/// sections are separated by exactly one blank line, as are body blocks.
/// Imports are written as one group.
///
/// # Example
///
/// ```
/// use gqlts_typescript::{CodeFile, ast::{Import, TypeAlias}};
///
/// let code = CodeFile::new()
///     .import(Import::new("./context").named("Context"))
///     .add(TypeAlias::new("A", "string"))
///     .add(TypeAlias::new("B", "number"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import { Context } from \"./context\";\n\nexport type A = string;\n\nexport type B = number;\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<CodeFragment>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header rendered above the imports.
    pub fn header<R: Renderable>(mut self, node: R) -> Self {
        self.header = node.to_fragments();
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(self, imports: impl IntoIterator<Item = Import>) -> Self {
        imports.into_iter().fold(self, Self::import)
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let imports: Vec<CodeFragment> = self
            .imports
            .iter()
            .flat_map(Renderable::to_fragments)
            .collect();

        let mut builder = CodeBuilder::new(indent);
        let blocks = std::iter::once(&self.header)
            .chain(std::iter::once(&imports))
            .chain(&self.body)
            .filter(|block| !block.is_empty());

        for (i, fragments) in blocks.enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Const, TypeAlias};

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
        assert_eq!(CodeFile::new().import(Import::new("./context")).render(), "");
    }

    #[test]
    fn test_imports_are_grouped() {
        let file = CodeFile::new()
            .import(Import::new("./context").named("Context"))
            .import(Import::new("./scalars"))
            .import(Import::new("./scalars").named("Money"))
            .add(TypeAlias::new("A", "Money"));
        assert_eq!(
            file.render(),
            "import { Context } from \"./context\";\nimport { Money } from \"./scalars\";\n\nexport type A = Money;\n"
        );
    }

    #[test]
    fn test_header_comes_first() {
        let file = CodeFile::new()
            .add(Const::new("a", "1"))
            .header(TypeAlias::new("H", "never"))
            .import(Import::new("./x").named("X"));
        assert_eq!(
            file.render(),
            "export type H = never;\n\nimport { X } from \"./x\";\n\nexport const a = 1;\n"
        );
    }

    #[test]
    fn test_empty_blocks_are_skipped() {
        let file = CodeFile::new()
            .add(TypeAlias::new("A", "string"))
            .add_all(Vec::<TypeAlias>::new())
            .add(Import::new("./unused"))
            .add(TypeAlias::new("B", "string"));
        assert_eq!(
            file.render(),
            "export type A = string;\n\nexport type B = string;\n"
        );
    }
}
