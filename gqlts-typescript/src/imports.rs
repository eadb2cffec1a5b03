//! Import resolution for the generated module.

use std::collections::BTreeSet;

use gqlts_codegen::ImportCollector;

use crate::{ast::Import, schema::SchemaDocument};

/// Symbols every generated module imports from the context module.
pub const CONTEXT_SYMBOLS: [&str; 2] = ["Context", "Info"];

/// `Date` is a TypeScript global and is never imported.
const GLOBAL_SCALARS: &[&str] = &["Date"];

/// Custom scalar names to import, sorted and deduplicated.
pub fn custom_scalars(document: &SchemaDocument) -> Vec<&str> {
    document
        .scalars()
        .map(|scalar| scalar.name.as_str())
        .filter(|name| !GLOBAL_SCALARS.contains(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Resolve the import statements of the generated module.
///
/// The context import always comes first. The scalar import is omitted when
/// the schema declares no custom scalars, and merged into the context import
/// when both paths are the same module.
pub fn resolve_imports(
    document: &SchemaDocument,
    context_path: &str,
    scalars_path: &str,
) -> Vec<Import> {
    let mut collector = ImportCollector::new();
    collector.add_all(context_path, CONTEXT_SYMBOLS);
    collector.add_all(scalars_path, custom_scalars(document));

    collector
        .iter()
        .map(|(module, symbols)| Import::new(module).named_all(symbols.iter().map(String::as_str)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(imports: &[Import]) -> Vec<String> {
        imports.iter().map(Import::build).collect()
    }

    #[test]
    fn test_custom_scalars_are_sorted_and_exclude_date() {
        let document =
            SchemaDocument::parse("scalar Url\nscalar Date\nscalar Money\nscalar Url").unwrap();
        assert_eq!(custom_scalars(&document), ["Money", "Url"]);
    }

    #[test]
    fn test_context_only() {
        let document = SchemaDocument::parse("scalar Date\ntype Query { a: Int }").unwrap();
        let imports = resolve_imports(&document, "./context", "./scalars");
        assert_eq!(
            render(&imports),
            ["import { Context, Info } from \"./context\";\n"]
        );
    }

    #[test]
    fn test_context_and_scalars() {
        let document = SchemaDocument::parse("scalar Money").unwrap();
        let imports = resolve_imports(&document, "../ctx", "../types/scalars");
        assert_eq!(
            render(&imports),
            [
                "import { Context, Info } from \"../ctx\";\n",
                "import { Money } from \"../types/scalars\";\n",
            ]
        );
    }

    #[test]
    fn test_same_module_is_merged() {
        let document = SchemaDocument::parse("scalar Money").unwrap();
        let imports = resolve_imports(&document, "./server", "./server");
        assert_eq!(
            render(&imports),
            ["import { Context, Info, Money } from \"./server\";\n"]
        );
    }
}
