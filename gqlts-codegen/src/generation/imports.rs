//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep their insertion order; the symbols imported from each module
/// are deduplicated and sorted, independent of the order they were added in.
///
/// # Example
///
/// ```
/// use gqlts_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./context", "Info");
/// imports.add("./context", "Context");
/// imports.add("./scalars", "Money");
/// imports.add("./scalars", "Money");
///
/// let modules: Vec<_> = imports
///     .iter()
///     .map(|(module, symbols)| (module, symbols.len()))
///     .collect();
/// assert_eq!(modules, [("./context", 2), ("./scalars", 1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add several symbols from the same module.
    pub fn add_all<'a>(&mut self, module: &str, symbols: impl IntoIterator<Item = &'a str>) {
        for symbol in symbols {
            self.add(module, symbol);
        }
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }
}
