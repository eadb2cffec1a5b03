//! Mapping from GraphQL scalar names to TypeScript types.

use indexmap::IndexMap;

/// Built-in GraphQL scalars and the TypeScript primitive each maps to.
const DEFAULT_SCALARS: &[(&str, &str)] = &[
    ("ID", "string"),
    ("String", "string"),
    ("Int", "number"),
    ("Float", "number"),
    ("Boolean", "boolean"),
];

/// Maps scalar base names to TypeScript type names.
///
/// Names absent from the map resolve to themselves, which covers custom
/// scalars (imported from the scalars module) and every object, interface,
/// union, enum or input type declared in the schema.
///
/// # Example
///
/// ```
/// use gqlts_core::ScalarTypeMap;
///
/// let map = ScalarTypeMap::new().merged([("ID", "number")]);
/// assert_eq!(map.resolve("ID"), "number");
/// assert_eq!(map.resolve("String"), "string");
/// assert_eq!(map.resolve("Money"), "Money");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarTypeMap {
    entries: IndexMap<String, String>,
}

impl ScalarTypeMap {
    /// Create a map holding the built-in scalar defaults.
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_SCALARS
                .iter()
                .map(|(name, ty)| (name.to_string(), ty.to_string()))
                .collect(),
        }
    }

    /// Merge overrides on top of this map. Entries from `overrides` win.
    pub fn merged<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, ty) in overrides {
            self.entries.insert(name.into(), ty.into());
        }
        self
    }

    /// Get the mapped type for a scalar, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Resolve a base name, passing unknown names through unchanged.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }
}

impl Default for ScalarTypeMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let map = ScalarTypeMap::new();
        assert_eq!(map.get("ID"), Some("string"));
        assert_eq!(map.get("String"), Some("string"));
        assert_eq!(map.get("Int"), Some("number"));
        assert_eq!(map.get("Float"), Some("number"));
        assert_eq!(map.get("Boolean"), Some("boolean"));
    }

    #[test]
    fn test_unknown_name_passes_through() {
        let map = ScalarTypeMap::new();
        assert_eq!(map.get("Money"), None);
        assert_eq!(map.resolve("Money"), "Money");
        assert_eq!(map.resolve("User"), "User");
    }

    #[test]
    fn test_overrides_win() {
        let map = ScalarTypeMap::new().merged([("Int", "bigint"), ("Money", "string")]);
        assert_eq!(map.resolve("Int"), "bigint");
        assert_eq!(map.resolve("Money"), "string");
        // untouched defaults stay active
        assert_eq!(map.resolve("Float"), "number");
    }
}
