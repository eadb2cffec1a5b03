//! Options for a single generation run.

use indexmap::IndexMap;

use crate::{FormatOptions, ScalarTypeMap};

/// Default module path the `Context` and `Info` types are imported from.
pub const DEFAULT_CONTEXT_IMPORT_PATH: &str = "./context";

/// Default module path custom scalar types are imported from.
pub const DEFAULT_SCALARS_IMPORT_PATH: &str = "./scalars";

/// Immutable options for one call to the generator.
///
/// Built with consuming setters:
///
/// ```
/// use gqlts_core::GenerationOptions;
///
/// let options = GenerationOptions::new()
///     .with_scalar("DateTime", "string")
///     .with_context_import_path("../server/context");
///
/// assert_eq!(options.scalar_type_map().resolve("DateTime"), "string");
/// assert_eq!(options.context_import_path(), "../server/context");
/// assert_eq!(options.scalars_import_path(), "./scalars");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    format: FormatOptions,
    type_map: IndexMap<String, String>,
    context_import_path: String,
    scalars_import_path: String,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatter options.
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    /// Map a scalar to a TypeScript type, overriding any default.
    pub fn with_scalar(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.type_map.insert(name.into(), ty.into());
        self
    }

    /// Add several scalar mappings at once.
    pub fn with_type_map<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.type_map
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_context_import_path(mut self, path: impl Into<String>) -> Self {
        self.context_import_path = path.into();
        self
    }

    pub fn with_scalars_import_path(mut self, path: impl Into<String>) -> Self {
        self.scalars_import_path = path.into();
        self
    }

    pub fn format(&self) -> &FormatOptions {
        &self.format
    }

    /// Caller-supplied scalar overrides, without the defaults.
    pub fn type_map(&self) -> &IndexMap<String, String> {
        &self.type_map
    }

    pub fn context_import_path(&self) -> &str {
        &self.context_import_path
    }

    pub fn scalars_import_path(&self) -> &str {
        &self.scalars_import_path
    }

    /// Build the effective scalar map: defaults with the overrides on top.
    pub fn scalar_type_map(&self) -> ScalarTypeMap {
        ScalarTypeMap::new().merged(
            self.type_map
                .iter()
                .map(|(name, ty)| (name.as_str(), ty.as_str())),
        )
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            format: FormatOptions::default(),
            type_map: IndexMap::new(),
            context_import_path: DEFAULT_CONTEXT_IMPORT_PATH.to_string(),
            scalars_import_path: DEFAULT_SCALARS_IMPORT_PATH.to_string(),
        }
    }
}
