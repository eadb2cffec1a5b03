//! Core option types for the gqlts resolver type generator.
//!
//! This crate holds the value objects shared by the generator and the
//! command-line binary: the scalar type map, the generation options and the
//! formatter options.

mod format_options;
mod options;
mod type_map;

pub use format_options::{EndOfLine, FormatOptions, TYPESCRIPT_PARSER};
pub use options::{DEFAULT_CONTEXT_IMPORT_PATH, DEFAULT_SCALARS_IMPORT_PATH, GenerationOptions};
pub use type_map::ScalarTypeMap;
