//! TypeScript resolver type generator for GraphQL schemas.
//!
//! Converts schema-definition-language text into TypeScript declarations
//! that bind every schema field to a resolver signature taking arguments,
//! a context value and request metadata (`info`).
//!
//! # Usage
//!
//! ```
//! use gqlts_core::GenerationOptions;
//! use gqlts_typescript::generate_server_types;
//!
//! let schema = r#"
//!     scalar Money
//!     type Query { price(sku: ID!): Money }
//! "#;
//! let output = generate_server_types(schema, &GenerationOptions::default()).unwrap();
//!
//! assert!(output.contains("import { Money } from \"./scalars\";"));
//! assert!(output.contains("price: Field<Money | null, { sku: string }>;"));
//! ```
//!
//! # Generated Output
//!
//! - a notice that the file is generated, naming the tool and its version
//! - `import { Context, Info }` from the context module, plus custom scalars
//! - the `ArgsObject`, `EmptyArgs`, `Resolver` and `Field` helper types
//! - one interface, union or enum per object, interface, union, enum and
//!   input definition, in schema order
//! - `export const source`, the schema text itself

mod code_file;
mod declarations;
mod description;
mod error;
mod generator;
mod imports;
mod notice;
mod source;
mod standard_types;
mod type_mapper;

pub mod ast;
pub mod schema;

pub use code_file::CodeFile;
pub use declarations::{Declaration, DeclarationBuilder};
pub use description::DocComment;
pub use error::{Error, Result};
pub use generator::{Generator, generate_server_types};
pub use imports::{CONTEXT_SYMBOLS, custom_scalars, resolve_imports};
pub use notice::{Notice, TOOL_NAME, VERSION, VERSION_PLACEHOLDER, with_version_placeholder};
pub use source::{SOURCE_CONST, escape_template, source_const};
pub use standard_types::StandardTypes;
pub use type_mapper::TypeScriptTypeMapper;
