//! Formatting of generated code.
//!
//! The generator hands its assembled text to a [`Formatter`]. The default
//! [`TypeScriptFormatter`] runs dprint; other formatters can be plugged in
//! through the trait.

mod typescript;

use gqlts_core::FormatOptions;
use miette::Diagnostic;
use thiserror::Error;

pub use typescript::TypeScriptFormatter;

/// Formats a complete generated source file.
pub trait Formatter {
    /// Format `source` according to `options`.
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String, FormatError>;
}

/// The formatter rejected its input.
///
/// Generated text is well formed by construction, so any of these points at
/// a defect in the generator rather than at the schema.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum FormatError {
    #[error("no formatter available for parser '{0}'")]
    #[diagnostic(
        code(gqlts::format::unsupported_parser),
        help("only the 'typescript' parser is supported")
    )]
    UnsupportedParser(String),

    #[error("formatter rejected the generated code: {0}")]
    #[diagnostic(code(gqlts::format::syntax))]
    Syntax(String),
}
