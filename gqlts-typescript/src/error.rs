use gqlts_codegen::FormatError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Name the schema text is reported under in diagnostics.
const SCHEMA_SOURCE_NAME: &str = "schema.graphql";

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse schema: {message}")]
    #[diagnostic(code(gqlts::parse_error))]
    Parse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: SourceSpan,
    },

    #[error("nested list type at '{location}' is not supported")]
    #[diagnostic(
        code(gqlts::nested_list),
        help("only one level of list wrapping can be generated, such as [T] or [T!]!")
    )]
    NestedList { location: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    /// Wrap a parser error, pointing at the span it reports.
    pub(crate) fn parse(schema: &str, error: &cynic_parser::Error) -> Self {
        let span = error.span();
        Self::Parse {
            message: error.to_string(),
            src: NamedSource::new(SCHEMA_SOURCE_NAME, schema.to_string()),
            span: (span.start..span.end.max(span.start)).into(),
        }
    }
}
