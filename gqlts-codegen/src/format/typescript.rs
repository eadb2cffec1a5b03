//! TypeScript formatting backed by dprint.

use std::path::Path;

use dprint_plugin_typescript::configuration::{
    Configuration, ConfigurationBuilder, QuoteStyle, SemiColons,
};
use gqlts_core::{EndOfLine, FormatOptions, TYPESCRIPT_PARSER};
use tracing::debug;

use super::{FormatError, Formatter};

/// Name the formatter is told the generated file has. Only the extension
/// matters: it selects TypeScript syntax.
const FILE_NAME: &str = "generated.ts";

/// Formats generated TypeScript with `dprint-plugin-typescript`.
///
/// `printWidth`, `tabWidth`, `useTabs`, `singleQuote` and `semi` map onto
/// the matching dprint settings. Template literal contents are never
/// touched, so the embedded schema source survives byte for byte.
///
/// # Example
///
/// ```
/// use gqlts_codegen::format::{Formatter, TypeScriptFormatter};
/// use gqlts_core::FormatOptions;
///
/// let options = FormatOptions {
///     tab_width: 4,
///     single_quote: true,
///     ..FormatOptions::default()
/// };
/// let out = TypeScriptFormatter
///     .format("export enum A {\nB = \"B\",\n}\n", &options)
///     .unwrap();
/// assert_eq!(out, "export enum A {\n    B = 'B',\n}\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptFormatter;

impl Formatter for TypeScriptFormatter {
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String, FormatError> {
        if options.parser() != TYPESCRIPT_PARSER {
            return Err(FormatError::UnsupportedParser(options.parser().to_string()));
        }

        let config = configuration(options);
        let formatted = dprint_plugin_typescript::format_text(
            Path::new(FILE_NAME),
            None,
            source.to_string(),
            &config,
        )
        .map_err(|err| FormatError::Syntax(err.to_string()))?
        .unwrap_or_else(|| source.to_string());

        debug!(
            bytes = formatted.len(),
            print_width = options.print_width,
            "formatted TypeScript"
        );

        Ok(match options.end_of_line {
            EndOfLine::Lf | EndOfLine::Auto => formatted,
            eol => formatted.replace('\n', eol.as_str()),
        })
    }
}

/// Translate Prettier-style options into a dprint configuration.
fn configuration(options: &FormatOptions) -> Configuration {
    let quote_style = if options.single_quote {
        QuoteStyle::PreferSingle
    } else {
        QuoteStyle::PreferDouble
    };
    let semi_colons = if options.semi {
        SemiColons::Always
    } else {
        SemiColons::Asi
    };

    ConfigurationBuilder::new()
        .line_width(u32::from(options.print_width))
        .indent_width(options.tab_width)
        .use_tabs(options.use_tabs)
        .quote_style(quote_style)
        .semi_colons(semi_colons)
        .build()
}
