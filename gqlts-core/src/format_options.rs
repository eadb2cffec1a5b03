//! Formatter options in the Prettier configuration shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parser name for TypeScript declaration output.
pub const TYPESCRIPT_PARSER: &str = "typescript";

/// Line terminator used in formatted output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    /// Keep whatever the input uses; generated text always uses `\n`.
    Auto,
}

impl EndOfLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf | Self::Auto => "\n",
            Self::Crlf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Options handed to the formatter.
///
/// Deserializes from a Prettier-style configuration (`camelCase` keys).
/// Keys the formatter does not know about are kept in [`FormatOptions::extra`]
/// so they survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub parser: Option<String>,
    pub tab_width: u8,
    pub use_tabs: bool,
    pub single_quote: bool,
    pub semi: bool,
    pub print_width: u16,
    pub end_of_line: EndOfLine,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormatOptions {
    /// Return a copy with the parser replaced.
    pub fn with_parser(mut self, parser: impl Into<String>) -> Self {
        self.parser = Some(parser.into());
        self
    }

    /// The parser to use, `typescript` when unset.
    pub fn parser(&self) -> &str {
        self.parser.as_deref().unwrap_or(TYPESCRIPT_PARSER)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            parser: None,
            tab_width: 2,
            use_tabs: false,
            single_quote: false,
            semi: true,
            print_width: 80,
            end_of_line: EndOfLine::Lf,
            extra: Map::new(),
        }
    }
}
