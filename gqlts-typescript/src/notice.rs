//! The generated-code notice at the top of every output.

use gqlts_codegen::{CodeFragment, Renderable};

/// Tool name written into the notice.
pub const TOOL_NAME: &str = "gqlts";

/// Version of this generator, as written into the notice.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Template string standing in for the version in stored snapshots.
pub const VERSION_PLACEHOLDER: &str = "<%= PACKAGE_VERSION %>";

const RULE_OPEN: &str = "/* *********************************************************************";
const RULE_CLOSE: &str = " ***********************************************************************/";

/// Block comment warning that the file is generated.
#[derive(Debug, Clone)]
pub struct Notice {
    version: String,
}

impl Notice {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self::new(VERSION)
    }
}

impl Renderable for Notice {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        [
            RULE_OPEN.to_string(),
            " * This code was generated by a tool.".to_string(),
            format!(" * {TOOL_NAME}@{}", self.version),
            " *".to_string(),
            " * Changes to this file may cause incorrect behavior and will be lost if".to_string(),
            " * the code is regenerated.".to_string(),
            RULE_CLOSE.to_string(),
        ]
        .into_iter()
        .map(CodeFragment::Line)
        .collect()
    }
}

/// Replace the concrete version in the notice of `output` with
/// [`VERSION_PLACEHOLDER`], so stored snapshots survive version bumps.
pub fn with_version_placeholder(output: &str) -> String {
    output.replacen(
        &format!("{TOOL_NAME}@{VERSION}"),
        &format!("{TOOL_NAME}@{VERSION_PLACEHOLDER}"),
        1,
    )
}
