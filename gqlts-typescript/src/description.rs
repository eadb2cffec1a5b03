//! Doc comments built from schema descriptions and `@deprecated`.

use crate::schema::Docs;

/// The lines of a JSDoc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    /// Collect the description lines of `docs`, followed by a
    /// `@deprecated [reason]` line when the element is deprecated.
    pub fn new(docs: &Docs) -> Self {
        let mut lines = docs.description.as_deref().map(split).unwrap_or_default();

        if let Some(deprecation) = &docs.deprecation {
            match deprecation.reason.as_deref().filter(|reason| !reason.is_empty()) {
                Some(reason) => {
                    let mut reason = split(reason).into_iter();
                    if let Some(first) = reason.next() {
                        lines.push(format!("@deprecated {first}").trim_end().to_string());
                    }
                    lines.extend(reason);
                }
                None => lines.push("@deprecated".to_string()),
            }
        }

        Self { lines }
    }

    /// Render the comment. Empty comments render as an empty string.
    pub fn render(&self) -> String {
        match self.lines.as_slice() {
            [] => String::new(),
            [line] => format!("/** {line} */"),
            lines => {
                let mut out = String::from("/**\n");
                for line in lines {
                    if line.is_empty() {
                        out.push_str(" *\n");
                    } else {
                        out.push_str(" * ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                out.push_str(" */");
                out
            }
        }
    }
}

/// Split text into comment lines, normalizing `\r\n`.
fn split(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n").split('\n').map(escape).collect()
}

/// Keep description text from closing the comment early.
fn escape(line: &str) -> String {
    line.replace("*/", "*\\/")
}
