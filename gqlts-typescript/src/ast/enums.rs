//! TypeScript string enum builder.

use gqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::{doc_fragment, member_fragments};

/// An enum member whose string literal equals its name.
#[derive(Debug, Clone)]
pub struct EnumMember {
    name: String,
    doc: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Renderable for EnumMember {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = doc_fragment(&self.doc).into_iter().collect();
        fragments.push(CodeFragment::Line(format!(
            "{} = \"{}\",",
            self.name, self.name
        )));
        fragments
    }
}

/// Builder for exported string enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    members: Vec<EnumMember>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = doc_fragment(&self.doc).into_iter().collect();

        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!("export enum {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("export enum {} {{", self.name),
                member_fragments(&self.members),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}
