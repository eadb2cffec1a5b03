//! TypeScript interface builder and its member kinds.

use gqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::{doc_fragment, member_fragments};

/// A plain typed member (`name: Type;`), used for input fields and
/// resolver arguments.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    doc: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn is_documented(&self) -> bool {
        self.doc.as_deref().is_some_and(|doc| !doc.is_empty())
    }

    fn signature(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = doc_fragment(&self.doc).into_iter().collect();
        fragments.push(CodeFragment::Line(format!("{};", self.signature())));
        fragments
    }
}

/// A resolver member: `name: Field<ReturnType>` or, with arguments,
/// `name: Field<ReturnType, { arg: Type }>`.
///
/// Arguments stay on one line unless one of them carries a doc comment.
#[derive(Debug, Clone)]
pub struct ResolverField {
    name: String,
    return_type: String,
    args: Vec<Property>,
    doc: Option<String>,
}

impl ResolverField {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            args: Vec::new(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn arg(mut self, arg: Property) -> Self {
        self.args.push(arg);
        self
    }
}

impl Renderable for ResolverField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = doc_fragment(&self.doc).into_iter().collect();

        if self.args.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}: Field<{}>;",
                self.name, self.return_type
            )));
        } else if self.args.iter().any(Property::is_documented) {
            fragments.push(CodeFragment::block(
                format!("{}: Field<{}, {{", self.name, self.return_type),
                member_fragments(&self.args),
                Some("}>;".to_string()),
            ));
        } else {
            let args: Vec<String> = self.args.iter().map(Property::signature).collect();
            fragments.push(CodeFragment::Line(format!(
                "{}: Field<{}, {{ {} }}>;",
                self.name,
                self.return_type,
                args.join("; ")
            )));
        }

        fragments
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface<M> {
    name: String,
    doc: Option<String>,
    extends: Vec<String>,
    members: Vec<M>,
}

impl<M: Renderable> Interface<M> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            extends: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an `extends` clause entry.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    pub fn member(mut self, member: M) -> Self {
        self.members.push(member);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        if self.extends.is_empty() {
            format!("export interface {}", self.name)
        } else {
            format!(
                "export interface {} extends {}",
                self.name,
                self.extends.join(", ")
            )
        }
    }
}

impl<M: Renderable> Renderable for Interface<M> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = doc_fragment(&self.doc).into_iter().collect();

        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", self.header())));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} {{", self.header()),
                member_fragments(&self.members),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}
