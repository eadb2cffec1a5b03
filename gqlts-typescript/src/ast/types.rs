//! TypeScript type alias and union builders.

use gqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::doc_fragment;

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = doc_fragment(&self.doc).into_iter().collect();
        fragments.push(CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, self.ty
        )));
        fragments
    }
}

/// Builder for TypeScript union types.
///
/// A union without variants renders as `never`.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let ty = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };
        TypeAlias {
            name: self.name.clone(),
            doc: self.doc.clone(),
            ty,
        }
        .to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("EmptyArgs", "{ [key: string]: never }").build();
        assert_eq!(t, "export type EmptyArgs = { [key: string]: never };\n");
    }

    #[test]
    fn test_type_alias_with_doc() {
        let t = TypeAlias::new("Id", "string").doc("/** An id */").build();
        assert_eq!(t, "/** An id */\nexport type Id = string;\n");
    }

    #[test]
    fn test_union() {
        let u = Union::new("SearchResult")
            .variant("User")
            .variant("Post")
            .build();
        assert_eq!(u, "export type SearchResult = User | Post;\n");
    }

    #[test]
    fn test_empty_union_is_never() {
        assert_eq!(Union::new("Nothing").build(), "export type Nothing = never;\n");
    }
}
