//! Schema intermediate representation.
//!
//! The parsed SDL document is lowered once into these types; every
//! declaration builder works from them instead of the parser AST.

mod lower;

/// A parsed schema: its definitions in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub definitions: Vec<Definition>,
}

/// One top-level schema definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Object(ObjectDefinition),
    Interface(InterfaceDefinition),
    Union(UnionDefinition),
    Enum(EnumDefinition),
    InputObject(InputObjectDefinition),
    Scalar(ScalarDefinition),
    /// Schema definitions, extensions and directive definitions.
    Unsupported,
}

impl Definition {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Object(def) => Some(&def.name),
            Self::Interface(def) => Some(&def.name),
            Self::Union(def) => Some(&def.name),
            Self::Enum(def) => Some(&def.name),
            Self::InputObject(def) => Some(&def.name),
            Self::Scalar(def) => Some(&def.name),
            Self::Unsupported => None,
        }
    }
}

/// Description text and deprecation state attached to a schema element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Docs {
    pub description: Option<String>,
    pub deprecation: Option<Deprecation>,
}

/// A `@deprecated` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deprecation {
    /// The `reason` argument, when given as a string literal.
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
    pub name: String,
    pub docs: Docs,
    /// Implemented interface names, in source order.
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDefinition {
    pub name: String,
    pub docs: Docs,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionDefinition {
    pub name: String,
    pub docs: Docs,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    pub name: String,
    pub docs: Docs,
    pub values: Vec<EnumValueDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDescriptor {
    pub name: String,
    pub docs: Docs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDefinition {
    pub name: String,
    pub docs: Docs,
    pub fields: Vec<InputValueDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarDefinition {
    pub name: String,
    pub docs: Docs,
}

/// A resolvable field of an object or interface.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
    pub arguments: Vec<InputValueDescriptor>,
    pub docs: Docs,
}

/// A field argument or input object field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDescriptor {
    pub name: String,
    pub ty: TypeDescriptor,
    pub docs: Docs,
}

/// The canonical shape of a field type.
///
/// At most one level of list wrapping is representable:
/// `list_element_nullable` is `Some` exactly when `is_list` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub base_name: String,
    /// Whether the outermost type accepts `null`.
    pub nullable: bool,
    pub is_list: bool,
    pub list_element_nullable: Option<bool>,
}

impl TypeDescriptor {
    /// A named (non-list) type.
    pub fn named(base_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            base_name: base_name.into(),
            nullable,
            is_list: false,
            list_element_nullable: None,
        }
    }

    /// A list of a named type.
    pub fn list(base_name: impl Into<String>, nullable: bool, element_nullable: bool) -> Self {
        Self {
            base_name: base_name.into(),
            nullable,
            is_list: true,
            list_element_nullable: Some(element_nullable),
        }
    }
}
