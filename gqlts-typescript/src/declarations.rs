//! Declaration builders, one per supported definition kind.

use gqlts_codegen::{CodeFragment, Renderable};
use gqlts_core::ScalarTypeMap;

use crate::{
    ast::{Enum, EnumMember, Interface, Property, ResolverField, Union},
    description::DocComment,
    schema::{
        Definition, Docs, EnumDefinition, FieldDescriptor, InputObjectDefinition,
        InputValueDescriptor, InterfaceDefinition, ObjectDefinition, UnionDefinition,
    },
    type_mapper::TypeScriptTypeMapper,
};

/// The TypeScript declaration produced for one schema definition.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// Objects and interfaces: every field is a resolver.
    Resolvers(Interface<ResolverField>),
    /// Input objects: plain typed fields.
    Input(Interface<Property>),
    Union(Union),
    Enum(Enum),
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Resolvers(node) => node.to_fragments(),
            Self::Input(node) => node.to_fragments(),
            Self::Union(node) => node.to_fragments(),
            Self::Enum(node) => node.to_fragments(),
        }
    }
}

/// Builds declarations against one effective scalar map.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationBuilder<'a> {
    types: TypeScriptTypeMapper<'a>,
}

impl<'a> DeclarationBuilder<'a> {
    pub fn new(scalars: &'a ScalarTypeMap) -> Self {
        Self {
            types: TypeScriptTypeMapper::new(scalars),
        }
    }

    /// Build the declaration for a definition.
    ///
    /// Scalars and unsupported definitions produce nothing.
    pub fn build(&self, definition: &Definition) -> Option<Declaration> {
        match definition {
            Definition::Object(object) => Some(Declaration::Resolvers(self.object(object))),
            Definition::Interface(interface) => {
                Some(Declaration::Resolvers(self.interface(interface)))
            }
            Definition::Union(union) => Some(Declaration::Union(self.union(union))),
            Definition::Enum(enumeration) => Some(Declaration::Enum(self.enumeration(enumeration))),
            Definition::InputObject(input) => Some(Declaration::Input(self.input_object(input))),
            Definition::Scalar(_) | Definition::Unsupported => None,
        }
    }

    pub fn object(&self, object: &ObjectDefinition) -> Interface<ResolverField> {
        let interface = object
            .interfaces
            .iter()
            .fold(Interface::new(&object.name), |i, name| i.extends(name));

        self.resolvers(interface, &object.docs, &object.fields)
    }

    pub fn interface(&self, interface: &InterfaceDefinition) -> Interface<ResolverField> {
        self.resolvers(
            Interface::new(&interface.name),
            &interface.docs,
            &interface.fields,
        )
    }

    pub fn union(&self, union: &UnionDefinition) -> Union {
        union
            .members
            .iter()
            .fold(Union::new(&union.name), |u, member| u.variant(member))
            .doc(render(&union.docs))
    }

    pub fn enumeration(&self, enumeration: &EnumDefinition) -> Enum {
        enumeration
            .values
            .iter()
            .fold(Enum::new(&enumeration.name), |e, value| {
                e.member(EnumMember::new(&value.name).doc(render(&value.docs)))
            })
            .doc(render(&enumeration.docs))
    }

    pub fn input_object(&self, input: &InputObjectDefinition) -> Interface<Property> {
        input
            .fields
            .iter()
            .fold(Interface::new(&input.name), |i, field| {
                i.member(self.property(field))
            })
            .doc(render(&input.docs))
    }

    fn resolvers(
        &self,
        interface: Interface<ResolverField>,
        docs: &Docs,
        fields: &[FieldDescriptor],
    ) -> Interface<ResolverField> {
        fields
            .iter()
            .fold(interface, |i, field| i.member(self.resolver_field(field)))
            .doc(render(docs))
    }

    fn resolver_field(&self, field: &FieldDescriptor) -> ResolverField {
        field
            .arguments
            .iter()
            .fold(
                ResolverField::new(&field.name, self.types.map_type(&field.ty)),
                |f, arg| f.arg(self.property(arg)),
            )
            .doc(render(&field.docs))
    }

    fn property(&self, value: &InputValueDescriptor) -> Property {
        Property::new(&value.name, self.types.map_type(&value.ty)).doc(render(&value.docs))
    }
}

fn render(docs: &Docs) -> String {
    DocComment::new(docs).render()
}
