//! Lowering from the `cynic-parser` type system AST into the schema IR.

use cynic_parser::{
    common::WrappingType,
    type_system::{
        Definition as AstDefinition, Description, Directive, FieldDefinition, InputValueDefinition,
        Type, TypeDefinition, iter::Iter,
    },
};
use tracing::debug;

use super::{
    Definition, Deprecation, Docs, EnumDefinition, EnumValueDescriptor, FieldDescriptor,
    InputObjectDefinition, InputValueDescriptor, InterfaceDefinition, ObjectDefinition,
    ScalarDefinition, SchemaDocument, TypeDescriptor, UnionDefinition,
};
use crate::{Error, Result};

impl SchemaDocument {
    /// Parse SDL text into a schema document.
    ///
    /// Syntax errors are reported as [`Error::Parse`].
    pub fn parse(source: &str) -> Result<Self> {
        let document = cynic_parser::parse_type_system_document(source)
            .map_err(|err| Error::parse(source, &err))?;
        let definitions = document
            .definitions()
            .map(lower_definition)
            .collect::<Result<Vec<_>>>()?;

        debug!(definitions = definitions.len(), "parsed schema");
        Ok(Self { definitions })
    }

    /// Iterate over scalar definitions.
    pub fn scalars(&self) -> impl Iterator<Item = &ScalarDefinition> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Scalar(scalar) => Some(scalar),
            _ => None,
        })
    }
}

impl TypeDescriptor {
    /// Normalize a parser type node.
    ///
    /// Returns `None` for a list nested inside another list, which has no
    /// canonical form.
    pub fn from_type(ty: Type<'_>) -> Option<Self> {
        let mut wrappers = ty.wrappers().peekable();

        let nullable = wrappers
            .next_if(|w| matches!(w, WrappingType::NonNull))
            .is_none();
        if wrappers.next_if(|w| matches!(w, WrappingType::List)).is_none() {
            return wrappers
                .next()
                .is_none()
                .then(|| Self::named(ty.name(), nullable));
        }

        let element_nullable = wrappers
            .next_if(|w| matches!(w, WrappingType::NonNull))
            .is_none();
        wrappers
            .next()
            .is_none()
            .then(|| Self::list(ty.name(), nullable, element_nullable))
    }
}

fn lower_definition(definition: AstDefinition<'_>) -> Result<Definition> {
    let ty = match definition {
        AstDefinition::Type(ty) => ty,
        AstDefinition::Schema(_)
        | AstDefinition::SchemaExtension(_)
        | AstDefinition::TypeExtension(_)
        | AstDefinition::Directive(_) => return Ok(Definition::Unsupported),
    };

    let definition = match ty {
        TypeDefinition::Object(object) => Definition::Object(ObjectDefinition {
            name: object.name().to_string(),
            docs: docs(object.description(), object.directives()),
            interfaces: object
                .implements_interfaces()
                .map(str::to_string)
                .collect(),
            fields: lower_fields(object.name(), object.fields())?,
        }),
        TypeDefinition::Interface(interface) => Definition::Interface(InterfaceDefinition {
            name: interface.name().to_string(),
            docs: docs(interface.description(), interface.directives()),
            fields: lower_fields(interface.name(), interface.fields())?,
        }),
        TypeDefinition::Union(union) => Definition::Union(UnionDefinition {
            name: union.name().to_string(),
            docs: docs(union.description(), union.directives()),
            members: union
                .members()
                .map(|member| member.name().to_string())
                .collect(),
        }),
        TypeDefinition::Enum(enumeration) => Definition::Enum(EnumDefinition {
            name: enumeration.name().to_string(),
            docs: docs(enumeration.description(), enumeration.directives()),
            values: enumeration
                .values()
                .map(|value| EnumValueDescriptor {
                    name: value.value().to_string(),
                    docs: docs(value.description(), value.directives()),
                })
                .collect(),
        }),
        TypeDefinition::InputObject(input) => Definition::InputObject(InputObjectDefinition {
            name: input.name().to_string(),
            docs: docs(input.description(), input.directives()),
            fields: lower_input_values(input.name(), input.fields())?,
        }),
        TypeDefinition::Scalar(scalar) => Definition::Scalar(ScalarDefinition {
            name: scalar.name().to_string(),
            docs: docs(scalar.description(), scalar.directives()),
        }),
    };
    Ok(definition)
}

fn lower_fields<'a>(
    owner: &str,
    fields: impl Iterator<Item = FieldDefinition<'a>>,
) -> Result<Vec<FieldDescriptor>> {
    fields
        .map(|field| {
            let location = format!("{owner}.{}", field.name());
            Ok(FieldDescriptor {
                name: field.name().to_string(),
                ty: lower_type(field.ty(), &location)?,
                arguments: lower_input_values(&location, field.arguments())?,
                docs: docs(field.description(), field.directives()),
            })
        })
        .collect()
}

fn lower_input_values<'a>(
    owner: &str,
    values: impl Iterator<Item = InputValueDefinition<'a>>,
) -> Result<Vec<InputValueDescriptor>> {
    values
        .map(|value| {
            let location = format!("{owner}.{}", value.name());
            Ok(InputValueDescriptor {
                name: value.name().to_string(),
                ty: lower_type(value.ty(), &location)?,
                docs: docs(value.description(), value.directives()),
            })
        })
        .collect()
}

fn lower_type(ty: Type<'_>, location: &str) -> Result<TypeDescriptor> {
    TypeDescriptor::from_type(ty).ok_or_else(|| Error::NestedList {
        location: location.to_string(),
    })
}

fn docs<'a>(description: Option<Description<'a>>, directives: Iter<'a, Directive<'a>>) -> Docs {
    Docs {
        description: description.map(|description| description.to_cow().into_owned()),
        deprecation: deprecation(directives),
    }
}

/// Extract `@deprecated`, keeping its `reason` only when it is a string literal.
fn deprecation<'a>(mut directives: Iter<'a, Directive<'a>>) -> Option<Deprecation> {
    let directive = directives.find(|directive| directive.name() == "deprecated")?;
    let reason = directive
        .arguments()
        .find(|argument| argument.name() == "reason")
        .and_then(|argument| argument.value().as_str().map(str::to_string));
    Some(Deprecation { reason })
}
